//! WebSocket connection handling
//!
//! Each accepted socket registers with the relay hub and then runs a select
//! loop: inbound frames go to the hub (joins mutate membership, anything else
//! is routed), outbound deliveries are serialized and written back. Whatever
//! ends the loop, the connection deregisters exactly once.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use astra_core::relay::ConnectionId;

use super::protocol::{ClientFrame, JOIN_EVENT, ServerFrame};
use crate::AppState;

/// WebSocket upgrade handler for the relay endpoint
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    let (tx, mut deliveries) = mpsc::unbounded_channel();
    let conn = state.relay.register(tx).await;

    loop {
        tokio::select! {
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        handle_frame(&text, conn, &state).await;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if sender.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {
                        // Binary and pong frames are ignored
                    }
                    Some(Err(e)) => {
                        // Abrupt transport loss takes the same exit as a
                        // voluntary close
                        debug!("websocket error on {}: {}", conn, e);
                        break;
                    }
                }
            }

            delivery = deliveries.recv() => {
                match delivery {
                    Some(delivery) => {
                        let frame = ServerFrame::from(delivery);
                        match serde_json::to_string(&frame) {
                            Ok(json) => {
                                if sender.send(Message::Text(json.into())).await.is_err() {
                                    break;
                                }
                            }
                            Err(e) => warn!("failed to serialize delivery: {}", e),
                        }
                    }
                    None => break,
                }
            }
        }
    }

    state.relay.deregister(conn).await;
}

/// Dispatch one inbound frame.
///
/// The relay surfaces no errors to clients: unparseable frames and joins
/// without a room name are dropped with a debug log, and event names the
/// route table does not know simply fan out to nobody.
async fn handle_frame(text: &str, conn: ConnectionId, state: &AppState) {
    let frame: ClientFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(e) => {
            debug!("unparseable frame from {}: {}", conn, e);
            return;
        }
    };

    if frame.event == JOIN_EVENT {
        match frame.data.as_str() {
            Some(room) => state.relay.join(conn, room).await,
            None => debug!("join from {} without a room name, ignoring", conn),
        }
        return;
    }

    state.relay.publish(&frame.event, frame.data).await;
}
