//! WebSocket test client for relay protocol testing
//!
//! Note: Some methods may appear unused because they're only used in specific
//! test files and clippy checks each test independently.

use std::net::SocketAddr;
use std::time::Duration;

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Low-level WebSocket connection
pub struct WsConnection {
    sink: SplitSink<WsStream, Message>,
    stream: SplitStream<WsStream>,
}

impl WsConnection {
    /// Connect to the relay endpoint
    pub async fn connect(addr: SocketAddr) -> Self {
        let url = format!("ws://{}/ws", addr);
        let (ws, _) = tokio_tungstenite::connect_async(&url)
            .await
            .expect("Failed to connect");
        let (sink, stream) = ws.split();
        Self { sink, stream }
    }

    /// Send raw text message
    pub async fn send_raw(&mut self, msg: &str) {
        self.sink
            .send(Message::Text(msg.to_string().into()))
            .await
            .unwrap();
    }

    /// Send JSON message
    pub async fn send_json<T: Serialize>(&mut self, msg: &T) {
        let json = serde_json::to_string(msg).unwrap();
        self.send_raw(&json).await;
    }

    /// Receive raw text message
    pub async fn recv_raw(&mut self) -> String {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return text.to_string(),
                Some(Ok(Message::Ping(_))) => continue,
                Some(Ok(_)) => continue,
                Some(Err(e)) => panic!("WebSocket error: {}", e),
                None => panic!("WebSocket closed"),
            }
        }
    }

    /// Receive with timeout, returns None if timeout
    pub async fn recv_timeout(&mut self, duration: Duration) -> Option<String> {
        tokio::time::timeout(duration, self.recv_raw()).await.ok()
    }

    /// Send a close frame
    pub async fn close(&mut self) {
        let _ = self.sink.send(Message::Close(None)).await;
    }
}

/// High-level relay test client speaking `{event, data}` frames
pub struct RelayClient {
    pub conn: WsConnection,
}

impl RelayClient {
    #[allow(dead_code)]
    pub async fn connect(addr: SocketAddr) -> Self {
        Self {
            conn: WsConnection::connect(addr).await,
        }
    }

    /// Join a room
    #[allow(dead_code)]
    pub async fn join(&mut self, room: &str) {
        self.conn
            .send_json(&serde_json::json!({"event": "join", "data": room}))
            .await;
    }

    /// Publish a named event
    #[allow(dead_code)]
    pub async fn publish(&mut self, event: &str, data: Value) {
        self.conn
            .send_json(&serde_json::json!({"event": event, "data": data}))
            .await;
    }

    /// Receive the next delivered frame as (event, data)
    #[allow(dead_code)]
    pub async fn recv_frame(&mut self) -> (String, Value) {
        let text = self.conn.recv_raw().await;
        let frame: Value = serde_json::from_str(&text).expect("Failed to parse frame");
        let event = frame["event"].as_str().expect("frame without event").to_string();
        (event, frame["data"].clone())
    }

    /// Receive the next frame, or None on timeout
    #[allow(dead_code)]
    pub async fn recv_frame_timeout(&mut self, duration: Duration) -> Option<(String, Value)> {
        let text = self.conn.recv_timeout(duration).await?;
        let frame: Value = serde_json::from_str(&text).ok()?;
        let event = frame["event"].as_str()?.to_string();
        Some((event, frame["data"].clone()))
    }

    /// Assert no frame arrives within duration
    #[allow(dead_code)]
    pub async fn expect_no_frame(&mut self, duration: Duration) {
        assert!(
            self.conn.recv_timeout(duration).await.is_none(),
            "Expected no frame but received one"
        );
    }

    /// Close the connection
    #[allow(dead_code)]
    pub async fn close(&mut self) {
        self.conn.close().await;
    }
}
