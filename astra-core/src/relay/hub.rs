//! Connection and room bookkeeping for the realtime relay

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde_json::Value;
use tokio::sync::{RwLock, mpsc};
use tracing::{info, trace};
use uuid::Uuid;

use super::routing::RouteTable;

/// Opaque identifier for one active relay connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A named event queued for delivery to one connection
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    /// Event name, forwarded unchanged
    pub event: String,
    /// Payload, forwarded verbatim; the relay never inspects it
    pub payload: Value,
}

/// Sending half of a connection's outbound queue
pub type DeliverySender = mpsc::UnboundedSender<Delivery>;
/// Receiving half of a connection's outbound queue
pub type DeliveryReceiver = mpsc::UnboundedReceiver<Delivery>;

#[derive(Default)]
struct HubState {
    connections: HashMap<ConnectionId, DeliverySender>,
    rooms: HashMap<String, HashSet<ConnectionId>>,
}

/// The realtime relay: tracks connections and room memberships and fans
/// routed events out to room members without interpreting their payloads.
///
/// Joins, publishes, and disconnects arrive from different connection tasks
/// in parallel, so all membership state lives behind one lock. Per-connection
/// delivery order is preserved by the outbound mpsc queues.
pub struct RelayHub {
    state: RwLock<HubState>,
    routes: RouteTable,
}

impl RelayHub {
    /// Create a hub with the default product routes
    pub fn new() -> Self {
        Self::with_routes(RouteTable::default())
    }

    /// Create a hub dispatching with a custom route table
    pub fn with_routes(routes: RouteTable) -> Self {
        Self {
            state: RwLock::new(HubState::default()),
            routes,
        }
    }

    /// Accept a new connection, handing the hub the sending half of its
    /// outbound queue. Returns the id the connection is tracked under.
    pub async fn register(&self, sender: DeliverySender) -> ConnectionId {
        let id = ConnectionId::new();
        self.state.write().await.connections.insert(id, sender);
        info!("relay client connected: {}", id);
        id
    }

    /// Add a connection to a room.
    ///
    /// Membership is a set, so joining a room twice is a no-op. Any string
    /// names a room, including one nobody publishes to. Joins from an id the
    /// hub no longer tracks are dropped rather than resurrecting membership.
    pub async fn join(&self, conn: ConnectionId, room: &str) {
        let mut state = self.state.write().await;
        if !state.connections.contains_key(&conn) {
            trace!("join from unknown connection {}, ignoring", conn);
            return;
        }
        state.rooms.entry(room.to_string()).or_default().insert(conn);
        trace!("connection {} joined room {:?}", conn, room);
    }

    /// Forward a named event to every current member of its routed room.
    ///
    /// The payload goes out verbatim, to every member including the publisher
    /// if it happens to be one; the publisher's own memberships play no part
    /// in the routing decision. Unrouted events and empty rooms both fan out
    /// to nobody, and neither is an error. Returns how many members were
    /// handed the event.
    pub async fn publish(&self, event: &str, payload: Value) -> usize {
        let Some(room) = self.routes.target(event) else {
            trace!("no route for event {:?}, dropping", event);
            return 0;
        };

        let state = self.state.read().await;
        let Some(members) = state.rooms.get(room) else {
            return 0;
        };

        let mut delivered = 0;
        for conn in members {
            if let Some(tx) = state.connections.get(conn) {
                let delivery = Delivery {
                    event: event.to_owned(),
                    payload: payload.clone(),
                };
                // A receiver dropped mid-shutdown is skipped; membership
                // cleanup belongs to deregister alone.
                if tx.send(delivery).is_ok() {
                    delivered += 1;
                }
            }
        }

        trace!(
            "event {:?} fanned out to {} member(s) of {:?}",
            event, delivered, room
        );
        delivered
    }

    /// Drop a connection and every room membership it holds.
    ///
    /// Voluntary close and abrupt transport failure both land here and are
    /// indistinguishable to the hub.
    pub async fn deregister(&self, conn: ConnectionId) {
        let mut state = self.state.write().await;
        if state.connections.remove(&conn).is_none() {
            return;
        }
        for members in state.rooms.values_mut() {
            members.remove(&conn);
        }
        state.rooms.retain(|_, members| !members.is_empty());
        info!("relay client disconnected: {}", conn);
    }

    /// Number of active connections
    pub async fn connection_count(&self) -> usize {
        self.state.read().await.connections.len()
    }

    /// Number of members currently in a room
    pub async fn room_size(&self, room: &str) -> usize {
        self.state
            .read()
            .await
            .rooms
            .get(room)
            .map_or(0, HashSet::len)
    }

    /// Rooms the connection is currently a member of
    pub async fn rooms_of(&self, conn: ConnectionId) -> Vec<String> {
        self.state
            .read()
            .await
            .rooms
            .iter()
            .filter(|(_, members)| members.contains(&conn))
            .map(|(room, _)| room.clone())
            .collect()
    }

    /// The route table this hub dispatches with
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

impl Default for RelayHub {
    fn default() -> Self {
        Self::new()
    }
}
