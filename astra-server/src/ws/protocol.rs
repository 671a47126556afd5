//! Relay wire protocol frames
//!
//! Both directions carry the same shape: a named event plus an arbitrary
//! JSON payload. The relay never inspects the payload; delivered frames
//! carry the event name and data exactly as published.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use astra_core::relay::Delivery;

/// Event name clients use to join a room; the frame data is the room name
pub const JOIN_EVENT: &str = "join";

/// A frame as sent by clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientFrame {
    /// Event name; `join` is handled by the connection, everything else is
    /// handed to the hub for routing
    pub event: String,
    /// Arbitrary payload; defaults to null when absent
    #[serde(default)]
    pub data: Value,
}

/// A frame as delivered to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerFrame {
    pub event: String,
    pub data: Value,
}

impl From<Delivery> for ServerFrame {
    fn from(delivery: Delivery) -> Self {
        Self {
            event: delivery.event,
            data: delivery.payload,
        }
    }
}
