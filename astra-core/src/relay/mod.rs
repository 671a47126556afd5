//! Realtime relay: connection tracking, room membership, routed fan-out

mod hub;
mod routing;

pub use hub::{ConnectionId, Delivery, DeliveryReceiver, DeliverySender, RelayHub};
pub use routing::{
    DASHBOARD_ROOM, NOTIFICATIONS_ROOM, RouteTable, TASK_UPDATE_EVENT, TELEMETRY_EVENT,
};
