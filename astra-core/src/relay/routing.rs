//! Event-name to room routing

use std::collections::HashMap;

/// Room receiving vehicle telemetry broadcasts
pub const DASHBOARD_ROOM: &str = "dashboard";
/// Room receiving task status broadcasts
pub const NOTIFICATIONS_ROOM: &str = "notifications";

/// Event name for vehicle telemetry frames
pub const TELEMETRY_EVENT: &str = "telemetry";
/// Event name for task status changes
pub const TASK_UPDATE_EVENT: &str = "task_update";

/// Maps event names to the room their broadcasts target.
///
/// Where an event goes is product policy decided here, never by the
/// publisher's own room memberships. The table is a plain map so new routes
/// can be added without touching the hub; unrouted event names fan out to
/// nobody.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Create a table with no routes
    pub fn empty() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Add or replace the route for an event name
    pub fn insert(&mut self, event: impl Into<String>, room: impl Into<String>) {
        self.routes.insert(event.into(), room.into());
    }

    /// Target room for an event name, if the event is routed
    pub fn target(&self, event: &str) -> Option<&str> {
        self.routes.get(event).map(String::as_str)
    }

    /// Number of routes in the table
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    /// The two product routes: telemetry frames go to the dashboard room,
    /// task updates go to the notifications room.
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert(TELEMETRY_EVENT, DASHBOARD_ROOM);
        table.insert(TASK_UPDATE_EVENT, NOTIFICATIONS_ROOM);
        table
    }
}
