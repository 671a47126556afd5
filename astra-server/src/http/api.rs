//! Health check handler

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
    /// Number of active relay connections
    pub active_connections: usize,
}

/// Health check endpoint
///
/// Returns server status, version, uptime, and relay connection count.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let active_connections = state.relay.connection_count().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        active_connections,
    })
}
