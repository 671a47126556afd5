//! astra-core: Core library for the ASTRA team-management backend
//!
//! This crate provides the foundational components for the backend:
//!
//! - **Realtime relay** - [`RelayHub`] tracks connections and room
//!   memberships and fans routed events out to room members
//! - **Routing** - [`RouteTable`] maps event names to their target rooms
//! - **User registry** - [`UserStore`] trait and [`MemoryUserStore`] backing
//!   the signup/approval workflow
//! - **Team catalog** - [`Team`] enumerating the project teams
//! - **File index** - [`FileIndex`] listing uploads known to the system
//! - **Upload signing** - [`UploadSigner`] issuing time-limited PUT URLs
//!
//! # Quick Start
//!
//! ```
//! use astra_core::relay::{RelayHub, DASHBOARD_ROOM};
//! use serde_json::json;
//! use tokio::sync::mpsc;
//!
//! # async fn example() {
//! let hub = RelayHub::new();
//!
//! // One connection joins the dashboard room
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! let conn = hub.register(tx).await;
//! hub.join(conn, DASHBOARD_ROOM).await;
//!
//! // Telemetry is routed to dashboard members
//! hub.publish("telemetry", json!({"temp": 42})).await;
//! let delivery = rx.recv().await.unwrap();
//! assert_eq!(delivery.event, "telemetry");
//! # }
//! ```

pub mod error;
pub mod files;
pub mod relay;
pub mod teams;
pub mod upload;
pub mod users;

// Re-export key types for convenience
pub use error::{SignError, UserStoreError};
pub use files::{FileIndex, FileRecord};
pub use relay::{ConnectionId, Delivery, RelayHub, RouteTable};
pub use teams::Team;
pub use upload::{SignedUpload, UploadSigner};
pub use users::{MemoryUserStore, NewUser, User, UserRole, UserStatus, UserStore};
