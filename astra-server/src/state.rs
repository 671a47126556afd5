//! Shared application state for the astra server

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use astra_core::{FileIndex, MemoryUserStore, RelayHub, UploadSigner, UserStore};

use crate::UploadConfig;

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Realtime relay hub
    pub relay: Arc<RelayHub>,
    /// User registry
    pub users: Arc<dyn UserStore>,
    /// Index of known uploads
    pub files: Arc<FileIndex>,
    /// Signer for time-limited upload URLs
    pub upload_signer: Arc<UploadSigner>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState with default components
    pub fn new() -> Self {
        Self::from_upload_config(&UploadConfig::default())
    }

    /// Create AppState with the upload signer built from config
    pub fn from_upload_config(upload: &UploadConfig) -> Self {
        let signer = UploadSigner::new(upload.base_url.clone(), upload.secret.clone())
            .with_ttl(Duration::seconds(upload.ttl_secs));
        Self::with_components(
            Arc::new(RelayHub::new()),
            Arc::new(MemoryUserStore::new()),
            Arc::new(FileIndex::new()),
            Arc::new(signer),
        )
    }

    /// Create AppState with custom components (for testing)
    pub fn with_components(
        relay: Arc<RelayHub>,
        users: Arc<dyn UserStore>,
        files: Arc<FileIndex>,
        upload_signer: Arc<UploadSigner>,
    ) -> Self {
        Self {
            relay,
            users,
            files,
            upload_signer,
            started_at: Utc::now(),
        }
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
