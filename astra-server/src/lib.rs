//! astra-server - HTTP and WebSocket server for the ASTRA backend
//!
//! This crate provides the server infrastructure that owns the relay hub,
//! the user registry, and the file index. Browser clients reach the relay
//! over the `/ws` endpoint and everything else over the REST API.

mod error;
pub mod http;
mod state;
pub mod ws;

use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;

use astra_core::upload::DEFAULT_UPLOAD_TTL_SECS;

/// The main astra server
pub struct AstraServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl AstraServer {
    /// Create a new server with state built from the config
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::from_upload_config(&config.upload));
        Self { config, state }
    }

    /// Create a server with custom state (for testing)
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;
        self.run_with_listener(listener).await
    }

    /// Run the server on an already-bound listener.
    ///
    /// Integration tests bind port 0 themselves and hand the listener over.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), ServerError> {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("astra server listening on {}", addr);
        }

        let router = create_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Upload URL signing settings
    pub upload: UploadConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            upload: UploadConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            upload: UploadConfig::default(),
        }
    }

    /// Returns the socket address string (e.g., "0.0.0.0:4000")
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upload URL signing configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Storage base URL signed upload URLs point at
    pub base_url: String,
    /// Secret shared with the storage gateway
    pub secret: String,
    /// Signed URL lifetime in seconds
    pub ttl_secs: i64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/storage".to_string(),
            secret: String::new(),
            ttl_secs: DEFAULT_UPLOAD_TTL_SECS,
        }
    }
}
