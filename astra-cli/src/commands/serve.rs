//! Serve command for running the astra server
//!
//! The server provides the REST API for accounts, rosters, files, and upload
//! signing, plus the `/ws` relay endpoint for realtime fan-out.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use astra_server::{AstraServer, ServerConfig, UploadConfig};

use crate::config::{AstraConfig, ConfigLoader};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Path to a config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = ConfigLoader::load(args.config.as_deref())?;
    let server_config = build_server_config(config, &args);

    info!("Starting astra server on {}", server_config.addr());

    let server = AstraServer::new(server_config);
    server.run().await.map_err(Into::into)
}

/// Merge flags over the loaded config.
///
/// Without a configured upload secret the server gets a process-local random
/// one; signed URLs then only verify within this process, which suits the
/// dev loop.
fn build_server_config(config: AstraConfig, args: &ServeArgs) -> ServerConfig {
    let secret = config
        .upload
        .secret
        .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());

    ServerConfig {
        host: args.host.clone().unwrap_or(config.server.host),
        port: args.port.unwrap_or(config.server.port),
        upload: UploadConfig {
            base_url: config.upload.base_url,
            secret,
            ttl_secs: config.upload.ttl_secs,
        },
    }
}
