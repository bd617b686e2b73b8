//! HTTP server command
//!
//! Loads configuration, prepares the store, and serves until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::{run_server, AppConfig};

use super::open_store;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (overrides LISTEN_HOST / PORT)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides DATABASE_URL and the DB_* variables)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = AppConfig::from_env().context("Invalid configuration")?;

    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    if args.cors_permissive {
        config.server.cors_permissive = true;
    }
    if let Some(url) = args.database_url {
        config.database.url = Some(url);
    }

    let store = open_store(&config.database).await?;

    tracing::info!("Starting todoctl server on {}", config.server.bind_addr);

    // Blocks until shutdown; the pool is closed before this returns
    run_server(Arc::new(store), &config.server)
        .await
        .context("Server error")?;

    Ok(())
}
