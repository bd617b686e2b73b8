//! Command implementations for the todoctl CLI

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use todoctl_server::db::{create_pool, ensure_schema};
use todoctl_server::{DatabaseConfig, PgTaskStore};

/// Connect to the store and make sure the schema exists.
///
/// Any failure here is fatal to the calling command.
pub(crate) async fn open_store(config: &DatabaseConfig) -> Result<PgTaskStore> {
    tracing::info!(
        host = %config.host,
        database = %config.name,
        "Connecting to database"
    );

    let pool = create_pool(config)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to initialize database schema")?;

    Ok(PgTaskStore::new(pool))
}
