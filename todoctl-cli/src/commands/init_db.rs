//! Schema initialization command

use anyhow::{Context, Result};

use todoctl_server::{AppConfig, TaskStore};

use super::open_store;

/// Create the todos table if missing, then exit
pub async fn run_init_db() -> Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;

    let store = open_store(&config.database).await?;
    store.close().await;

    println!("todos table ready on {}/{}", config.database.host, config.database.name);
    Ok(())
}
