//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Statements acquire a
//! connection for their own duration and hand it back on completion.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::db::StoreError;

/// How long a statement waits for a free connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a PostgreSQL connection pool.
///
/// Connects eagerly so an unreachable store fails startup.
///
/// # Example
///
/// ```ignore
/// let config = AppConfig::from_env()?;
/// let pool = create_pool(&config.database).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let options = config
        .connect_options()
        .map_err(|e| StoreError::Internal(e.to_string()))?;

    tracing::debug!(
        host = %config.host,
        database = %config.name,
        max_connections = config.max_connections,
        "connecting to database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    Ok(pool)
}
