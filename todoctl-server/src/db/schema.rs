//! Schema bootstrap for the `todos` table

use sqlx::PgPool;

use crate::db::StoreError;

/// Table definition; idempotent via IF NOT EXISTS.
pub const CREATE_TODOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Ensure the `todos` table exists.
///
/// Safe to run against an already-initialized store. Callers treat a failure
/// here as fatal: the service cannot run without its table.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    tracing::info!("Ensuring todos schema...");

    sqlx::query(CREATE_TODOS_TABLE).execute(pool).await?;

    tracing::info!("Schema ready");
    Ok(())
}
