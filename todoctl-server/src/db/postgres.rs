//! PostgreSQL task store
//!
//! Each operation is one statement against the pool:
//! - create/update: `RETURNING` the full row (no follow-up select)
//! - update/delete: zero affected rows → `StoreError::NotFound`

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{StoreError, TaskStore};
use crate::models::{Task, TaskTitle};

/// Task store backed by a shared PgPool
#[derive(Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        // id breaks ties between rows inserted within the same timestamp tick
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, completed, created_at
            FROM todos
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn create_task(&self, title: &TaskTitle) -> Result<Task, StoreError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO todos (title)
            VALUES ($1)
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(title.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn update_task(
        &self,
        id: i32,
        title: &TaskTitle,
        completed: bool,
    ) -> Result<Task, StoreError> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE todos
            SET title = $1, completed = $2
            WHERE id = $3
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(title.as_str())
        .bind(completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn delete_task(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        Ok(())
    }

    async fn close(&self) {
        tracing::info!("Closing database pool");
        self.pool.close().await;
    }
}
