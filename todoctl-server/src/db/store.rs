//! Storage gateway trait and error type

use async_trait::async_trait;

use crate::models::{Task, TaskTitle};

/// Storage error, tagged by kind so callers can map it without inspecting text
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("todo {id} not found")]
    NotFound { id: i32 },

    /// Store could not be reached (connection, TLS, or pool failure)
    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Unavailable(e.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Durable task storage (testable)
///
/// Every method is a single round-trip against the store.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Confirm the store connection is alive.
    async fn ping(&self) -> Result<(), StoreError>;

    /// All tasks, newest first.
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;

    /// Insert a new, not-completed task.
    async fn create_task(&self, title: &TaskTitle) -> Result<Task, StoreError>;

    /// Overwrite title and completion flag of an existing task.
    async fn update_task(
        &self,
        id: i32,
        title: &TaskTitle,
        completed: bool,
    ) -> Result<Task, StoreError>;

    async fn delete_task(&self, id: i32) -> Result<(), StoreError>;

    /// Release underlying connections. Called once on shutdown.
    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failures_are_unavailable() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Unavailable(_)));

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StoreError::from(sqlx::Error::Io(io));
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn other_failures_are_internal() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Internal(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_display() {
        let err = StoreError::NotFound { id: 7 };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "todo 7 not found");
    }
}
