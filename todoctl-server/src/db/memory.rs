//! In-memory task store for testing
//!
//! Mirrors `PgTaskStore` semantics (sequential ids, newest-first listing,
//! `NotFound` on missing rows) without a database. The connection can be
//! severed to exercise unavailable-store paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::db::{StoreError, TaskStore};
use crate::models::{Task, TaskTitle};

#[derive(Default)]
struct Rows {
    last_id: i32,
    tasks: Vec<Task>,
}

/// Mock task store
#[derive(Default)]
pub struct MemoryTaskStore {
    rows: Mutex<Rows>,
    severed: AtomicBool,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a dropped store connection; every call fails as unavailable.
    pub fn sever(&self) {
        self.severed.store(true, Ordering::SeqCst);
    }

    pub fn restore(&self) {
        self.severed.store(false, Ordering::SeqCst);
    }

    /// Number of stored tasks, regardless of connection state.
    pub fn len(&self) -> usize {
        self.rows().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> MutexGuard<'_, Rows> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_connection(&self) -> Result<(), StoreError> {
        if self.severed.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_connection()
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        self.check_connection()?;

        let mut tasks = self.rows().tasks.clone();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(tasks)
    }

    async fn create_task(&self, title: &TaskTitle) -> Result<Task, StoreError> {
        self.check_connection()?;

        let mut rows = self.rows();
        rows.last_id += 1;
        let task = Task {
            id: rows.last_id,
            title: title.as_str().to_owned(),
            completed: false,
            created_at: Utc::now(),
        };
        rows.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(
        &self,
        id: i32,
        title: &TaskTitle,
        completed: bool,
    ) -> Result<Task, StoreError> {
        self.check_connection()?;

        let mut rows = self.rows();
        let task = rows
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound { id })?;

        task.title = title.as_str().to_owned();
        task.completed = completed;
        Ok(task.clone())
    }

    async fn delete_task(&self, id: i32) -> Result<(), StoreError> {
        self.check_connection()?;

        let mut rows = self.rows();
        let before = rows.tasks.len();
        rows.tasks.retain(|t| t.id != id);

        if rows.tasks.len() == before {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}
