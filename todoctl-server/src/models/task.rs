//! Task record and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Task record as persisted in the `todos` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated task title (non-empty after trimming)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Create a task title, rejecting empty or whitespace-only input.
    ///
    /// Surrounding whitespace is trimmed before storing.
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::TaskTitle;
    ///
    /// assert_eq!(TaskTitle::new("  Learn Kubernetes ").unwrap().as_str(), "Learn Kubernetes");
    /// assert!(TaskTitle::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn require_title(title: Option<&str>) -> Result<TaskTitle, ValidationError> {
    let title = title.ok_or(ValidationError::Missing { field: "title" })?;
    TaskTitle::new(title)
}

/// POST /api/todos body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<TaskTitle, ValidationError> {
        require_title(self.title.as_deref())
    }
}

/// PUT /api/todos/{id} body
///
/// An update overwrites both mutable fields, so both are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Update payload after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpdate {
    pub title: TaskTitle,
    pub completed: bool,
}

impl UpdateTaskRequest {
    pub fn validate(&self) -> Result<ValidatedUpdate, ValidationError> {
        let title = require_title(self.title.as_deref())?;
        let completed = self
            .completed
            .ok_or(ValidationError::Missing { field: "completed" })?;

        Ok(ValidatedUpdate { title, completed })
    }
}
