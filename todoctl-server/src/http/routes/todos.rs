//! Todo endpoints
//!
//! Handlers validate the request, make one store call, and convert the
//! outcome into a response. Store failures stop at `ApiError`.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidTaskId};
use crate::http::server::AppState;
use crate::models::{CreateTaskRequest, Task, UpdateTaskRequest};

/// GET /api/todos - all todos, newest first
async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.store().list_tasks().await?;
    Ok(Json(tasks))
}

/// POST /api/todos - create a todo
async fn create_todo(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let title = req.validate()?;
    let task = state.store().create_task(&title).await?;

    tracing::info!(id = task.id, "todo created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/todos/{id} - overwrite title and completion flag
async fn update_todo(
    State(state): State<AppState>,
    ValidTaskId(id): ValidTaskId,
    JsonBody(req): JsonBody<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let update = req.validate()?;
    let task = state
        .store()
        .update_task(id, &update.title, update.completed)
        .await?;

    tracing::info!(id, completed = task.completed, "todo updated");
    Ok(Json(task))
}

/// DELETE /api/todos/{id}
async fn delete_todo(
    State(state): State<AppState>,
    ValidTaskId(id): ValidTaskId,
) -> Result<StatusCode, ApiError> {
    state.store().delete_task(id).await?;

    tracing::info!(id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Todo routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
}
