//! Health check endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response (store reachable)
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// Health check response (store unreachable)
#[derive(Debug, Serialize)]
pub struct UnhealthyResponse {
    pub status: &'static str,
    pub error: String,
}

/// GET /health
///
/// 503 rather than 500 on failure so orchestration can tell "store down"
/// apart from a handler fault.
async fn health(State(state): State<AppState>) -> Response {
    match state.store().ping().await {
        Ok(()) => Json(HealthResponse {
            status: "healthy",
            database: "connected",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unhealthy",
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
