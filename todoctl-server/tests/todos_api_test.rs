//! Router tests against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use todoctl_server::{build_router, AppState, MemoryTaskStore, ServerConfig};

fn setup() -> (Router, Arc<MemoryTaskStore>) {
    let store = Arc::new(MemoryTaskStore::new());
    let app = build_router(AppState::new(store.clone()), &ServerConfig::default());
    (app, store)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "non-JSON body ({e}): {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, value)
}

#[tokio::test]
async fn end_to_end_lifecycle() {
    let (app, _) = setup();

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/api/todos",
        Some(json!({"title": "Learn Kubernetes"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Learn Kubernetes");
    assert_eq!(created["completed"], false);
    assert!(created["created_at"].is_string());

    let (status, list) = send_json(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created.clone()]));

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        "/api/todos/1",
        Some(json!({"title": "Learn Kubernetes", "completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, body) = send(&app, Method::DELETE, "/api/todos/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, list) = send_json(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn empty_store_lists_empty_array() {
    let (app, _) = setup();

    let (status, list) = send_json(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn list_is_newest_first() {
    let (app, _) = setup();

    for title in ["A", "B", "C"] {
        let (status, _) =
            send_json(&app, Method::POST, "/api/todos", Some(json!({ "title": title }))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, list) = send_json(&app, Method::GET, "/api/todos", None).await;
    let titles: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["C", "B", "A"]);
}

#[tokio::test]
async fn missing_ids_are_404() {
    let (app, _) = setup();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/todos/99",
        Some(json!({"title": "x", "completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "todo 99 not found");

    let (status, body) = send_json(&app, Method::DELETE, "/api/todos/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "todo 99 not found");
}

#[tokio::test]
async fn create_rejects_missing_or_blank_title() {
    let (app, store) = setup();

    for body in [json!({}), json!({"title": ""}), json!({"title": "   "}), json!({"title": null})] {
        let (status, response) = send_json(&app, Method::POST, "/api/todos", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["error"].as_str().unwrap().contains("title"));
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn update_rejects_incomplete_body() {
    let (app, _) = setup();
    send_json(&app, Method::POST, "/api/todos", Some(json!({"title": "x"}))).await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/todos/1",
        Some(json!({"title": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "completed is required");
}

#[tokio::test]
async fn malformed_requests_get_json_errors() {
    let (app, _) = setup();

    // not JSON at all
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/todos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());

    // missing content type
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/todos")
        .body(Body::from(r#"{"title":"x"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    // non-integer id
    let (status, body) = send_json(&app, Method::DELETE, "/api/todos/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "id: must be an integer");
}

#[tokio::test]
async fn store_failures_are_500() {
    let (app, store) = setup();
    store.sever();

    let (status, body) = send_json(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("connection refused"));

    let (status, _) =
        send_json(&app, Method::POST, "/api/todos", Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send_json(
        &app,
        Method::PUT,
        "/api/todos/1",
        Some(json!({"title": "x", "completed": false})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send_json(&app, Method::DELETE, "/api/todos/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_follows_store_connection() {
    let (app, store) = setup();

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");

    store.sever();
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert!(body["error"].is_string());

    store.restore();
    let (status, _) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let (app, _) = setup();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                send_json(
                    &app,
                    Method::POST,
                    "/api/todos",
                    Some(json!({ "title": format!("task {i}") })),
                )
                .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let (status, task) = handle.await.expect("task panicked");
        assert_eq!(status, StatusCode::CREATED);
        ids.push(task["id"].as_i64().unwrap());
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}
