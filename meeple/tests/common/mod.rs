// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Once};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use meeple::api::{create_router, AppState};
use meeple::config::{Config, DatabaseConfig};
use meeple::db::{Database, DatabaseBackend, LibSqlBackend};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub async fn backend(database: &DatabaseConfig) -> Arc<dyn DatabaseBackend> {
    let raw_db = Database::new(database)
        .await
        .expect("failed to open database");
    Arc::new(LibSqlBackend::new(raw_db))
}

/// Router over a fresh in-memory database.
pub async fn test_app() -> Router {
    init_test_logger();
    let config = Config::in_memory();
    let db = backend(&config.database).await;
    create_router(AppState::new(config, db))
}

/// Router over an on-disk database at `url`.
pub async fn file_app(url: &str) -> Router {
    init_test_logger();
    let mut config = Config::in_memory();
    config.database.url = url.to_string();
    let db = backend(&config.database).await;
    create_router(AppState::new(config, db))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}

/// Create a game and return its id.
pub async fn create_game(app: &Router, name: &str) -> String {
    let (status, json) = post(app, "/api/v1/games", serde_json::json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED, "create {name}: {json}");
    json["data"]["gameId"]
        .as_str()
        .expect("gameId should be a string")
        .to_string()
}

pub async fn toggle(app: &Router, user: &str, game_id: &str, flag: &str) -> Value {
    let (status, json) = post(
        app,
        &format!("/api/v1/users/{user}/collection:toggle"),
        serde_json::json!({ "gameId": game_id, "flag": flag }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "toggle {flag} on {game_id}: {json}");
    json["data"].clone()
}
