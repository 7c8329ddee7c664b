//! Shared fixtures for the end-to-end tests: full application over an
//! in-memory database, driven through `tower::ServiceExt::oneshot`.

// Not every test binary uses every fixture
#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use restaurant_server::api;
use restaurant_server::auth::{Principal, Role, StaticRoleProvider};
use restaurant_server::db::MIGRATOR;
use restaurant_server::{Config, ServerState};

pub const ADMIN: &str = "admin-token";
pub const USER: &str = "user-token";
/// Authenticated caller holding neither ADMIN nor USER.
pub const GUEST: &str = "guest-token";

/// Server state over a fresh in-memory database with a fixed token table.
pub async fn test_state() -> ServerState {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .pragma("foreign_keys", "ON");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();

    let provider = StaticRoleProvider::new()
        .with_token(ADMIN, Principal::new("admin", vec![Role::Admin]))
        .with_token(USER, Principal::new("alice", vec![Role::User]))
        .with_token(GUEST, Principal::new("guest", vec![]));

    let config = Config {
        http_port: 0,
        db_path: ":memory:".into(),
        auth_server_url: "http://localhost:0".into(),
        environment: "test".into(),
        log_level: "info".into(),
        log_dir: None,
    };

    ServerState::new(config, pool, Arc::new(provider))
}

/// Drive one JSON request through the full application.
pub async fn send(
    state: &ServerState,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_raw(
        state,
        method,
        uri,
        token,
        body.map(|b| b.to_string()),
        Some("application/json"),
    )
    .await
}

/// Drive one request with full control over body bytes and content type.
pub async fn send_raw(
    state: &ServerState,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<String>,
    content_type: Option<&str>,
) -> (StatusCode, Value) {
    let app = api::app(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => {
            if let Some(content_type) = content_type {
                builder = builder.header(header::CONTENT_TYPE, content_type);
            }
            builder.body(Body::from(body)).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
