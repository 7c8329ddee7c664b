//! API routing
//!
//! # Structure
//!
//! - [`health`] - liveness probe (public)
//! - [`employee`] - employee management endpoints
//! - [`restaurant`] - restaurant management endpoints
//!
//! Every resource router sits behind the authentication middleware and a
//! role gate (ADMIN or USER).

pub mod convert;
pub mod extract;

pub mod employee;
pub mod health;
pub mod restaurant;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Assemble the resource routers (no state bound yet).
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(employee::router())
        .merge(restaurant::router())
}

/// The complete application: routers, auth middleware and HTTP layers.
pub fn app(state: ServerState) -> Router {
    build_app()
        // require_auth skips the public routes internally
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}

/// Access log middleware.
async fn log_request(req: axum::extract::Request, next: axum::middleware::Next) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());
    response
}
