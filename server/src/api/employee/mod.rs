//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{Role, require_any_role};
use crate::core::ServerState;

/// Roles allowed on the employee endpoints.
const ALLOWED_ROLES: &[Role] = &[Role::Admin, Role::User];

/// Employee router: the CRUD surface, gated on ADMIN or USER.
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employee", get(handler::list).post(handler::create))
        .route(
            "/employee/{employee_id}",
            get(handler::get_by_id)
                .put(handler::edit)
                .delete(handler::delete),
        )
        .layer(middleware::from_fn(require_any_role(ALLOWED_ROLES)))
}
