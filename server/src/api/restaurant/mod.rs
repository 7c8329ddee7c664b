//! Restaurant API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::{Role, require_any_role};
use crate::core::ServerState;

/// Roles allowed on the restaurant endpoints.
const ALLOWED_ROLES: &[Role] = &[Role::Admin, Role::User];

/// Restaurant router: aggregate CRUD plus association pair endpoints,
/// gated on ADMIN or USER.
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/restaurant", get(handler::list).post(handler::create))
        .route(
            "/restaurant/{restaurant_id}",
            get(handler::get_by_id)
                .put(handler::edit)
                .delete(handler::delete),
        )
        .route(
            "/restaurant/{restaurant_id}/employee/{employee_id}",
            put(handler::add_employee).delete(handler::remove_employee),
        )
        .layer(middleware::from_fn(require_any_role(ALLOWED_ROLES)))
}
