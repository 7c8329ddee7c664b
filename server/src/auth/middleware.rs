//! Authentication middleware
//!
//! [`require_auth`] establishes the principal for every gated route;
//! [`require_any_role`] is layered per resource router and refuses the
//! request before the handler (and therefore the service) runs.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{Principal, Role};
use crate::core::ServerState;
use crate::utils::AppError;

/// Paths served without a principal.
fn is_public(path: &str) -> bool {
    path == "/health"
}

/// Authentication middleware - resolve the caller's principal.
///
/// Extracts the `Authorization: Bearer <token>` header, asks the injected
/// [`crate::auth::RoleProvider`] to resolve it and injects the resulting
/// [`Principal`] into request extensions. Missing or unknown tokens are
/// refused with 401.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight and public routes skip authentication
    if req.method() == http::Method::OPTIONS || is_public(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer);

    let Some(token) = token else {
        tracing::warn!(target: "security", uri = %req.uri(), "Missing authorization header");
        return Err(AppError::unauthorized());
    };

    match state.role_provider.resolve(token).await? {
        Some(principal) => {
            req.extensions_mut().insert(principal);
            Ok(next.run(req).await)
        }
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Unknown bearer token");
            Err(AppError::unauthorized())
        }
    }
}

/// Strip the `Bearer ` prefix from an Authorization header value.
fn extract_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Role gate middleware - requires one of `roles`.
///
/// # Usage
///
/// ```ignore
/// Router::new()
///     .route("/employee", get(handler::list))
///     .layer(middleware::from_fn(require_any_role(&[Role::Admin, Role::User])));
/// ```
pub fn require_any_role(
    roles: &'static [Role],
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let principal = req
                .extensions()
                .get::<Principal>()
                .ok_or(AppError::unauthorized())?;

            if !principal.has_any_role(roles) {
                tracing::warn!(
                    target: "security",
                    principal = %principal.name,
                    required = ?roles,
                    "Permission denied"
                );
                return Err(AppError::forbidden(format!(
                    "Requires one of roles: {}",
                    roles
                        .iter()
                        .map(Role::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            }

            Ok(next.run(req).await)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_extraction() {
        assert_eq!(extract_bearer("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer("Basic abc"), None);
    }
}
