//! Unified error handling
//!
//! [`AppError`] covers every failure a handler can surface. Its
//! [`IntoResponse`] impl is the single place where error kinds map to HTTP
//! status codes and wire bodies:
//!
//! | Variant | Status |
//! |---------|--------|
//! | Validation | 400 |
//! | Unauthorized | 401 |
//! | Forbidden | 403 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Database, Internal | 500 (generic message, detail logged) |

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Wire shape of an error response.
///
/// ```json
/// { "code": "NOT_FOUND", "message": "Employee 7 not found" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable code
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
}

/// Application error enumeration
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request payload or parameter could not be translated (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No principal established (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Principal lacks a required role (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Addressed entity does not exist (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Unique-constraint violation (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Persistence failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Unexpected failure from a collaborator (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for handler and service operations
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", msg),

            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),

            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),

            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),

            // Details are logged, never returned
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error".to_string(),
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}

/// Lift gateway failures into their application kinds.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Conflict(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// Body/path decoding failures are client errors regardless of the framework
// default (axum answers 415/422 for some JSON rejections).

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_errors_keep_their_kind() {
        let err: AppError = RepoError::NotFound("Employee 7 not found".into()).into();
        assert!(matches!(err, AppError::NotFound(_)));

        let err: AppError = RepoError::Conflict("pair exists".into()).into();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn status_mapping() {
        let cases = [
            (AppError::validation("x"), StatusCode::BAD_REQUEST),
            (AppError::unauthorized(), StatusCode::UNAUTHORIZED),
            (AppError::forbidden("x"), StatusCode::FORBIDDEN),
            (AppError::not_found("x"), StatusCode::NOT_FOUND),
            (AppError::conflict("x"), StatusCode::CONFLICT),
            (AppError::database("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
