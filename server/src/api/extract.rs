//! Request extractors
//!
//! Wrappers around the axum extractors so that decoding failures surface as
//! [`AppError`] (HTTP 400) instead of the framework defaults (415/422 for
//! some body rejections, plain-text bodies for path rejections).

use axum::extract::{FromRequest, FromRequestParts};
use axum::response::IntoResponse;

use crate::utils::AppError;

/// JSON body extractor with [`AppError`] rejections; doubles as the JSON
/// response type so handlers deal with a single `Json`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor with [`AppError`] rejections (a non-integer id
/// segment is a client error, not a routing mystery).
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
