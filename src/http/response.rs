//! Response shaping.
//!
//! # Responsibilities
//! - Render relay outcomes as JSON with the right status
//! - Attach `Allow` on 405 answers
//! - Turn handler panics into a bare `{ "ok": false }` 500
//!
//! # Design Decisions
//! - Every API answer is JSON with at least an `ok` field
//! - Internal faults carry no detail

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;

use crate::relay::{RelayResponse, RelayResult};

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();
        if let Some(allow) = self.allow {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(allow));
        }
        response
    }
}

/// Health check answer for `method`.
pub fn health(is_get: bool) -> RelayResponse {
    if is_get {
        RelayResponse::ok(RelayResult::success())
    } else {
        RelayResponse {
            status: StatusCode::METHOD_NOT_ALLOWED,
            allow: Some("GET"),
            body: RelayResult::failure("Method Not Allowed"),
        }
    }
}

/// JSON 404 for unknown paths not answered by the static tree.
pub fn not_found() -> RelayResponse {
    RelayResponse {
        status: StatusCode::NOT_FOUND,
        allow: None,
        body: RelayResult::failure("Not Found"),
    }
}

/// Panic handler for `CatchPanicLayer`.
pub fn internal_fault(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(RelayResult::bare_failure()),
    )
        .into_response()
}
