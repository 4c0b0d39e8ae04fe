//! Request body limits.
//!
//! # Design Decisions
//! - Only the submit route buffers a body; the cap applies there
//! - Oversized bodies answer 413 in the same JSON shape as every API error

use axum::extract::rejection::BytesRejection;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;

use crate::config::LimitsConfig;
use crate::relay::{RelayResponse, RelayResult};

pub fn body_limit(config: &LimitsConfig) -> DefaultBodyLimit {
    DefaultBodyLimit::max(config.max_body_bytes)
}

/// Map a failed body read to a JSON error.
pub fn reject_body(rejection: BytesRejection) -> RelayResponse {
    let status = rejection.status();
    let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
        "Payload Too Large"
    } else {
        "Invalid body"
    };
    tracing::debug!(status = %status, reason = %rejection.body_text(), "Submission body rejected");

    RelayResponse {
        status,
        allow: None,
        body: RelayResult::failure(message),
    }
}
