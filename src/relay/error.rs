//! Relay error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::relay::message::RelayResult;

/// Failures while talking to the messaging provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, TLS, DNS or body read failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The exchange did not finish in time.
    #[error("no upstream response within {0:?}")]
    Timeout(Duration),

    /// The endpoint URL could not be built.
    #[error("invalid upstream endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The outgoing payload could not be serialized.
    #[error("failed to encode upstream payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL: it carries the bot token.
        UpstreamError::Transport(err.without_url())
    }
}

/// Every way a submission can end without a relayed result.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Server is not configured.")]
    NotConfigured,

    #[error("Missing text")]
    MissingText,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::MissingText => StatusCode::BAD_REQUEST,
            RelayError::Upstream(UpstreamError::Transport(_)) => StatusCode::BAD_GATEWAY,
            RelayError::Upstream(UpstreamError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Upstream(UpstreamError::Endpoint(_) | UpstreamError::Encode(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing body. Internal faults carry no detail.
    pub fn to_result(&self) -> RelayResult {
        match self {
            RelayError::MethodNotAllowed | RelayError::NotConfigured | RelayError::MissingText => {
                RelayResult::failure(self.to_string())
            }
            RelayError::Upstream(UpstreamError::Transport(_)) => {
                RelayResult::failure("Upstream error")
            }
            RelayError::Upstream(UpstreamError::Timeout(_)) => {
                RelayResult::failure("Upstream timeout")
            }
            RelayError::Upstream(UpstreamError::Endpoint(_) | UpstreamError::Encode(_)) => {
                RelayResult::bare_failure()
            }
        }
    }

    /// Label used for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::MethodNotAllowed => "method_not_allowed",
            RelayError::NotConfigured => "not_configured",
            RelayError::MissingText => "missing_text",
            RelayError::Upstream(UpstreamError::Transport(_)) => "upstream_error",
            RelayError::Upstream(UpstreamError::Timeout(_)) => "upstream_timeout",
            RelayError::Upstream(_) => "internal",
        }
    }
}
