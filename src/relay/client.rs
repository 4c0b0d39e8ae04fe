//! Messaging provider client.
//!
//! # Responsibilities
//! - Build the `sendMessage` endpoint from the base URL and bot token
//! - Send one JSON POST with an explicit Content-Length
//! - Read the full reply body under a deadline
//!
//! # Security Constraints
//! - The bot token is part of the URL path; it is stripped from every error
//!   and never logged

use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::time::{Duration, Instant};
use url::Url;

use crate::config::{TelegramConfig, TimeoutConfig};
use crate::observability::metrics;
use crate::relay::error::UpstreamError;
use crate::relay::message::UpstreamMessage;
use crate::resilience::with_deadline;

/// Raw upstream reply, before any interpretation.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Reusable HTTP client for the Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_base: String,
    timeout: Duration,
}

impl TelegramClient {
    /// Create a client whose exchanges are bounded by `timeouts.upstream_secs`.
    pub fn from_config(
        telegram: &TelegramConfig,
        timeouts: &TimeoutConfig,
    ) -> Result<Self, UpstreamError> {
        let mut builder =
            reqwest::Client::builder().connect_timeout(Duration::from_secs(timeouts.connect_secs));
        if !telegram.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            api_base: telegram.api_base.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeouts.upstream_secs),
        })
    }

    pub fn endpoint(&self, bot_token: &str) -> Result<Url, UpstreamError> {
        Ok(Url::parse(&format!(
            "{}/bot{}/sendMessage",
            self.api_base, bot_token
        ))?)
    }

    /// Deliver one message. Exactly one request is issued, never retried.
    pub async fn send_message(
        &self,
        bot_token: &str,
        message: &UpstreamMessage,
    ) -> Result<UpstreamReply, UpstreamError> {
        let url = self.endpoint(bot_token)?;
        let payload = serde_json::to_vec(message)?;
        let start = Instant::now();

        let exchange = async {
            let response = self
                .http
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .header(CONTENT_LENGTH, payload.len())
                .body(payload)
                .send()
                .await?;

            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(UpstreamReply { status, body })
        };

        let outcome = match with_deadline(self.timeout, exchange).await {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(e)) => Err(classify(e, self.timeout)),
            Err(_) => Err(UpstreamError::Timeout(self.timeout)),
        };
        metrics::record_upstream(start, outcome.is_ok());

        if let Ok(reply) = &outcome {
            tracing::debug!(
                status = %reply.status,
                bytes = reply.body.len(),
                "Upstream replied"
            );
        }
        outcome
    }
}

/// A timeout inside the HTTP client (connect included) is reported the same
/// way as the overall deadline expiring.
fn classify(err: reqwest::Error, deadline: Duration) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout(deadline)
    } else {
        UpstreamError::from(err)
    }
}
