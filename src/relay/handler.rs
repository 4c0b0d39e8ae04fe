//! Submission handling: validate, forward once, normalize.

use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::config::TelegramConfig;
use crate::observability::metrics;
use crate::relay::client::TelegramClient;
use crate::relay::error::RelayError;
use crate::relay::message::{extract_text, summarize_upstream, RelayResult, UpstreamMessage};

/// Status, optional `Allow` header and JSON body for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub allow: Option<&'static str>,
    pub body: RelayResult,
}

impl RelayResponse {
    pub fn ok(body: RelayResult) -> Self {
        Self {
            status: StatusCode::OK,
            allow: None,
            body,
        }
    }
}

impl From<RelayError> for RelayResponse {
    fn from(err: RelayError) -> Self {
        let allow = matches!(err, RelayError::MethodNotAllowed).then_some("POST");
        Self {
            status: err.status(),
            allow,
            body: err.to_result(),
        }
    }
}

/// Handle one submission end to end.
///
/// Checks run in a fixed order: method, configuration, text. Only a request
/// passing all three reaches the provider, and it does so exactly once.
pub async fn handle(
    method: &Method,
    body: &Value,
    config: &TelegramConfig,
    upstream: &TelegramClient,
) -> RelayResponse {
    let response = match relay(method, body, config, upstream).await {
        Ok(result) => RelayResponse::ok(result),
        Err(err) => {
            match &err {
                RelayError::NotConfigured => {
                    tracing::error!("Submission rejected: bot token or chat id not configured")
                }
                RelayError::Upstream(e) => tracing::warn!(error = %e, "Upstream delivery failed"),
                _ => tracing::debug!(reason = %err, "Submission rejected"),
            }
            metrics::record_submission(err.outcome());
            return err.into();
        }
    };

    let outcome = match response.body.telegram {
        Some(status) if status.ok => "delivered",
        Some(_) => "rejected",
        None => "unparsed",
    };
    metrics::record_submission(outcome);
    response
}

async fn relay(
    method: &Method,
    body: &Value,
    config: &TelegramConfig,
    upstream: &TelegramClient,
) -> Result<RelayResult, RelayError> {
    if *method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let (bot_token, chat_id) = config.credentials().ok_or(RelayError::NotConfigured)?;

    let text = extract_text(body);
    if text.is_empty() {
        return Err(RelayError::MissingText);
    }

    let message = UpstreamMessage::html(chat_id, text);
    let reply = upstream.send_message(bot_token, &message).await?;

    let result = summarize_upstream(&reply.body);
    if result.telegram.is_some_and(|t| !t.ok) {
        tracing::info!(status = %reply.status, "Provider rejected message");
    }
    Ok(result)
}
