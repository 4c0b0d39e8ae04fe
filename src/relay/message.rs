//! Request-scoped payloads exchanged by the relay.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body sent to the Bot API `sendMessage` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: String,
    pub disable_web_page_preview: bool,
}

impl UpstreamMessage {
    pub fn html(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: "HTML".to_string(),
            disable_web_page_preview: true,
        }
    }
}

/// Provider acceptance flag, the only upstream field surfaced to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub ok: bool,
}

/// JSON body returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResult {
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<ProviderStatus>,
}

impl RelayResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
            telegram: None,
        }
    }

    pub fn delivered(provider_ok: bool) -> Self {
        Self {
            telegram: Some(ProviderStatus { ok: provider_ok }),
            ..Self::success()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            telegram: None,
        }
    }

    /// `{ "ok": false }` with nothing else.
    pub fn bare_failure() -> Self {
        Self {
            ok: false,
            error: None,
            telegram: None,
        }
    }
}

/// Pull the submission text out of an arbitrary JSON body.
///
/// Anything other than a string under `text` yields `""`.
pub fn extract_text(body: &Value) -> &str {
    body.get("text").and_then(Value::as_str).unwrap_or("")
}

/// Reduce an upstream reply body to the client-facing result.
///
/// An empty body is read as `{}`. Unparseable bodies and a literal `null`
/// still count as an attempted delivery, just without a provider verdict.
pub fn summarize_upstream(body: &[u8]) -> RelayResult {
    let raw: &[u8] = if body.is_empty() { b"{}" } else { body };

    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Null) | Err(_) => RelayResult::success(),
        Ok(parsed) => RelayResult::delivered(parsed.get("ok") == Some(&Value::Bool(true))),
    }
}
