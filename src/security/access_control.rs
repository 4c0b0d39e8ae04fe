//! Denylist for sensitive file names.
//!
//! These files should never sit under the served directory in the first
//! place; this is a second line of defense.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use std::collections::HashSet;
use std::sync::Arc;

/// Set of exact file names that answer 404, wherever they sit in the tree.
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    names: Arc<HashSet<String>>,
}

impl DenyList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Arc::new(names.into_iter().map(Into::into).collect()),
        }
    }

    /// True when `path` (e.g. `/.env`) resolves to a denied file.
    ///
    /// The path is read the way the static service reads it: percent-decoded,
    /// with empty and `.` segments dropped. The last remaining segment is the
    /// file that would be opened.
    pub fn blocks(&self, path: &str) -> bool {
        let decoded = percent_decode_str(path).decode_utf8_lossy();
        decoded
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .last()
            .is_some_and(|name| self.names.contains(name))
    }
}

pub async fn deny_listed(
    State(deny): State<DenyList>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if deny.blocks(request.uri().path()) {
        tracing::warn!(path = %request.uri().path(), "Blocked request for denylisted file");
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}
