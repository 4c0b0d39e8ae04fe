//! Static file tree for non-API paths.

use axum::routing::{get_service, MethodRouter};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::StaticFilesConfig;
use crate::http::response;

/// Serve `root` for GET and HEAD, answering unmatched paths with the fallback
/// page. Any other method gets the JSON 404.
pub fn static_service(config: &StaticFilesConfig) -> MethodRouter {
    let root = Path::new(&config.root);
    let files = ServeDir::new(root).fallback(ServeFile::new(root.join(&config.fallback)));
    get_service(files).fallback(|| async { response::not_found() })
}
