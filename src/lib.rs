//! Submission relay library.
//!
//! Forwards text submissions from untrusted clients to the Telegram Bot API
//! with server-held credentials.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod resilience;
pub mod security;

pub use config::schema::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
