//! Submission relay subsystem.
//!
//! # Data Flow
//! ```text
//! client JSON { text }
//!     → handler.rs (method, configuration and text checks)
//!     → message.rs (UpstreamMessage, HTML parse mode)
//!     → client.rs (one POST to sendMessage, bounded by a deadline)
//!     → message.rs (reduce reply to { ok, telegram: { ok } })
//!     → error.rs (map any failure to a status and a client-safe body)
//! ```
//!
//! # Design Decisions
//! - Single attempt per request: no retries, no queueing, no deduplication
//! - Only the provider's `ok` flag is surfaced; identifiers and diagnostics stay server-side
//! - Provider rejection is a soft failure inside a 200, not an HTTP error

pub mod client;
pub mod error;
pub mod handler;
pub mod message;

pub use client::{TelegramClient, UpstreamReply};
pub use error::{RelayError, UpstreamError};
pub use handler::{handle, RelayResponse};
pub use message::{RelayResult, UpstreamMessage};
