//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → access_control.rs (404 for denylisted file names)
//!     → limits.rs (cap submission body size)
//!     → Pass to API handlers or static files
//! Outgoing response:
//!     → headers.rs (nosniff, frame and referrer policy)
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any security check failure
//! - No trust in client input

pub mod access_control;
pub mod headers;
pub mod limits;

pub use access_control::{deny_listed, DenyList};
