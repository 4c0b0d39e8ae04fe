//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call to the messaging provider:
//!     → timeouts.rs (enforce a deadline over connect, send and body read)
//!     → On expiry: caller maps to 504 Gateway Timeout
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - No retries: a submission is not idempotent, a retry could deliver twice

pub mod timeouts;

pub use timeouts::{with_deadline, DeadlineExceeded};
