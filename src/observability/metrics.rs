//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_submissions_total` (counter): submissions by outcome
//! - `relay_upstream_requests_total` (counter): upstream exchanges by result
//! - `relay_upstream_duration_seconds` (histogram): upstream latency
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels never carry request data

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one finished submission.
pub fn record_submission(outcome: &'static str) {
    metrics::counter!("relay_submissions_total", "outcome" => outcome).increment(1);
}

/// Record one upstream exchange started at `start`.
pub fn record_upstream(start: Instant, success: bool) {
    let result = if success { "success" } else { "failure" };
    metrics::counter!("relay_upstream_requests_total", "result" => result).increment(1);
    metrics::histogram!("relay_upstream_duration_seconds").record(start.elapsed().as_secs_f64());
}
