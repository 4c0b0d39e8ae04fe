//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the upstream deadline fits inside the inbound one
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Missing credentials are not an error; the relay reports them per request

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("invalid telegram api_base '{0}'")]
    ApiBase(String),

    #[error("timeout '{0}' must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("upstream timeout ({upstream}s) must be shorter than request timeout ({request}s)")]
    TimeoutOrder { upstream: u64, request: u64 },

    #[error("max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("deny entry '{0}' must be a bare file name")]
    DenyEntry(String),
}

pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    match url::Url::parse(&config.telegram.api_base) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::ApiBase(config.telegram.api_base.clone())),
    }

    let timeouts = &config.timeouts;
    for (name, value) in [
        ("upstream_secs", timeouts.upstream_secs),
        ("connect_secs", timeouts.connect_secs),
        ("request_secs", timeouts.request_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroTimeout(name));
        }
    }
    if timeouts.upstream_secs >= timeouts.request_secs {
        errors.push(ValidationError::TimeoutOrder {
            upstream: timeouts.upstream_secs,
            request: timeouts.request_secs,
        });
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    for entry in &config.static_files.deny {
        if entry.is_empty() || entry.contains('/') {
            errors.push(ValidationError::DenyEntry(entry.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "nowhere".into();
        config.telegram.api_base = "ftp://api.telegram.org".into();
        config.timeouts.upstream_secs = 0;
        config.limits.max_body_bytes = 0;
        config.static_files.deny.push("../secret".into());

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::BindAddress("nowhere".into())));
        assert!(errors.contains(&ValidationError::ApiBase("ftp://api.telegram.org".into())));
        assert!(errors.contains(&ValidationError::ZeroTimeout("upstream_secs")));
        assert!(errors.contains(&ValidationError::ZeroBodyLimit));
        assert!(errors.contains(&ValidationError::DenyEntry("../secret".into())));
    }

    #[test]
    fn test_upstream_timeout_must_fit_request_timeout() {
        let mut config = RelayConfig::default();
        config.timeouts.upstream_secs = 30;
        config.timeouts.request_secs = 30;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TimeoutOrder { upstream: 30, request: 30 }]
        );
    }

    #[test]
    fn test_missing_credentials_are_allowed() {
        let config = RelayConfig::default();
        assert!(!config.telegram.is_configured());
        assert!(validate_config(&config).is_ok());
    }
}
