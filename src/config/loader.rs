//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_API_BASE: &str = "TELEGRAM_API_BASE";
pub const ENV_PORT: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, overlay the process environment, and validate.
///
/// Without a path the built-in defaults are the base layer.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an explicit environment lookup.
pub fn load_config_with<F>(path: Option<&Path>, env: F) -> Result<RelayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => parse_file(path)?,
        None => RelayConfig::default(),
    };

    apply_env(&mut config, env);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_file(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Environment values take precedence over the file. Empty values count as unset.
pub fn apply_env<F>(config: &mut RelayConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(token) = lookup(ENV_BOT_TOKEN) {
        config.telegram.bot_token = Some(token);
    }
    if let Some(chat_id) = lookup(ENV_CHAT_ID) {
        config.telegram.chat_id = Some(chat_id);
    }
    if let Some(base) = lookup(ENV_API_BASE) {
        config.telegram.api_base = base;
    }
    if let Some(port) = lookup(ENV_PORT) {
        config.listener.bind_address = format!("0.0.0.0:{}", port.trim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_config_with(None, env_from(&[])).unwrap();
        assert!(!config.telegram.is_configured());
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [telegram]
            bot_token = "from-file"
            chat_id = "1"
            "#
        )
        .unwrap();

        let env = env_from(&[(ENV_BOT_TOKEN, "from-env"), (ENV_PORT, "8088")]);
        let config = load_config_with(Some(file.path()), env).unwrap();

        assert_eq!(config.telegram.bot_token.as_deref(), Some("from-env"));
        assert_eq!(config.telegram.chat_id.as_deref(), Some("1"));
        assert_eq!(config.listener.bind_address, "0.0.0.0:8088");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let env = env_from(&[(ENV_BOT_TOKEN, ""), (ENV_CHAT_ID, "  ")]);
        let config = load_config_with(None, env).unwrap();
        assert!(config.telegram.bot_token.is_none());
        assert!(config.telegram.chat_id.is_none());
    }

    #[test]
    fn test_invalid_port_fails_validation() {
        let env = env_from(&[(ENV_PORT, "not-a-port")]);
        let err = load_config_with(None, env).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_example_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("relay.example.toml");
        let config = load_config_with(Some(&path), env_from(&[])).unwrap();
        assert_eq!(config.timeouts.upstream_secs, 10);
        assert!(config.static_files.enabled);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config_with(Some(Path::new("/nonexistent/relay.toml")), env_from(&[]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
