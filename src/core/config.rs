//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use tracing::Level;

/// Errors produced while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LOG_LEVEL must be one of trace, debug, info, warn, error (got {0:?})")]
    InvalidLogLevel(String),

    #[error("{name} must be a boolean (got {value:?})")]
    InvalidFlag { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum tracing level
    /// Example: LOG_LEVEL=debug
    pub log_level: Level,

    /// Serve pre-compressed `.br` / `.gz` bundles from `/pkg`
    /// Example: PRECOMPRESSED_ASSETS=false
    pub precompressed_assets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            precompressed_assets: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(value))?,
            None => defaults.log_level,
        };

        let precompressed_assets = match lookup("PRECOMPRESSED_ASSETS") {
            Some(value) => parse_flag("PRECOMPRESSED_ASSETS", value)?,
            None => defaults.precompressed_assets,
        };

        Ok(Self {
            log_level,
            precompressed_assets,
        })
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.precompressed_assets);
    }

    #[test]
    fn test_log_level_parsing() {
        let config = Config::from_lookup(lookup(&[("LOG_LEVEL", "debug")])).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);

        let config = Config::from_lookup(lookup(&[("LOG_LEVEL", " WARN ")])).unwrap();
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_lookup(lookup(&[("LOG_LEVEL", "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref v) if v == "loud"));
        assert!(err.to_string().contains("LOG_LEVEL"));
    }

    #[test]
    fn test_precompressed_flag() {
        for value in ["false", "0", "No", "off"] {
            let config =
                Config::from_lookup(lookup(&[("PRECOMPRESSED_ASSETS", value)])).unwrap();
            assert!(!config.precompressed_assets, "value {value:?}");
        }
        for value in ["true", "1", "YES", "on"] {
            let config =
                Config::from_lookup(lookup(&[("PRECOMPRESSED_ASSETS", value)])).unwrap();
            assert!(config.precompressed_assets, "value {value:?}");
        }
    }

    #[test]
    fn test_invalid_flag() {
        let err = Config::from_lookup(lookup(&[("PRECOMPRESSED_ASSETS", "maybe")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "PRECOMPRESSED_ASSETS must be a boolean (got \"maybe\")"
        );
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on the environment; only the call path is checked
        let _ = Config::from_env();
    }

    #[test]
    fn test_config_debug() {
        let debug_str = format!("{:?}", Config::default());
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("log_level"));
    }
}
