//! Settings for the code generator
//!
//! Settings are read from TOML. Every section and key is optional; missing
//! values use the defaults below.

use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default number of artifacts kept in history
pub const DEFAULT_MAX_ENTRIES: usize = 10;

/// Default simulated latency of a generation request
pub const DEFAULT_LATENCY_MS: u64 = 1000;

/// Errors that can occur when loading or validating settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Generator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Maximum number of artifacts kept in history
    pub max_entries: NonZeroUsize,
    /// Simulated latency before a request is rendered
    pub latency: Duration,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    history: Option<TomlHistory>,
    generation: Option<TomlGeneration>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlHistory {
    max_entries: Option<usize>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlGeneration {
    latency_ms: Option<u64>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_entries: NonZeroUsize::new(DEFAULT_MAX_ENTRIES).unwrap_or(NonZeroUsize::MIN),
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }
}

impl HubConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(max_entries) = parsed.history.and_then(|h| h.max_entries) {
            config.max_entries =
                NonZeroUsize::new(max_entries).ok_or_else(|| ConfigError::InvalidValue {
                    key: "history.max_entries",
                    message: "must be at least 1".to_string(),
                })?;
        }
        if let Some(latency_ms) = parsed.generation.and_then(|g| g.latency_ms) {
            config.latency = Duration::from_millis(latency_ms);
        }

        Ok(config)
    }

    /// Set the history cap
    pub fn with_max_entries(mut self, max_entries: NonZeroUsize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Set the simulated latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = HubConfig::default();
        assert_eq!(config.max_entries.get(), 10);
        assert_eq!(config.latency, Duration::from_millis(1000));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(HubConfig::from_str("").unwrap(), HubConfig::default());
    }

    #[test]
    fn test_parse_toml_overrides() {
        let config = HubConfig::from_str(
            r#"
[history]
max_entries = 3

[generation]
latency_ms = 0
"#,
        )
        .expect("Should parse");
        assert_eq!(config.max_entries.get(), 3);
        assert_eq!(config.latency, Duration::ZERO);
    }

    #[test]
    fn test_zero_cap_is_rejected() {
        let result = HubConfig::from_str("[history]\nmax_entries = 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "history.max_entries",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = HubConfig::from_str("[history]\nmax = 4\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hub.toml");
        std::fs::write(&path, "[history]\nmax_entries = 7\n\n[generation]\nlatency_ms = 250\n")
            .unwrap();

        let config = HubConfig::from_file(&path).expect("Should load");
        assert_eq!(config.max_entries.get(), 7);
        assert_eq!(config.latency, Duration::from_millis(250));
    }

    #[test]
    fn test_missing_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = HubConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let config = HubConfig::new()
            .with_max_entries(NonZeroUsize::new(2).unwrap())
            .with_latency(Duration::from_millis(5));
        assert_eq!(config.max_entries.get(), 2);
        assert_eq!(config.latency, Duration::from_millis(5));
    }
}
