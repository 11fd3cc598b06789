//! Application configuration module
//!
//! Provides configuration types for the desktop client. Values are layered by
//! [`AppConfigBuilder`]: later layers override earlier ones field by field.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Application configuration
///
/// Every field is optional so a partially written TOML file is still a valid
/// layer. Defaults are applied by the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Server URL, e.g. `http://127.0.0.1:3001`
    pub server_url: Option<String>,
    /// Refresh interval in milliseconds
    pub poll_interval_ms: Option<u64>,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: Option<u64>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse one TOML layer and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.poll_interval_ms == Some(0) {
            return Err(ConfigError::InvalidPollInterval(0));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidRequestTimeout(0));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    poll_interval_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the refresh interval
    pub fn poll_interval_ms(mut self, interval_ms: u64) -> Self {
        self.poll_interval_ms = Some(interval_ms);
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = Some(timeout_ms);
        self
    }

    /// Overlay the fields that `layer` sets
    pub fn merge(mut self, layer: AppConfig) -> Self {
        if layer.server_url.is_some() {
            self.server_url = layer.server_url;
        }
        if layer.poll_interval_ms.is_some() {
            self.poll_interval_ms = layer.poll_interval_ms;
        }
        if layer.request_timeout_ms.is_some() {
            self.request_timeout_ms = layer.request_timeout_ms;
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url.map(|url| url.trim_end_matches('/').to_string()),
            poll_interval_ms: self.poll_interval_ms,
            request_timeout_ms: self.request_timeout_ms,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid poll interval: {0} ms (must be greater than zero)")]
    InvalidPollInterval(u64),
    #[error("invalid request timeout: {0} ms (must be greater than zero)")]
    InvalidRequestTimeout(u64),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
