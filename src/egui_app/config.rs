//! Client configuration
//!
//! Layers, lowest priority first: built-in defaults, the optional TOML file
//! at `$CONFIG_DIR/commentbox/config.toml`, then `CLIENT_API_URL` and
//! `COMMENTS_POLL_INTERVAL_MS` from the environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3001";

/// Default refresh interval
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Default per-request timeout; a request that never returns counts as a
/// transport failure after this long
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
        })
    }

    /// Load every layer from the real file system and environment
    pub fn load() -> Result<Self, ConfigError> {
        let file_layer = match config_file_path() {
            Some(path) if path.exists() => Some(read_layer(&path)?),
            _ => None,
        };
        Self::from_layers(file_layer, |key| std::env::var(key).ok())
    }

    /// Combine a file layer with environment lookups
    pub fn from_layers<F>(file_layer: Option<AppConfig>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder()
            .server_url(DEFAULT_SERVER_URL.to_string())
            .poll_interval_ms(DEFAULT_POLL_INTERVAL_MS)
            .request_timeout_ms(DEFAULT_REQUEST_TIMEOUT_MS);

        if let Some(layer) = file_layer {
            builder = builder.merge(layer);
        }

        if let Some(url) = env("CLIENT_API_URL") {
            builder = builder.server_url(url);
        }
        if let Some(raw) = env("COMMENTS_POLL_INTERVAL_MS") {
            match raw.trim().parse::<u64>() {
                Ok(interval_ms) => builder = builder.poll_interval_ms(interval_ms),
                Err(_) => tracing::warn!(
                    "Ignoring COMMENTS_POLL_INTERVAL_MS={:?}: not a number of milliseconds",
                    raw
                ),
            }
        }

        Self::with_builder(builder)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.app.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(
            self.app
                .request_timeout_ms
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        )
    }
}

/// Location of the optional config file
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("commentbox").join("config.toml"))
}

fn read_layer(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Loaded client config from {}", path.display());
    AppConfig::from_toml_str(&contents)
}
