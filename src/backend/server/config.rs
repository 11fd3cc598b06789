/**
 * Server Configuration
 *
 * Loads the listen address and database location from environment
 * variables (a `.env` file is honored by the binary before this runs).
 *
 * # Variables
 *
 * | Variable                | Default                         |
 * |-------------------------|---------------------------------|
 * | `API_HOST`              | `0.0.0.0`                       |
 * | `API_PORT`              | `3001`                          |
 * | `COMMENTS_DATABASE_URL` | `sqlite://comments.db?mode=rwc` |
 *
 * # Error Handling
 *
 * Unparseable values are logged and replaced by the default; they never
 * prevent startup.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://comments.db?mode=rwc";

/// Resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("API_HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid API_HOST {:?}, using {}", raw, defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("API_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid API_PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let database_url = lookup("COMMENTS_DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.database_url);

        Self {
            host,
            port,
            database_url,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
