//! Configuration module for telly.
//!
//! Loads configuration from `config.toml` with environment variable overrides.

use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tvmaze: TvMazeConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// TVMaze catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TvMazeConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User-Agent override; defaults to "telly/<version>"
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for TvMazeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: None,
        }
    }
}

impl TvMazeConfig {
    /// Resolved User-Agent string sent with catalog requests.
    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        })
    }
}

fn default_base_url() -> String {
    "https://api.tvmaze.com".to_string()
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. `config.toml` in current directory (optional)
    /// 3. Environment variables with `TELLY_` prefix
    ///
    /// Environment variables use double underscore for nesting:
    /// - `TELLY_SERVER__PORT=9000` sets `server.port`
    /// - `TELLY_TVMAZE__BASE_URL=http://localhost:8081` sets `tvmaze.base_url`
    pub fn load() -> Result<Self, AppError> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file path.
    pub fn load_from(config_path: &str) -> Result<Self, AppError> {
        let config = ConfigLoader::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("tvmaze.base_url", default_base_url())?
            // Add config file (optional)
            .add_source(File::with_name(config_path).required(false))
            // Override with environment variables
            // TELLY_SERVER__PORT=9000 -> server.port = 9000
            .add_source(
                Environment::with_prefix("TELLY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), AppError> {
        if self.tvmaze.base_url.trim().is_empty() {
            return Err(AppError::BadRequest(
                "tvmaze.base_url must not be empty".to_string(),
            ));
        }

        if !self.tvmaze.base_url.starts_with("http") {
            tracing::warn!(
                "TVMaze base URL '{}' does not look like an HTTP URL",
                self.tvmaze.base_url
            );
        }

        Ok(())
    }

    /// Get the server socket address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        use std::net::{IpAddr, SocketAddr};
        let ip: IpAddr = self.server.host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid host '{}', using 0.0.0.0", self.server.host);
            "0.0.0.0".parse().unwrap()
        });
        SocketAddr::new(ip, self.server.port)
    }
}
