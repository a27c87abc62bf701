use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/bionic-reader/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config directory is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bionic-reader").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path, with the same
    /// missing-file and validation behavior as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The server bind address parses as `host:port`
    /// - A configured remote server URL carries an http(s) scheme
    /// - Summarizer thresholds are non-degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid server bind address '{}'", self.server.bind_addr),
            });
        }

        if let Some(url) = &self.client.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!("Server URL '{}' must start with http:// or https://", url),
                });
            }
        }

        if self.summary.chunk_chars == 0 {
            return Err(ConfigError::ValidationError {
                message: "summary.chunk_chars must be greater than zero".to_string(),
            });
        }

        if self.summary.budget_words_short == 0 || self.summary.budget_words_long == 0 {
            return Err(ConfigError::ValidationError {
                message: "summary word budgets must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
