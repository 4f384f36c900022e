use std::fs;
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
    /// `<config_dir>/payflow/config.toml`, falling back to the current
    /// directory when the platform has no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("payflow").join("config.toml")
    }

    /// Loads the default config file, or the built-in demo settings if it
    /// doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    /// - Backend and provider URLs are http(s)
    /// - The order has an email, a currency and at least one item
    /// - A payment method type is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("backend.base_url", &self.backend.base_url)?;
        check_url("provider.api_base", &self.provider.api_base)?;

        if self.order.email.trim().is_empty() {
            return Err(invalid("order.email must not be empty"));
        }
        if self.order.currency.trim().is_empty() {
            return Err(invalid("order.currency must not be empty"));
        }
        if self.order.items.is_empty() {
            return Err(invalid("order.items must list at least one item"));
        }
        if self.payment_method.method_type.trim().is_empty() {
            return Err(invalid("payment_method.type must not be empty"));
        }

        Ok(())
    }
}

fn check_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        message: format!("{} must start with http:// or https://, got '{}'", field, value),
    })
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
