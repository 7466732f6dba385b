//! Configuration management for the `Tripscout` service
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::TripscoutError;

/// Root configuration structure for the `Tripscout` service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TripscoutConfig {
    /// Catalog source configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Catalog source configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where the catalog document lives: an HTTP(S) URL or a file path
    /// relative to the working directory
    #[serde(default = "default_catalog_source")]
    pub source: String,
    /// Fetch timeout in seconds
    #[serde(default = "default_catalog_timeout")]
    pub timeout_seconds: u32,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory served as the static page
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_catalog_source() -> String {
    "static/data/destinations.json".to_string()
}

fn default_catalog_timeout() -> u32 {
    10
}

fn default_server_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
            timeout_seconds: default_catalog_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TripscoutConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPSCOUT_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPSCOUT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripscoutConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripscout").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.catalog.source.trim().is_empty() {
            return Err(TripscoutError::config("catalog.source must not be empty").into());
        }
        if self.catalog.timeout_seconds == 0 || self.catalog.timeout_seconds > 300 {
            return Err(TripscoutError::config(
                "catalog.timeout_seconds must be between 1 and 300",
            )
            .into());
        }
        if self.server.port == 0 {
            return Err(TripscoutError::config("server.port must not be 0").into());
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(TripscoutError::config(format!(
                "logging.level must be one of {valid_levels:?}, got '{}'",
                self.logging.level
            ))
            .into());
        }

        if !["pretty", "json"].contains(&self.logging.format.as_str()) {
            return Err(TripscoutError::config(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                self.logging.format
            ))
            .into());
        }

        Ok(())
    }
}
