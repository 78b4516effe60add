//! Configuration management for the Hawaii climate service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::ClimateError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Hawaii climate service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Observation database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Per-request timeout in seconds
    #[serde(default = "default_server_timeout")]
    pub timeout_seconds: u32,
    /// PEM certificate path; enables TLS when set together with `tls_key`
    pub tls_cert: Option<PathBuf>,
    /// PEM private key path
    pub tls_key: Option<PathBuf>,
}

/// Observation database configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite observation database
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
    /// Maximum pooled connections
    #[serde(default = "default_database_max_connections")]
    pub max_connections: u32,
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
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8000
}

fn default_server_timeout() -> u32 {
    30
}

fn default_database_path() -> PathBuf {
    PathBuf::from("resources/hawaii.sqlite")
}

fn default_database_max_connections() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            timeout_seconds: default_server_timeout(),
            tls_cert: None,
            tls_key: None,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_database_max_connections(),
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

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClimateConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config/default.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with HAWAII_CLIMATE prefix
        builder = builder.add_source(
            Environment::with_prefix("HAWAII_CLIMATE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: ClimateConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hawaii-climate").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.server.timeout_seconds == 0 {
            self.server.timeout_seconds = default_server_timeout();
        }
        if self.database.path.as_os_str().is_empty() {
            self.database.path = default_database_path();
        }
        if self.database.max_connections == 0 {
            self.database.max_connections = default_database_max_connections();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.validate_tls_settings()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.timeout_seconds > 300 {
            return Err(
                ClimateError::config("Request timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.database.max_connections > 64 {
            return Err(
                ClimateError::config("Database pool cannot exceed 64 connections").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ClimateError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ClimateError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Validate that TLS settings come as a complete pair
    fn validate_tls_settings(&self) -> Result<()> {
        match (&self.server.tls_cert, &self.server.tls_key) {
            (Some(_), None) => Err(ClimateError::config(
                "TLS certificate configured without a private key",
            )
            .into()),
            (None, Some(_)) => Err(ClimateError::config(
                "TLS private key configured without a certificate",
            )
            .into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClimateConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.timeout_seconds, 30);
        assert_eq!(config.database.path, PathBuf::from("resources/hawaii.sqlite"));
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.level, "info");
        assert!(config.server.tls_cert.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ClimateConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = ClimateConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = ClimateConfig::default();
        config.logging.format = "xml".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = ClimateConfig::default();
        config.server.timeout_seconds = 500; // Invalid - too high
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));

        let mut config = ClimateConfig::default();
        config.database.max_connections = 128; // Invalid - too high
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_incomplete_tls_pair() {
        let mut config = ClimateConfig::default();
        config.server.tls_cert = Some(PathBuf::from("cert.pem"));
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("without a private key"));

        let mut config = ClimateConfig::default();
        config.server.tls_key = Some(PathBuf::from("key.pem"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_zero_values() {
        let mut config = ClimateConfig::default();
        config.server.port = 0;
        config.database.max_connections = 0;
        config.logging.level = String::new();
        config.apply_defaults();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        let path = ClimateConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("hawaii-climate"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
