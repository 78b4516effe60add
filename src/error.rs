//! Error types and handling for the Hawaii climate service

use thiserror::Error;

/// Main error type for the Hawaii climate service
#[derive(Error, Debug)]
pub enum ClimateError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Database access errors
    #[error("Database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl ClimateError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ClimateError::Config { .. } => {
                "Configuration error. Please check your config file and database path.".to_string()
            }
            ClimateError::Database { .. } => {
                "Unable to read the observation database.".to_string()
            }
            ClimateError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            ClimateError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            ClimateError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ClimateError::config("missing database path");
        assert!(matches!(config_err, ClimateError::Config { .. }));

        let validation_err = ClimateError::validation("invalid date");
        assert!(matches!(validation_err, ClimateError::Validation { .. }));

        let general_err = ClimateError::general("something went wrong");
        assert!(matches!(general_err, ClimateError::General { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = ClimateError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = ClimateError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));

        let db_err: ClimateError = sqlx::Error::RowNotFound.into();
        assert!(db_err.user_message().contains("observation database"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let climate_err: ClimateError = io_err.into();
        assert!(matches!(climate_err, ClimateError::Io { .. }));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let climate_err: ClimateError = sqlx::Error::PoolClosed.into();
        assert!(matches!(climate_err, ClimateError::Database { .. }));
    }
}
