//! Error types and handling for the `Tripscout` service

use thiserror::Error;

/// Main error type for the `Tripscout` service
#[derive(Error, Debug)]
pub enum TripscoutError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Catalog retrieval errors
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Template rendering errors
    #[error("Render error: {message}")]
    Render { message: String },

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

impl TripscoutError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new fetch error
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
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
            TripscoutError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripscoutError::Fetch { .. } => {
                "Unable to reach the destination catalog. Showing built-in picks instead."
                    .to_string()
            }
            TripscoutError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripscoutError::Render { .. } => {
                "Unable to display results right now. Please try again.".to_string()
            }
            TripscoutError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripscoutError::General { message } => message.clone(),
        }
    }
}
