// src/error.rs

//! Unified error handling for the crawler trigger.

use std::fmt;

use thiserror::Error;

/// Result type alias for trigger operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required input was not supplied
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Glue service rejected a call. The message is the service's own.
    #[error("{message}")]
    Remote { operation: String, message: String },

    /// Crawler did not reach READY within the configured bound
    #[error("Crawler did not complete within {minutes} minutes")]
    Timeout { minutes: u64 },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a missing input error.
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput(name.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a remote error for the given service operation.
    pub fn remote(operation: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Remote {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    /// Create a timeout error naming the configured bound.
    pub fn timeout(minutes: u64) -> Self {
        Self::Timeout { minutes }
    }

    /// Service operation that failed, for remote errors.
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::Remote { operation, .. } => Some(operation),
            _ => None,
        }
    }
}
