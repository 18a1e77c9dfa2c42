//! Custom error types for LibreTranslate operations

use thiserror::Error;

/// Errors returned by the client
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Invalid endpoint configuration
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What was wrong with the configuration
        message: String,
    },

    /// Connection, DNS or timeout failure
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport-level failure description
        message: String,
    },

    /// Server answered with a non-success status
    #[error("Service error: {status} - {message}")]
    ServiceError {
        /// HTTP status code
        status: u16,
        /// Error message reported by the server
        message: String,
    },

    /// Response body could not be decoded
    #[error("Decode error: {message}")]
    DecodeError {
        /// Parsing failure description
        message: String,
    },
}

impl TranslationError {
    /// Shorthand for a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        TranslationError::ConfigError {
            message: message.into(),
        }
    }

    /// HTTP status of a service error
    pub fn status(&self) -> Option<u16> {
        match self {
            TranslationError::ServiceError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request never got a response
    pub fn is_network(&self) -> bool {
        matches!(self, TranslationError::NetworkError { .. })
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, TranslationError>;
