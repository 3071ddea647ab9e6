//! Error types for ollama-connection
//!
//! Every client operation is all-or-nothing: failures are returned to the
//! caller as a `ConnectionError` and never retried.

use thiserror::Error;

/// Main error type for Ollama connection operations
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// HTTP transport errors (connection refused, DNS, I/O interruption)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Malformed JSON or a response missing an expected field
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed liveness probe in strict mode; must terminate the process
    #[error("Ollama connection at {address} is invalid and fatal: {reason}")]
    Fatal { address: String, reason: String },

    /// Model action name outside of pull/delete/load
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for connection operations
pub type Result<T> = std::result::Result<T, ConnectionError>;

impl ConnectionError {
    /// Whether this error requires the process to exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConnectionError::Fatal { .. })
    }
}
