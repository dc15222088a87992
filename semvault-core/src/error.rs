//! Error types for the semvault SDK

use thiserror::Error;

/// Result type alias using semvault's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the semvault SDK
#[derive(Debug, Error)]
pub enum Error {
    // ============ Configuration Errors ============
    /// Client is not properly configured
    #[error("Configuration error: {0}")]
    Config(String),

    // ============ Validation Errors ============
    /// Input rejected before any network call was made
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Transcription Errors ============
    /// Speech-to-text backend failed
    #[error("Transcription error: {0}")]
    Transcription(String),

    /// No transcription backend is configured on this client
    #[error("Transcriber unavailable: {0}")]
    TranscriberUnavailable(String),

    // ============ Network Errors ============
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // ============ Serialization Errors ============
    /// Payload serialization or response decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ============ System Errors ============
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============ Generic Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Any other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new transcription error
    pub fn transcription(msg: impl Into<String>) -> Self {
        Self::Transcription(msg.into())
    }

    /// True when the error was produced before any request was dispatched
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
