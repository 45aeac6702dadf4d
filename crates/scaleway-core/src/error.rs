//! Error types for Scaleway API operations.
//!
//! Transport and decode failures are the two substantive error kinds; both
//! carry the source message through unchanged. The remaining variants cover
//! client-side conditions that fail before any request is sent.

use thiserror::Error;

/// Main error type for Scaleway API operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The HTTP transport failed (connection, DNS, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The transport timed out before a response arrived.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The response body was not valid JSON for the expected structure.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The response body was empty where a payload was required.
    #[error("Expected a `{0}` payload but the response body was empty")]
    EmptyPayload(&'static str),

    /// The request path could not be resolved against the base URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A resource identifier was not a valid UUID.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Client configuration was invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized result type for Scaleway API operations.
pub type Result<T> = std::result::Result<T, Error>;

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Self::InvalidId(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}
