//! Error types for the Vitalea CMS client.

use thiserror::Error;

/// Result type alias using the Vitalea Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for CMS operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The CMS rejected the request (non-2xx with a decodable error envelope).
    #[error("CMS error: {0}")]
    Cms(String),

    /// Content type or entry not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP/network request failed.
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
