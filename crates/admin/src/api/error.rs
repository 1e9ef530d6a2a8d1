//! Error types for the remote resource client.

use thiserror::Error;

/// Errors that can occur when talking to the pizzeria backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, TLS, I/O).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status. The body is discarded.
    #[error("server responded with status {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON.
    #[error("could not parse response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}
