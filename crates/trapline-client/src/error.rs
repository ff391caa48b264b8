//! Error types for trapline-client

use thiserror::Error;

/// Result type alias for trapline-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the backend
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport or body-decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        /// Request method
        method: &'static str,
        /// Request URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// The configured base URL cannot be used
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// URL as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A simulated failure from [`MockBackend`](crate::MockBackend)
    #[error("Simulated backend failure: {0}")]
    Simulated(String),
}
