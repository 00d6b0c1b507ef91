//! Error type for product load operations.

use thiserror::Error;

/// Errors surfaced by a [`ProductStore`](crate::ProductStore).
#[derive(Debug, Error)]
pub enum LoadError {
    /// Non-2xx HTTP response.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The request exceeded the client timeout.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The backend could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The response body did not match the expected record shape.
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Any other backend failure.
    #[error("Backend error: {0}")]
    Backend(String),
}
