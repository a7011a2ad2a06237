use std::io;

/// Errors that can occur inside quickcd plumbing.
///
/// None of these escape the resolution chain: a failed lookup degrades to an
/// unresolved result plus a [`Notice`](crate::Notice).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for quickcd operations
pub type Result<T> = std::result::Result<T, Error>;
