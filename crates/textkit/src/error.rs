//! Error types for textkit

use thiserror::Error;

/// Errors that can occur while decoding error envelopes
#[derive(Debug, Error)]
pub enum Error {
    /// The object is neither a response envelope nor a plain message
    #[error("unrecognized error shape: {0}")]
    UnrecognizedShape(String),

    /// The input is not JSON at all
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for textkit operations
pub type Result<T> = std::result::Result<T, Error>;
