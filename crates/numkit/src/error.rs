//! Error types for numkit

use thiserror::Error;

/// Errors that can occur while building a formatter
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Currency code is not three ASCII letters
    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),
}

/// Result type for numkit operations
pub type Result<T> = std::result::Result<T, Error>;
