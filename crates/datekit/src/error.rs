//! Error types for datekit

use thiserror::Error;

/// Errors that can occur while reading, shifting or formatting dates
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text is not an ISO-8601 date or date-time
    #[error("invalid date: {0:?}")]
    InvalidFormat(String),

    /// Fields parsed but do not name a real instant, or arithmetic overflowed
    #[error("date out of range: {0}")]
    OutOfRange(String),

    /// Format pattern uses a letter with no meaning
    #[error("invalid format pattern: {0}")]
    InvalidPattern(String),
}

/// Result type for datekit operations
pub type Result<T> = std::result::Result<T, Error>;
