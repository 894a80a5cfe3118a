//! Error-message normalization.
//!
//! API clients surface failures in two shapes: a response envelope
//! (`{"response": {"data": {"message": ...}}}`) or a plain error
//! (`{"message": ...}`). [`ErrorEnvelope`] makes the two shapes explicit and
//! rejects anything else with [`Error::UnrecognizedShape`].

use crate::error::{Error, Result};
use crate::transform::truncate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message returned when a transfer exceeds the wallet balance.
pub const INSUFFICIENT_BALANCE: &str = "Insufficient balance";

/// Message returned when the user rejects a signature request.
pub const USER_DENIED: &str = "User denied transaction signature";

const BALANCE_MARKER: &str = "exceeds the balance of";
const DENIED_MARKER: &str = "User denied transaction";

/// Longest JSON excerpt quoted in an [`Error::UnrecognizedShape`].
const EXCERPT_LEN: usize = 80;

/// A failure reported by an API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorEnvelope {
    /// Server answered with an error body.
    Response {
        /// The response carrying the message.
        response: ResponseBody,
    },
    /// Client-side failure with a message.
    Plain {
        /// Human-readable message.
        message: String,
    },
}

/// HTTP response part of a [`ErrorEnvelope::Response`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    /// Decoded body.
    pub data: ResponseData,
}

/// Decoded body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    /// Server-provided message.
    pub message: String,
}

impl ErrorEnvelope {
    /// Response envelope carrying `message`.
    pub fn response(message: impl Into<String>) -> Self {
        ErrorEnvelope::Response {
            response: ResponseBody {
                data: ResponseData {
                    message: message.into(),
                },
            },
        }
    }

    /// Plain error carrying `message`.
    pub fn plain(message: impl Into<String>) -> Self {
        ErrorEnvelope::Plain {
            message: message.into(),
        }
    }

    /// Wrap a Rust error as a plain envelope.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::plain(err.to_string())
    }

    /// Decode a JSON object. The response shape wins when both are present.
    pub fn from_json(value: &Value) -> Result<Self> {
        Self::deserialize(value)
            .map_err(|_| Error::UnrecognizedShape(truncate(&value.to_string(), EXCERPT_LEN)))
    }

    /// Parse JSON text and decode it.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// The message carried by either shape.
    pub fn message(&self) -> &str {
        match self {
            ErrorEnvelope::Response { response } => response.data.message.as_str(),
            ErrorEnvelope::Plain { message } => message.as_str(),
        }
    }
}

/// Message to show for a generic failure.
pub fn normalize_error_message(err: &ErrorEnvelope) -> &str {
    err.message()
}

/// Message to show for a failed wallet transaction.
///
/// Known node errors are mapped to short user-facing text; everything else
/// passes through.
pub fn normalize_txn_error(err: &ErrorEnvelope) -> &str {
    match err {
        ErrorEnvelope::Response { response } => response.data.message.as_str(),
        ErrorEnvelope::Plain { message } if message.contains(BALANCE_MARKER) => {
            INSUFFICIENT_BALANCE
        }
        ErrorEnvelope::Plain { message } if message.contains(DENIED_MARKER) => USER_DENIED,
        ErrorEnvelope::Plain { message } => message.as_str(),
    }
}
