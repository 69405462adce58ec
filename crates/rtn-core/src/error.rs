//! # Error Types
//!
//! Errors raised while constructing or parsing core record types. All
//! errors use `thiserror` for derive-based `Display` and `Error`.

use thiserror::Error;

/// Top-level error type for the core record types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtnError {
    /// A value violated a record invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A tag string did not belong to its closed set.
    #[error("unknown {kind} tag: {value:?}")]
    UnknownTag {
        /// Which tag family was being parsed (e.g. "jurisdiction").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RtnError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
