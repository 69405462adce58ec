//! Errors raised while configuring pipeline stages. Evaluating a query
//! never fails.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A substitution table entry was empty or would make normalization
    /// non-idempotent.
    #[error("invalid substitution {surface:?} -> {canonical:?}: {reason}")]
    InvalidSubstitution {
        surface: String,
        canonical: String,
        reason: String,
    },
}
