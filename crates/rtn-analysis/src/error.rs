//! Analysis error types.

use crate::config::ConfigError;

/// Errors from document analysis. Every variant is terminal: nothing is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Transport failure or timeout.
    #[error("could not reach the analysis service: {0}")]
    Network(#[source] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("analysis service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response envelope or the analysis it carries could not be parsed.
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),

    /// No text could be extracted from the input.
    #[error("unsupported document: {0}")]
    UnsupportedInput(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
