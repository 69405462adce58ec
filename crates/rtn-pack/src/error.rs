//! Dataset loading and validation errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, validating or encoding a dataset.
#[derive(Error, Debug)]
pub enum PackError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parse or encode failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse or encode failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not name a supported format.
    #[error("unsupported dataset format: {} (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A record failed a core invariant while being built.
    #[error("record error: {0}")]
    Record(#[from] rtn_core::RtnError),

    /// The dataset parsed but failed boundary validation.
    #[error("dataset failed validation: {}", .errors.join("; "))]
    Invalid { errors: Vec<String> },
}

/// Convenience alias.
pub type PackResult<T> = Result<T, PackError>;
