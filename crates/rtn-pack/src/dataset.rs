//! # Dataset: the immutable reference data
//!
//! A [`Dataset`] holds every regulation and scenario the pipeline can
//! match against. It is constructed once (built-in catalogue or a file)
//! and then only read.
//!
//! ## Digest
//!
//! `SHA256( b"rtn-dataset-v1\0" + json(dataset) )`, hex-encoded. Struct
//! fields serialize in declaration order and records are kept in
//! declaration order, so the digest is deterministic for equal datasets.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use rtn_core::{Regulation, Scenario, ScenarioSummary};

use crate::builtin;
use crate::error::{PackError, PackResult};
use crate::validation::validate_dataset;

/// Domain separation prefix for dataset digests.
const DIGEST_PREFIX: &[u8] = b"rtn-dataset-v1\0";

/// Regulations plus scenarios, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub regulations: Vec<Regulation>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl Dataset {
    pub fn new(regulations: Vec<Regulation>, scenarios: Vec<Scenario>) -> Self {
        Self {
            regulations,
            scenarios,
        }
    }

    /// The built-in Australian catalogue.
    pub fn builtin() -> PackResult<Self> {
        builtin::catalogue()
    }

    /// Parse and validate a JSON dataset.
    pub fn from_json_str(s: &str) -> PackResult<Self> {
        let dataset: Dataset = serde_json::from_str(s)?;
        dataset.checked()
    }

    /// Parse and validate a YAML dataset.
    pub fn from_yaml_str(s: &str) -> PackResult<Self> {
        let dataset: Dataset = serde_yaml::from_str(s)?;
        dataset.checked()
    }

    /// Load a dataset file, choosing the format from its extension.
    pub fn load(path: &Path) -> PackResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let format = match extension.as_deref() {
            Some("json") => Format::Json,
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => {
                return Err(PackError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| PackError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = match format {
            Format::Json => Self::from_json_str(&content)?,
            Format::Yaml => Self::from_yaml_str(&content)?,
        };
        tracing::info!(
            path = %path.display(),
            regulations = dataset.regulations.len(),
            scenarios = dataset.scenarios.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Reject datasets with validation errors; log warnings.
    fn checked(self) -> PackResult<Self> {
        let report = validate_dataset(&self);
        for warning in &report.warnings {
            tracing::warn!(%warning, "dataset validation warning");
        }
        if !report.is_valid() {
            return Err(PackError::Invalid {
                errors: report.errors,
            });
        }
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> PackResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> PackResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Hex-encoded content digest of the dataset.
    pub fn digest(&self) -> PackResult<String> {
        let mut hasher = Sha256::new();
        hasher.update(DIGEST_PREFIX);
        hasher.update(serde_json::to_vec(self)?);
        let bytes = hasher.finalize();
        let mut hex = String::with_capacity(bytes.len() * 2);
        for b in bytes.iter() {
            // Writing to a String cannot fail.
            let _ = write!(hex, "{b:02x}");
        }
        Ok(hex)
    }

    /// Look up a regulation by id.
    pub fn regulation(&self, id: &str) -> Option<&Regulation> {
        self.regulations.iter().find(|r| r.id.as_str() == id)
    }

    /// Look up a scenario by id.
    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id.as_str() == id)
    }

    pub fn summaries(&self) -> Vec<ScenarioSummary> {
        self.scenarios.iter().map(Scenario::summary).collect()
    }

    /// Total number of requirements across all scenarios.
    pub fn requirement_count(&self) -> usize {
        self.scenarios.iter().map(Scenario::requirement_count).sum()
    }
}

enum Format {
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic_and_hex() {
        let a = Dataset::builtin().unwrap();
        let b = Dataset::builtin().unwrap();
        let da = a.digest().unwrap();
        assert_eq!(da, b.digest().unwrap());
        assert_eq!(da.len(), 64);
        assert!(da.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn digest_changes_with_content() {
        let full = Dataset::builtin().unwrap();
        let mut trimmed = full.clone();
        trimmed.regulations.pop();
        assert_ne!(full.digest().unwrap(), trimmed.digest().unwrap());
    }

    #[test]
    fn json_round_trip_preserves_dataset() {
        let original = Dataset::builtin().unwrap();
        let json = original.to_json_pretty().unwrap();
        let parsed = Dataset::from_json_str(&json).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn empty_document_is_an_empty_dataset() {
        let parsed = Dataset::from_json_str("{}").unwrap();
        assert!(parsed.regulations.is_empty());
        assert!(parsed.scenarios.is_empty());
    }

    #[test]
    fn lookups_by_id() {
        let dataset = Dataset::builtin().unwrap();
        assert!(dataset.regulation("food-business-license").is_some());
        assert!(dataset.regulation("no-such-regulation").is_none());
        assert!(dataset.scenario("cafe-sydney").is_some());
        assert_eq!(dataset.summaries().len(), dataset.scenarios.len());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = Dataset::load(Path::new("dataset.toml")).unwrap_err();
        assert!(matches!(err, PackError::UnsupportedFormat { .. }));
    }
}
