//! # Identifier Newtypes
//!
//! Regulations and scenarios are addressed by stable lowercase slugs
//! (`food-business-license`, `cafe-sydney`). The newtypes keep the two
//! namespaces apart and validate the slug format on construction and on
//! deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RtnError;

/// Slug format: non-empty, `[a-z0-9-]`, no leading, trailing or doubled hyphen.
fn validate_slug(kind: &str, s: &str) -> Result<(), RtnError> {
    let well_formed = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--");
    if well_formed {
        Ok(())
    } else {
        Err(RtnError::Validation(format!(
            "{kind} must be a lowercase slug ([a-z0-9-]), got {s:?}"
        )))
    }
}

/// Identifier of a [`crate::Regulation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegulationId(String);

/// Identifier of a [`crate::Scenario`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScenarioId(String);

impl RegulationId {
    /// Create a regulation identifier, validating the slug format.
    pub fn new(s: impl Into<String>) -> Result<Self, RtnError> {
        let s = s.into();
        validate_slug("regulation id", &s)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ScenarioId {
    /// Create a scenario identifier, validating the slug format.
    pub fn new(s: impl Into<String>) -> Result<Self, RtnError> {
        let s = s.into();
        validate_slug("scenario id", &s)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RegulationId {
    type Error = RtnError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for ScenarioId {
    type Error = RtnError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RegulationId> for String {
    fn from(id: RegulationId) -> Self {
        id.0
    }
}

impl From<ScenarioId> for String {
    fn from(id: ScenarioId) -> Self {
        id.0
    }
}

impl fmt::Display for RegulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
