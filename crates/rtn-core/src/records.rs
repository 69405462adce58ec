//! # Regulatory Records
//!
//! The read-only reference records searched by the navigator. Records are
//! plain owned values; a [`crate::Scenario`] owns its requirements, steps
//! and conflicts by value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RtnError;
use crate::identity::RegulationId;
use crate::jurisdiction::{JurisdictionLevel, JurisdictionTag};

/// Relative effort of complying with a regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Severity of a cross-jurisdiction conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Progress of a single compliance step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Pending,
    InProgress,
    Completed,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion percentage of a requirement, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// Upper bound (inclusive).
    pub const MAX: u8 = 100;

    /// Create a progress value, rejecting anything above 100.
    pub fn new(value: u8) -> Result<Self, RtnError> {
        if value > Self::MAX {
            return Err(RtnError::Validation(format!(
                "progress must be within 0..=100, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Create a progress value, saturating at 100. Intended for literal
    /// values in built-in catalogues.
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 == Self::MAX
    }
}

impl TryFrom<u8> for Progress {
    type Error = RtnError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// A regulation a business may have to satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    pub id: RegulationId,
    pub title: String,
    pub jurisdiction: JurisdictionTag,
    pub description: String,
    /// Ordered requirement phrases ("Register with local council", ...).
    #[serde(default)]
    pub requirements: Vec<String>,
    pub complexity: Complexity,
    /// Display string, e.g. `"$300 - $1,000"`.
    pub cost: String,
    /// Display string, e.g. `"2-4 weeks"`.
    pub timeframe: String,
}

/// A concrete obligation inside a scenario, owned by one regulator on one
/// jurisdiction level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub title: String,
    pub description: String,
    /// Category label ("Food Safety", "Tax", ...).
    pub category: String,
    /// Name of the authority that administers it.
    pub regulator: String,
    pub jurisdiction: JurisdictionLevel,
    pub progress: Progress,
}

impl Requirement {
    /// Identity used for de-duplication across scenarios.
    pub fn dedup_key(&self) -> (&str, &str) {
        (self.title.as_str(), self.regulator.as_str())
    }
}

/// A point where two or more jurisdictions impose incompatible or
/// overlapping obligations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub title: String,
    pub description: String,
    /// Names of the jurisdictions involved ("City of Sydney", "NSW State").
    pub jurisdictions: Vec<String>,
    pub severity: Severity,
}

/// One step of a scenario's compliance roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStep {
    /// Ordinal; strictly increasing within a scenario.
    pub step: u32,
    pub title: String,
    pub description: String,
    pub timeframe: String,
    pub status: StepStatus,
}
