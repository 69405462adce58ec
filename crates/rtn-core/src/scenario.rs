//! # Scenarios
//!
//! A scenario bundles one location/industry combination ("Café in Sydney")
//! with the requirements, roadmap steps and conflicts that apply to it.

use serde::{Deserialize, Serialize};

use crate::identity::ScenarioId;
use crate::jurisdiction::{AustralianState, JurisdictionLevel};
use crate::records::{ComplianceStep, Conflict, Requirement};

/// A named location/industry example with its own requirement, step and
/// conflict records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub title: String,
    pub industry: String,
    /// Display location, e.g. `"Sydney, NSW"`.
    pub location: String,
    pub state: AustralianState,
    pub description: String,
    #[serde(default)]
    pub local_requirements: Vec<Requirement>,
    #[serde(default)]
    pub state_requirements: Vec<Requirement>,
    #[serde(default)]
    pub federal_requirements: Vec<Requirement>,
    #[serde(default)]
    pub steps: Vec<ComplianceStep>,
    #[serde(default)]
    pub conflicts: Vec<Conflict>,
}

impl Scenario {
    /// All requirements in bucket order: local, state, then federal.
    pub fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.local_requirements
            .iter()
            .chain(self.state_requirements.iter())
            .chain(self.federal_requirements.iter())
    }

    /// The requirement bucket for one jurisdiction level.
    pub fn bucket(&self, level: JurisdictionLevel) -> &[Requirement] {
        match level {
            JurisdictionLevel::Local => &self.local_requirements,
            JurisdictionLevel::State => &self.state_requirements,
            JurisdictionLevel::Federal => &self.federal_requirements,
        }
    }

    pub fn requirement_count(&self) -> usize {
        self.local_requirements.len()
            + self.state_requirements.len()
            + self.federal_requirements.len()
    }

    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            industry: self.industry.clone(),
            location: self.location.clone(),
            state: self.state,
            requirement_count: self.requirement_count(),
            conflict_count: self.conflicts.len(),
        }
    }
}

/// Lightweight projection of a [`Scenario`] for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub id: ScenarioId,
    pub title: String,
    pub industry: String,
    pub location: String,
    pub state: AustralianState,
    pub requirement_count: usize,
    pub conflict_count: usize,
}
