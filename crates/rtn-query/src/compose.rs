//! # Result Composer
//!
//! Packages the pipeline outputs into the [`QueryResult`] handed to the
//! presentation layer. Records are cloned out of the dataset so the result
//! owns its data and can outlive the engine borrow.

use serde::{Deserialize, Serialize};

use rtn_core::{ComplianceStep, Conflict, Regulation, Requirement, ScenarioSummary};

use crate::aggregate::JurisdictionTally;
use crate::filter::Matches;
use crate::location::LocationContext;

/// The response to one query evaluation. Serializes in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// The query as received.
    pub query: String,
    pub normalized_query: String,
    /// The text actually matched against records.
    pub search_term: String,
    /// `null` when no location was detected.
    pub location_context: Option<LocationContext>,
    pub regulations: Vec<Regulation>,
    /// De-duplicated by `(title, regulator)`, at most 12 entries.
    pub requirements: Vec<Requirement>,
    pub conflicts: Vec<Conflict>,
    pub scenarios: Vec<ScenarioSummary>,
    /// Roadmap of the first matched scenario.
    pub steps: Vec<ComplianceStep>,
    pub jurisdiction_tally: JurisdictionTally,
}

impl QueryResult {
    /// The result for a blank query: every collection empty, every bucket
    /// zero, no location.
    pub fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            normalized_query: String::new(),
            search_term: String::new(),
            location_context: None,
            regulations: Vec::new(),
            requirements: Vec::new(),
            conflicts: Vec::new(),
            scenarios: Vec::new(),
            steps: Vec::new(),
            jurisdiction_tally: JurisdictionTally::default(),
        }
    }

    pub fn compose(
        query: &str,
        normalized_query: String,
        search_term: String,
        location_context: Option<LocationContext>,
        matches: Matches<'_>,
        jurisdiction_tally: JurisdictionTally,
    ) -> Self {
        let steps = matches
            .scenarios
            .first()
            .map(|s| s.steps.clone())
            .unwrap_or_default();

        Self {
            query: query.to_string(),
            normalized_query,
            search_term,
            location_context,
            regulations: matches.regulations.into_iter().cloned().collect(),
            requirements: matches.requirements.into_iter().cloned().collect(),
            conflicts: matches.conflicts.into_iter().cloned().collect(),
            scenarios: matches.scenarios.iter().map(|s| s.summary()).collect(),
            steps,
            jurisdiction_tally,
        }
    }

    /// True when no record of any kind matched.
    pub fn is_empty(&self) -> bool {
        self.regulations.is_empty()
            && self.requirements.is_empty()
            && self.conflicts.is_empty()
            && self.scenarios.is_empty()
    }
}
