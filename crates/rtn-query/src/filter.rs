//! # Relevance Filter
//!
//! Selects the records whose searchable text contains the search term.
//!
//! ## Two-pass matching
//!
//! Requirements and conflicts are matched twice and the passes are joined
//! in order:
//!
//! 1. **Scenario level.** Every requirement (or conflict) of a scenario
//!    whose title, industry, description or location contains the term.
//! 2. **Field level.** Every requirement (or conflict) of any scenario whose
//!    own fields contain the term.
//!
//! The union is de-duplicated keeping the first occurrence: requirements by
//! `(title, regulator)`, conflicts by title. Requirements are then capped at
//! [`MAX_REQUIREMENT_RESULTS`]. Regulations are matched on their own fields
//! and de-duplicated by id. Collection order is preserved throughout.

use std::collections::HashSet;
use std::hash::Hash;

use rtn_core::{Conflict, Regulation, Requirement, Scenario};
use rtn_pack::Dataset;

/// Upper bound on the number of requirements in a query result.
pub const MAX_REQUIREMENT_RESULTS: usize = 12;

/// A non-blank, lower-cased search term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against one field.
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.0)
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record exposing a fixed set of searchable text fields.
pub trait Searchable {
    fn searchable_fields(&self) -> Vec<&str>;

    fn matches(&self, term: &SearchTerm) -> bool {
        self.searchable_fields().into_iter().any(|f| term.matches(f))
    }
}

impl Searchable for Regulation {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.requirements.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Requirement {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            self.regulator.as_str(),
        ]
    }
}

impl Searchable for Conflict {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.jurisdictions.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Scenario {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.industry.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
    }
}

/// Records selected for one search term, borrowed from the dataset.
#[derive(Debug, Clone, Default)]
pub struct Matches<'a> {
    pub regulations: Vec<&'a Regulation>,
    pub requirements: Vec<&'a Requirement>,
    pub conflicts: Vec<&'a Conflict>,
    /// Scenario-level matches, in declaration order.
    pub scenarios: Vec<&'a Scenario>,
}

impl<'a> Matches<'a> {
    /// Run every filter against `dataset`.
    pub fn collect(dataset: &'a Dataset, term: &SearchTerm) -> Self {
        let scenarios = matching_scenarios(&dataset.scenarios, term);
        Self {
            regulations: filter_regulations(&dataset.regulations, term),
            requirements: filter_requirements(&dataset.scenarios, &scenarios, term),
            conflicts: filter_conflicts(&dataset.scenarios, &scenarios, term),
            scenarios,
        }
    }
}

/// Keep the first item for each key, preserving order.
fn dedup_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    T: Copy,
    K: Eq + Hash,
    F: FnMut(T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(*item))).collect()
}

pub fn matching_scenarios<'a>(scenarios: &'a [Scenario], term: &SearchTerm) -> Vec<&'a Scenario> {
    scenarios.iter().filter(|s| s.matches(term)).collect()
}

pub fn filter_regulations<'a>(
    regulations: &'a [Regulation],
    term: &SearchTerm,
) -> Vec<&'a Regulation> {
    dedup_by_key(regulations.iter().filter(|r| r.matches(term)), |r| r.id.as_str())
}

/// De-duplicate requirements by `(title, regulator)`, keeping the first.
pub fn dedup_requirements<'a>(
    requirements: impl IntoIterator<Item = &'a Requirement>,
) -> Vec<&'a Requirement> {
    dedup_by_key(requirements, |r| r.dedup_key())
}

pub fn filter_requirements<'a>(
    all: &'a [Scenario],
    matched: &[&'a Scenario],
    term: &SearchTerm,
) -> Vec<&'a Requirement> {
    let scenario_level = matched.iter().copied().flat_map(Scenario::requirements);
    let field_level = all
        .iter()
        .flat_map(|s| s.requirements())
        .filter(|r| r.matches(term));

    let mut requirements = dedup_requirements(scenario_level.chain(field_level));
    requirements.truncate(MAX_REQUIREMENT_RESULTS);
    requirements
}

pub fn filter_conflicts<'a>(
    all: &'a [Scenario],
    matched: &[&'a Scenario],
    term: &SearchTerm,
) -> Vec<&'a Conflict> {
    let scenario_level = matched.iter().copied().flat_map(|s| s.conflicts.iter());
    let field_level = all
        .iter()
        .flat_map(|s| s.conflicts.iter())
        .filter(|c| c.matches(term));

    dedup_by_key(scenario_level.chain(field_level), |c| c.title.as_str())
}
