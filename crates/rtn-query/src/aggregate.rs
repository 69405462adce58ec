//! # Jurisdiction Aggregator
//!
//! Counts matched requirements per jurisdiction bucket. Every bucket is
//! always present; an empty input yields all zeros.

use serde::{Deserialize, Serialize};

use rtn_core::{JurisdictionLevel, Requirement};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionTally {
    pub local: usize,
    pub state: usize,
    pub federal: usize,
}

impl JurisdictionTally {
    pub fn from_requirements<'a>(requirements: impl IntoIterator<Item = &'a Requirement>) -> Self {
        let mut tally = Self::default();
        for requirement in requirements {
            tally.increment(requirement.jurisdiction);
        }
        tally
    }

    pub fn increment(&mut self, level: JurisdictionLevel) {
        match level {
            JurisdictionLevel::Local => self.local += 1,
            JurisdictionLevel::State => self.state += 1,
            JurisdictionLevel::Federal => self.federal += 1,
        }
    }

    pub fn get(&self, level: JurisdictionLevel) -> usize {
        match level {
            JurisdictionLevel::Local => self.local,
            JurisdictionLevel::State => self.state,
            JurisdictionLevel::Federal => self.federal,
        }
    }

    pub fn total(&self) -> usize {
        self.local + self.state + self.federal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtn_core::Progress;

    fn requirement(level: JurisdictionLevel) -> Requirement {
        Requirement {
            title: "Registration".to_string(),
            description: String::new(),
            category: "Tax".to_string(),
            regulator: "ATO".to_string(),
            jurisdiction: level,
            progress: Progress::clamped(0),
        }
    }

    #[test]
    fn empty_input_is_all_zeros() {
        let tally = JurisdictionTally::from_requirements(std::iter::empty());
        assert_eq!(tally, JurisdictionTally::default());
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn counts_each_bucket() {
        let reqs = [
            requirement(JurisdictionLevel::Local),
            requirement(JurisdictionLevel::Federal),
            requirement(JurisdictionLevel::Federal),
        ];
        let tally = JurisdictionTally::from_requirements(&reqs);
        assert_eq!(tally.get(JurisdictionLevel::Local), 1);
        assert_eq!(tally.get(JurisdictionLevel::State), 0);
        assert_eq!(tally.get(JurisdictionLevel::Federal), 2);
        assert_eq!(tally.total(), reqs.len());
    }

    #[test]
    fn serializes_every_bucket() {
        let json = serde_json::to_value(JurisdictionTally::default()).unwrap();
        assert_eq!(json, serde_json::json!({"local": 0, "state": 0, "federal": 0}));
    }
}
