//! # Query Engine
//!
//! Wires the pipeline stages to a shared dataset. Evaluation takes `&self`
//! and touches no mutable state, so one engine behind an `Arc` serves any
//! number of concurrent callers.

use std::sync::Arc;

use rtn_pack::Dataset;

use crate::aggregate::JurisdictionTally;
use crate::compose::QueryResult;
use crate::filter::{Matches, SearchTerm};
use crate::location::LocationDetector;
use crate::normalize::KeywordNormalizer;

#[derive(Debug, Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
    normalizer: KeywordNormalizer,
    detector: LocationDetector,
}

impl QueryEngine {
    /// An engine using the standard substitution table.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_normalizer(dataset, KeywordNormalizer::default())
    }

    pub fn with_normalizer(dataset: Arc<Dataset>, normalizer: KeywordNormalizer) -> Self {
        Self {
            dataset,
            normalizer,
            detector: LocationDetector::new(),
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Evaluate one query against the dataset.
    pub fn evaluate(&self, query: &str) -> QueryResult {
        let prepared = query.trim().to_lowercase();
        if prepared.is_empty() {
            tracing::debug!(query, "blank query");
            return QueryResult::empty(query);
        }

        let normalized = self.normalizer.normalize(&prepared);
        let location = self.detector.detect(&normalized);

        // The location alias is a filter on its own only when nothing else
        // was asked for.
        let remainder = location
            .as_ref()
            .map(|ctx| self.detector.remainder(&normalized, ctx))
            .unwrap_or_else(|| normalized.clone());
        let Some(term) = SearchTerm::new(&remainder).or_else(|| SearchTerm::new(&normalized))
        else {
            return QueryResult::empty(query);
        };

        let matches = Matches::collect(&self.dataset, &term);
        let tally = JurisdictionTally::from_requirements(matches.requirements.iter().copied());

        tracing::debug!(
            query,
            search_term = %term,
            state = location.as_ref().map(|l| l.state_code.code()),
            regulations = matches.regulations.len(),
            requirements = matches.requirements.len(),
            conflicts = matches.conflicts.len(),
            "evaluated query"
        );

        QueryResult::compose(
            query,
            normalized,
            term.as_str().to_string(),
            location,
            matches,
            tally,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtn_core::AustralianState;

    fn engine() -> QueryEngine {
        QueryEngine::new(Arc::new(Dataset::builtin().unwrap()))
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryEngine>();
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        let result = engine().evaluate("  CAFE  ");
        assert_eq!(result.query, "  CAFE  ");
        assert_eq!(result.normalized_query, "food");
        assert_eq!(result.search_term, "food");
    }

    #[test]
    fn location_alias_is_stripped_from_search_term() {
        let result = engine().evaluate("Construction Melbourne");
        assert_eq!(result.search_term, "construction");
        let ctx = result.location_context.unwrap();
        assert_eq!(ctx.state_code, AustralianState::Vic);
        assert_eq!(result.scenarios[0].id.as_str(), "construction-melbourne");
    }

    #[test]
    fn location_only_query_searches_for_the_location() {
        let result = engine().evaluate("perth");
        assert_eq!(result.search_term, "perth");
        assert_eq!(result.scenarios.len(), 1);
        assert_eq!(result.scenarios[0].state, AustralianState::Wa);
    }

    #[test]
    fn steps_come_from_first_matched_scenario() {
        let result = engine().evaluate("cafe");
        assert_eq!(result.scenarios[0].id.as_str(), "cafe-sydney");
        assert!(!result.steps.is_empty());
        assert!(result.steps.windows(2).all(|w| w[0].step < w[1].step));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let engine = engine();
        assert_eq!(engine.evaluate("sydney food"), engine.evaluate("sydney food"));
    }
}
