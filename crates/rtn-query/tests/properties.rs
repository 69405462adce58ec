//! Universal properties of the query pipeline.

use std::sync::Arc;

use proptest::prelude::*;
use rtn_core::AustralianState;
use rtn_pack::Dataset;
use rtn_query::filter::dedup_requirements;
use rtn_query::{KeywordNormalizer, LocationDetector, QueryEngine, MAX_REQUIREMENT_RESULTS};

const VOCABULARY: &[&str] = &[
    "cafe", "café", "coffee", "shop", "food", "builder", "construction", "retail", "store",
    "cyber", "security", "cybersecurity", "tech", "bar", "pub", "licence", "permit", "tax",
    "abn", "gst", "sydney", "melbourne", "canberra", "perth", "nsw", "vic", "wa", "act",
    "waste", "safety", "a", "e",
];

fn query_word() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(VOCABULARY.to_vec()).prop_map(str::to_string),
        "[a-zA-Z]{1,8}",
    ]
}

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(query_word(), 0..5).prop_map(|words| words.join(" "))
}

fn engine() -> QueryEngine {
    QueryEngine::new(Arc::new(Dataset::builtin().unwrap()))
}

proptest! {
    /// Blank input never matches anything.
    #[test]
    fn blank_queries_are_empty(q in "[ \t\n]{0,12}") {
        let result = engine().evaluate(&q);
        prop_assert!(result.is_empty());
        prop_assert_eq!(result.jurisdiction_tally.total(), 0);
        prop_assert!(result.location_context.is_none());
    }

    /// The tally accounts for exactly the returned requirements.
    #[test]
    fn tally_sums_to_requirement_count(q in query()) {
        let result = engine().evaluate(&q);
        prop_assert_eq!(result.jurisdiction_tally.total(), result.requirements.len());
    }

    #[test]
    fn requirements_never_exceed_cap(q in query()) {
        let result = engine().evaluate(&q);
        prop_assert!(result.requirements.len() <= MAX_REQUIREMENT_RESULTS);
    }

    /// Returned requirements are already unique by (title, regulator).
    #[test]
    fn dedup_is_idempotent(q in query()) {
        let result = engine().evaluate(&q);
        let again = dedup_requirements(result.requirements.iter());
        prop_assert_eq!(again.len(), result.requirements.len());
    }

    #[test]
    fn normalization_is_idempotent(q in query()) {
        let normalizer = KeywordNormalizer::standard();
        let once = normalizer.normalize(&q);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    /// Two states in either order always resolve to the first-declared one.
    #[test]
    fn detection_tie_break_is_fixed(
        a in 0usize..8,
        b in 0usize..8,
        kind_a in 0usize..3,
        kind_b in 0usize..3,
    ) {
        prop_assume!(a != b);
        let states = AustralianState::all();
        let alias = |i: usize, kind: usize| {
            let s = states[i];
            [s.code(), s.name(), s.capital()][kind].to_lowercase()
        };
        let (x, y) = (alias(a, kind_a), alias(b, kind_b));

        let detector = LocationDetector::new();
        let forward = detector.detect(&format!("{x} {y}")).unwrap();
        let backward = detector.detect(&format!("{y} {x}")).unwrap();
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.state_code, states[a.min(b)]);
    }

    /// Evaluation is a pure function of the query.
    #[test]
    fn evaluation_is_deterministic(q in query()) {
        let engine = engine();
        prop_assert_eq!(engine.evaluate(&q), engine.evaluate(&q));
    }
}
