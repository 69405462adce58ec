//! End-to-end query scenarios against the built-in catalogue.

use std::sync::Arc;

use rtn_core::{AustralianState, JurisdictionLevel};
use rtn_pack::Dataset;
use rtn_query::{LocationKind, QueryEngine, MAX_REQUIREMENT_RESULTS};

fn engine() -> QueryEngine {
    QueryEngine::new(Arc::new(Dataset::builtin().unwrap()))
}

// ---------------------------------------------------------------------------
// Colloquial business terms
// ---------------------------------------------------------------------------

#[test]
fn cafe_finds_sydney_food_requirements() {
    let result = engine().evaluate("cafe");

    assert_eq!(result.normalized_query, "food");
    assert!(result.location_context.is_none());
    assert_eq!(result.scenarios[0].title, "Café in Sydney");

    let titles: Vec<&str> = result.requirements.iter().map(|r| r.title.as_str()).collect();
    for expected in [
        "Food Business Registration",
        "Health Inspection",
        "Waste Management Plan",
        "NSW Food Safety Standards",
    ] {
        assert!(titles.contains(&expected), "missing {expected}: {titles:?}");
    }
    assert!(result.requirements.len() <= MAX_REQUIREMENT_RESULTS);

    assert!(result
        .regulations
        .iter()
        .any(|r| r.title == "Food Business License"));

    let tally = result.jurisdiction_tally;
    assert!(tally.local > 0);
    assert!(tally.state > 0);
    assert!(tally.federal > 0);
}

#[test]
fn restaurant_and_cafe_are_equivalent() {
    let engine = engine();
    let cafe = engine.evaluate("cafe");
    let restaurant = engine.evaluate("restaurant");
    assert_eq!(cafe.requirements, restaurant.requirements);
    assert_eq!(cafe.regulations, restaurant.regulations);
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[test]
fn sydney_detects_nsw() {
    let result = engine().evaluate("sydney");

    let ctx = result.location_context.expect("location detected");
    assert_eq!(ctx.state_code, AustralianState::Nsw);
    assert_eq!(ctx.kind, LocationKind::CapitalCity);

    let json = serde_json::to_value(engine().evaluate("sydney")).unwrap();
    assert_eq!(json["locationContext"]["stateCode"], "NSW");
}

#[test]
fn canberra_cybersecurity_finds_the_start_up() {
    let result = engine().evaluate("canberra cybersecurity");

    let ctx = result.location_context.as_ref().expect("location detected");
    assert_eq!(ctx.state_code, AustralianState::Act);
    assert_eq!(result.search_term, "cybersecurity");

    assert_eq!(result.scenarios.len(), 1);
    assert_eq!(result.scenarios[0].title, "Cybersecurity Start-up");

    assert_eq!(result.conflicts.len(), 4);
    for conflict in &result.conflicts {
        assert_eq!(conflict.jurisdictions, ["ACT Territory", "Commonwealth"]);
    }

    assert!(!result.steps.is_empty());
    assert_eq!(
        result.jurisdiction_tally.total(),
        result.requirements.len()
    );
}

#[test]
fn spelled_out_cyber_security_normalizes() {
    let engine = engine();
    let a = engine.evaluate("cyber security canberra");
    let b = engine.evaluate("canberra cybersecurity");
    assert_eq!(a.search_term, b.search_term);
    assert_eq!(a.conflicts, b.conflicts);
}

#[test]
fn naming_city_and_state_together_matches_city_alone() {
    let engine = engine();
    for (both, city) in [
        ("cafe sydney nsw", "cafe sydney"),
        ("builder melbourne victoria", "builder melbourne"),
        ("cafe, sydney", "cafe sydney"),
    ] {
        let full = engine.evaluate(both);
        let reference = engine.evaluate(city);

        assert_eq!(full.search_term, reference.search_term, "query {both:?}");
        assert!(!full.regulations.is_empty(), "query {both:?}");
        assert!(!full.requirements.is_empty(), "query {both:?}");
        assert_eq!(full.regulations, reference.regulations, "query {both:?}");
        assert_eq!(full.requirements, reference.requirements, "query {both:?}");
        assert_eq!(full.scenarios, reference.scenarios, "query {both:?}");
        assert_eq!(
            full.location_context.map(|l| l.state_code),
            reference.location_context.map(|l| l.state_code)
        );
    }
}

#[test]
fn state_name_and_capital_strip_to_the_business_term() {
    let result = engine().evaluate("builder melbourne victoria");
    assert_eq!(result.search_term, "construction");
    assert_eq!(
        result.location_context.unwrap().state_code,
        AustralianState::Vic
    );
    assert_eq!(result.scenarios[0].id.as_str(), "construction-melbourne");
}

// ---------------------------------------------------------------------------
// Empty results
// ---------------------------------------------------------------------------

#[test]
fn unknown_term_matches_nothing() {
    let result = engine().evaluate("xyzzznotfound");
    assert!(result.is_empty());
    assert!(result.steps.is_empty());
    assert!(result.location_context.is_none());
    assert_eq!(result.jurisdiction_tally.total(), 0);
}

#[test]
fn blank_query_is_explicitly_empty() {
    for q in ["", "   ", "\t\n"] {
        let result = engine().evaluate(q);
        assert!(result.is_empty(), "{q:?}");
        assert_eq!(result.jurisdiction_tally.total(), 0);
        assert!(result.location_context.is_none());
    }
}

// ---------------------------------------------------------------------------
// De-duplication
// ---------------------------------------------------------------------------

#[test]
fn shared_requirements_appear_once() {
    let result = engine().evaluate("abn");
    let abn: Vec<_> = result
        .requirements
        .iter()
        .filter(|r| r.title == "ABN Registration")
        .collect();
    assert_eq!(abn.len(), 1);
    assert_eq!(abn[0].jurisdiction, JurisdictionLevel::Federal);
}

#[test]
fn custom_dataset_is_searched() {
    let mut dataset = Dataset::builtin().unwrap();
    dataset.scenarios.retain(|s| s.state == AustralianState::Vic);
    let engine = QueryEngine::new(Arc::new(dataset));

    assert!(engine.evaluate("cafe").scenarios.is_empty());
    assert_eq!(engine.evaluate("builder").scenarios.len(), 1);
}
