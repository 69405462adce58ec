//! # Manual Extraction
//!
//! A deterministic, offline stand-in for the analysis service, used when
//! the service response cannot be parsed. The heuristics are deliberately
//! shallow:
//!
//! - **Summary**: the first two sentences, cut at 300 characters.
//! - **Requirements**: sentences containing an obligation marker ("must",
//!   "shall", "required", ...), at most ten.
//! - **Document type**: the first keyword group found in the text.
//! - **Risk level**: from the number of obligations, raised one tier when
//!   the text mentions penalties.
//! - **Action items**: one per requirement, at most five.

use crate::types::{DocumentAnalysis, RiskLevel};

const MAX_SUMMARY_CHARS: usize = 300;
const MAX_REQUIREMENTS: usize = 10;
const MAX_ACTION_ITEMS: usize = 5;

const OBLIGATION_MARKERS: &[&str] = &[
    "must",
    "shall",
    "required",
    "requires",
    "mandatory",
    "obliged",
    "need to",
    "needs to",
];

const PENALTY_MARKERS: &[&str] = &["penalty", "penalties", "fine", "fines", "offence", "breach"];

/// Keyword groups checked in order; the first hit names the document.
const DOCUMENT_TYPES: &[(&[&str], &str)] = &[
    (&["lease", "lessor", "lessee"], "Lease Agreement"),
    (&["permit"], "Permit"),
    (&["licence", "license"], "Licence"),
    (&["contract", "agreement"], "Contract"),
    (&["invoice"], "Invoice"),
    (&["policy"], "Policy"),
    (&["act", "regulation", "section"], "Legislation"),
];

const UNKNOWN_DOCUMENT_TYPE: &str = "General Document";

/// Build an analysis from the document text alone.
pub fn manual_extraction(text: &str) -> DocumentAnalysis {
    let sentences = sentences(text);

    let summary = summarize(&sentences);
    let requirements: Vec<String> = dedup(
        sentences
            .iter()
            .filter(|s| contains_any_word(s, OBLIGATION_MARKERS))
            .map(|s| s.to_string()),
    )
    .into_iter()
    .take(MAX_REQUIREMENTS)
    .collect();

    let document_type = DOCUMENT_TYPES
        .iter()
        .find(|(keywords, _)| contains_any_word(text, keywords))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| UNKNOWN_DOCUMENT_TYPE.to_string());

    let risk_level = assess_risk(requirements.len(), contains_any_word(text, PENALTY_MARKERS));

    let action_items = if requirements.is_empty() {
        vec!["Review the document for obligations that apply to your business".to_string()]
    } else {
        requirements
            .iter()
            .take(MAX_ACTION_ITEMS)
            .map(|r| format!("Confirm compliance: {r}"))
            .collect()
    };

    DocumentAnalysis {
        summary,
        requirements,
        document_type,
        risk_level,
        action_items,
    }
}

fn sentences(text: &str) -> Vec<&str> {
    text.split(|c| matches!(c, '.' | '!' | '?' | '\n' | ';'))
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphabetic))
        .collect()
}

fn summarize(sentences: &[&str]) -> String {
    if sentences.is_empty() {
        return "No readable content.".to_string();
    }
    let joined = sentences
        .iter()
        .take(2)
        .map(|s| format!("{s}."))
        .collect::<Vec<_>>()
        .join(" ");
    if joined.chars().count() <= MAX_SUMMARY_CHARS {
        joined
    } else {
        let cut: String = joined.chars().take(MAX_SUMMARY_CHARS).collect();
        format!("{}...", cut.trim_end())
    }
}

fn assess_risk(obligations: usize, mentions_penalties: bool) -> RiskLevel {
    let base = match obligations {
        0..=2 => RiskLevel::Low,
        3..=5 => RiskLevel::Medium,
        _ => RiskLevel::High,
    };
    match (base, mentions_penalties) {
        (RiskLevel::Low, true) => RiskLevel::Medium,
        (RiskLevel::Medium, true) => RiskLevel::High,
        (level, _) => level,
    }
}

/// Whole-word, case-insensitive containment of any marker. Markers may be
/// multi-word phrases.
fn contains_any_word(text: &str, markers: &[&str]) -> bool {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    markers.iter().any(|marker| {
        let phrase: Vec<&str> = marker.split_whitespace().collect();
        !phrase.is_empty()
            && words
                .windows(phrase.len())
                .any(|w| w.iter().zip(&phrase).all(|(a, b)| a == b))
    })
}

fn dedup(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|s| seen.insert(s.to_lowercase())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEASE: &str = "This retail lease is made between the lessor and the lessee. \
        The premises are located in Brisbane. The lessee must pay rent monthly. \
        The lessee shall maintain public liability insurance. \
        Signage is required to comply with council rules.";

    #[test]
    fn extracts_obligation_sentences() {
        let analysis = manual_extraction(LEASE);
        assert_eq!(analysis.requirements.len(), 3);
        assert_eq!(analysis.requirements[0], "The lessee must pay rent monthly");
        assert_eq!(analysis.document_type, "Lease Agreement");
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(analysis.action_items.len(), 3);
    }

    #[test]
    fn summary_uses_leading_sentences() {
        let analysis = manual_extraction(LEASE);
        assert_eq!(
            analysis.summary,
            "This retail lease is made between the lessor and the lessee. The premises are located in Brisbane."
        );
    }

    #[test]
    fn penalties_raise_risk() {
        let text = "Operators must register. A penalty applies for late registration.";
        assert_eq!(manual_extraction(text).risk_level, RiskLevel::Medium);
        let text = "Operators must register.";
        assert_eq!(manual_extraction(text).risk_level, RiskLevel::Low);
    }

    #[test]
    fn markers_match_whole_words_only() {
        // "mustard" and "finest" contain markers as substrings.
        let analysis = manual_extraction("The finest mustard in town.");
        assert!(analysis.requirements.is_empty());
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert_eq!(analysis.document_type, UNKNOWN_DOCUMENT_TYPE);
        assert_eq!(analysis.action_items.len(), 1);
    }

    #[test]
    fn empty_text_still_produces_an_analysis() {
        let analysis = manual_extraction("");
        assert_eq!(analysis.summary, "No readable content.");
        assert!(analysis.requirements.is_empty());
    }

    #[test]
    fn long_summaries_are_cut() {
        let text = format!("{}.", "word ".repeat(200));
        let analysis = manual_extraction(&text);
        assert!(analysis.summary.ends_with("..."));
        assert!(analysis.summary.chars().count() <= MAX_SUMMARY_CHARS + 3);
    }

    #[test]
    fn multi_word_markers() {
        assert!(contains_any_word("Vendors need to renew annually", OBLIGATION_MARKERS));
        assert!(!contains_any_word("Vendors need renewal", &["need to"]));
    }
}
