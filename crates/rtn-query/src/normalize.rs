//! # Keyword Normalizer
//!
//! Maps colloquial search terms onto canonical category tokens ("cafe" →
//! "food", "builder" → "construction") so that a query written in everyday
//! language lines up with the vocabulary used in the dataset.
//!
//! ## Matching
//!
//! Each surface term is matched case-insensitively on Unicode word
//! boundaries, so "bar" is replaced in "wine bar" but not in "barrister".
//! Rules are applied in table order and each rule sees the output of the
//! rules before it; [`DEFAULT_SUBSTITUTIONS`] therefore lists multi-word
//! terms before the single words they contain ("coffee shop" before "shop").
//!
//! ## Idempotence
//!
//! [`KeywordNormalizer::new`] rejects tables in which a canonical token is
//! also a surface term, or appears as a word inside one. Under that rule no
//! substitution can produce text that another substitution would rewrite,
//! so normalizing an already-normalized string is the identity.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::QueryError;

/// The built-in substitution table, in application order.
pub const DEFAULT_SUBSTITUTIONS: &[(&str, &str)] = &[
    // Food and hospitality
    ("coffee shop", "food"),
    ("café", "food"),
    ("cafe", "food"),
    ("cafes", "food"),
    ("restaurant", "food"),
    ("restaurants", "food"),
    ("bakery", "food"),
    ("takeaway", "food"),
    ("catering", "food"),
    // Construction
    ("builder", "construction"),
    ("builders", "construction"),
    ("building", "construction"),
    ("renovation", "construction"),
    ("tradie", "construction"),
    // Retail
    ("shop", "retail"),
    ("store", "retail"),
    ("boutique", "retail"),
    // Technology
    ("cyber security", "cybersecurity"),
    ("infosec", "cybersecurity"),
    ("software", "technology"),
    ("tech", "technology"),
    // Licensed venues
    ("pub", "liquor"),
    ("bar", "liquor"),
];

#[derive(Debug, Clone)]
struct Rule {
    pattern: Regex,
    canonical: String,
}

/// An ordered, validated substitution table.
#[derive(Debug, Clone)]
pub struct KeywordNormalizer {
    rules: Vec<Rule>,
}

impl KeywordNormalizer {
    /// Build a normalizer from `(surface, canonical)` pairs.
    pub fn new<'a, I>(table: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries: Vec<(String, String)> = table
            .into_iter()
            .map(|(s, c)| (s.trim().to_lowercase(), c.trim().to_lowercase()))
            .collect();

        let surfaces: HashSet<&str> = entries.iter().map(|(s, _)| s.as_str()).collect();
        let canonicals: HashSet<&str> = entries.iter().map(|(_, c)| c.as_str()).collect();

        for (surface, canonical) in &entries {
            let invalid = |reason: &str| QueryError::InvalidSubstitution {
                surface: surface.clone(),
                canonical: canonical.clone(),
                reason: reason.to_string(),
            };
            if surface.is_empty() || canonical.is_empty() {
                return Err(invalid("terms must not be empty"));
            }
            if surfaces.contains(canonical.as_str()) {
                return Err(invalid("canonical token is also a surface term"));
            }
            if surface.split_whitespace().any(|w| canonicals.contains(w)) {
                return Err(invalid("surface term contains a canonical token"));
            }
        }

        let mut rules = Vec::with_capacity(entries.len());
        for (surface, canonical) in entries {
            let pattern = word_pattern(&surface).map_err(|e| QueryError::InvalidSubstitution {
                surface: surface.clone(),
                canonical: canonical.clone(),
                reason: e.to_string(),
            })?;
            rules.push(Rule { pattern, canonical });
        }
        Ok(Self { rules })
    }

    /// The normalizer built from [`DEFAULT_SUBSTITUTIONS`].
    pub fn standard() -> &'static KeywordNormalizer {
        static STANDARD: OnceLock<KeywordNormalizer> = OnceLock::new();
        STANDARD.get_or_init(|| {
            KeywordNormalizer::new(DEFAULT_SUBSTITUTIONS.iter().copied()).unwrap_or_else(|e| {
                // Unreachable while `default_table_is_valid` passes.
                tracing::error!(error = %e, "default substitution table rejected");
                KeywordNormalizer { rules: Vec::new() }
            })
        })
    }

    /// Number of substitution rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replace every whole-word surface term with its canonical token.
    pub fn normalize(&self, input: &str) -> String {
        let mut text = input.to_string();
        for rule in &self.rules {
            if rule.pattern.is_match(&text) {
                text = rule
                    .pattern
                    .replace_all(&text, NoExpand(&rule.canonical))
                    .into_owned();
            }
        }
        text
    }
}

impl Default for KeywordNormalizer {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Case-insensitive whole-word pattern for a literal term.
fn word_pattern(term: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
}
