//! # Location Detector
//!
//! Finds the first Australian state or territory mentioned in a query.
//!
//! Each state contributes three aliases, tested in this order: its code
//! ("nsw"), its full name ("new south wales") and its capital city
//! ("sydney"). States are tested in [`AustralianState::all`] order and the
//! first state with any matching alias wins, so a query naming two states
//! always resolves to the same one.
//!
//! Full names and capitals match as substrings. Codes are two or three
//! letters and match only as whole words; as substrings they would fire on
//! ordinary words ("waste", "contract").

use serde::{Deserialize, Serialize};

use rtn_core::AustralianState;

/// Which kind of alias produced a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    StateCode,
    StateName,
    CapitalCity,
}

/// A detected location, as reported in `QueryResult.locationContext`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationContext {
    /// The alias found in the query, lower-cased.
    pub alias: String,
    pub state_code: AustralianState,
    pub kind: LocationKind,
}

#[derive(Debug, Clone)]
struct Alias {
    state: AustralianState,
    kind: LocationKind,
    text: String,
}

impl Alias {
    /// Byte ranges of every occurrence of this alias in `haystack`.
    fn occurrences(&self, haystack: &str) -> Vec<(usize, usize)> {
        haystack
            .match_indices(self.text.as_str())
            .map(|(start, m)| (start, start + m.len()))
            .filter(|&(start, end)| match self.kind {
                LocationKind::StateCode => is_whole_word(haystack, start, end),
                LocationKind::StateName | LocationKind::CapitalCity => true,
            })
            .collect()
    }
}

fn is_whole_word(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Alias table for the eight states and territories.
#[derive(Debug, Clone)]
pub struct LocationDetector {
    aliases: Vec<Alias>,
}

impl LocationDetector {
    pub fn new() -> Self {
        let aliases = AustralianState::all()
            .iter()
            .flat_map(|&state| {
                [
                    (LocationKind::StateCode, state.code()),
                    (LocationKind::StateName, state.name()),
                    (LocationKind::CapitalCity, state.capital()),
                ]
                .into_iter()
                .map(move |(kind, text)| Alias {
                    state,
                    kind,
                    text: text.to_lowercase(),
                })
            })
            .collect();
        Self { aliases }
    }

    /// Detect the first-declared state mentioned in `query`.
    ///
    /// `query` is expected to be lower-cased already; upper-case text is
    /// not matched.
    pub fn detect(&self, query: &str) -> Option<LocationContext> {
        self.aliases
            .iter()
            .find(|alias| !alias.occurrences(query).is_empty())
            .map(|alias| LocationContext {
                alias: alias.text.clone(),
                state_code: alias.state,
                kind: alias.kind,
            })
    }

    /// `query` with every alias of the detected state removed, separator
    /// punctuation left behind by the removal dropped and whitespace
    /// collapsed.
    pub fn remainder(&self, query: &str, context: &LocationContext) -> String {
        let stripped = self
            .aliases
            .iter()
            .filter(|a| a.state == context.state_code)
            .fold(query.to_string(), |text, alias| strip_alias(&text, alias));
        tidy(&stripped)
    }
}

fn strip_alias(text: &str, alias: &Alias) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in alias.occurrences(text) {
        stripped.push_str(&text[cursor..start]);
        stripped.push(' ');
        cursor = end;
    }
    stripped.push_str(&text[cursor..]);
    stripped
}

impl Default for LocationDetector {
    fn default() -> Self {
        Self::new()
    }
}

const SEPARATORS: &[char] = &[',', '.', ';', ':'];

fn tidy(s: &str) -> String {
    s.split_whitespace()
        .filter(|word| !word.chars().all(|c| SEPARATORS.contains(&c)))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| SEPARATORS.contains(&c) || c.is_whitespace())
        .to_string()
}
