//! Analysis result types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk tier assigned to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "moderate" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown risk level {other:?}")),
        }
    }
}

impl TryFrom<String> for RiskLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Structured summary of one document.
///
/// Accepts camelCase keys (the instructed format) and snake_case aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub summary: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(alias = "document_type")]
    pub document_type: String,
    #[serde(alias = "risk_level")]
    pub risk_level: RiskLevel,
    #[serde(default, alias = "action_items")]
    pub action_items: Vec<String>,
}

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    /// Parsed from the service response.
    Service,
    /// Produced by [`crate::manual_extraction`] after a malformed response.
    ManualFallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub analysis: DocumentAnalysis,
    pub source: AnalysisSource,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisOutcome {
    pub fn new(analysis: DocumentAnalysis, source: AnalysisSource) -> Self {
        Self {
            analysis,
            source,
            analyzed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert_eq!(" Moderate ".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert!("severe".parse::<RiskLevel>().is_err());
        let r: RiskLevel = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(r, RiskLevel::Low);
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn analysis_accepts_both_key_styles() {
        let camel: DocumentAnalysis = serde_json::from_value(serde_json::json!({
            "summary": "A lease.",
            "requirements": ["Pay rent"],
            "documentType": "Lease",
            "riskLevel": "low",
            "actionItems": ["Sign"]
        }))
        .unwrap();
        let snake: DocumentAnalysis = serde_json::from_value(serde_json::json!({
            "summary": "A lease.",
            "requirements": ["Pay rent"],
            "document_type": "Lease",
            "risk_level": "low",
            "action_items": ["Sign"]
        }))
        .unwrap();
        assert_eq!(camel, snake);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result = serde_json::from_value::<DocumentAnalysis>(serde_json::json!({
            "summary": "No tier"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn outcome_source_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&AnalysisSource::ManualFallback).unwrap(),
            "\"manual_fallback\""
        );
    }
}
