//! Typed client for an OpenAI-compatible chat-completions API.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `{base_url}/chat/completions` | Analyze one document |
//!
//! The document text is sent as the user message after a fixed system
//! instruction asking for a JSON object with the [`DocumentAnalysis`]
//! fields. The model's reply is parsed with [`parse_analysis_content`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, ConfigError};
use crate::error::AnalysisError;
use crate::fallback::manual_extraction;
use crate::types::{AnalysisOutcome, AnalysisSource, DocumentAnalysis};

const SYSTEM_INSTRUCTION: &str = "You are an assistant that reviews Australian business \
regulatory documents. Respond with a single JSON object and nothing else, using exactly these \
keys: \"summary\" (two or three plain sentences), \"requirements\" (array of obligations the \
business must meet), \"documentType\" (short label such as \"Permit\" or \"Lease Agreement\"), \
\"riskLevel\" (one of \"low\", \"medium\", \"high\"), and \"actionItems\" (array of concrete \
next steps).";

/// Longest slice of a non-JSON error body echoed into an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

// -- Wire types ---------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// -- Client -------------------------------------------------------------------

/// Client for the document analysis service.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    max_document_chars: usize,
}

impl AnalysisClient {
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        let mut auth = reqwest::header::HeaderValue::from_str(&format!(
            "Bearer {}",
            config.api_key.expose()
        ))
        .map_err(|_| ConfigError::MissingApiKey)?;
        auth.set_sensitive(true);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(reqwest::header::AUTHORIZATION, auth);
                headers
            })
            .build()
            .map_err(AnalysisError::Network)?;

        Ok(Self {
            http,
            endpoint: config.completions_url(),
            model: config.model,
            max_document_chars: config.max_document_chars,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Analyze one document.
    ///
    /// Calls `POST {base_url}/chat/completions`. Text beyond
    /// `max_document_chars` is dropped before sending.
    pub async fn analyze(&self, text: &str) -> Result<DocumentAnalysis, AnalysisError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalysisError::UnsupportedInput(
                "document contains no text".to_string(),
            ));
        }
        let document = truncate_chars(text, self.max_document_chars);
        if document.len() < text.len() {
            tracing::debug!(
                limit = self.max_document_chars,
                "document truncated before analysis"
            );
        }

        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: document,
                },
            ],
            temperature: 0.0,
        };

        tracing::info!(
            model = %self.model,
            chars = document.chars().count(),
            "requesting document analysis"
        );
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(AnalysisError::Network)?;

        let status = resp.status();
        let body = resp.text().await.map_err(AnalysisError::Network)?;

        if !status.is_success() {
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message: error_message(&body, status),
            });
        }

        let envelope: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| AnalysisError::MalformedResponse(format!("response envelope: {e}")))?;
        let content = envelope
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                AnalysisError::MalformedResponse("response has no message content".to_string())
            })?;

        parse_analysis_content(&content)
    }
}

/// Analyze `text`, substituting [`manual_extraction`] when the service
/// response is malformed. Network, API and input errors are returned as-is.
pub async fn analyze_or_fallback(
    client: &AnalysisClient,
    text: &str,
) -> Result<AnalysisOutcome, AnalysisError> {
    match client.analyze(text).await {
        Ok(analysis) => Ok(AnalysisOutcome::new(analysis, AnalysisSource::Service)),
        Err(AnalysisError::MalformedResponse(reason)) => {
            tracing::warn!(%reason, "analysis response malformed; using manual extraction");
            Ok(AnalysisOutcome::new(
                manual_extraction(text),
                AnalysisSource::ManualFallback,
            ))
        }
        Err(e) => Err(e),
    }
}

/// Parse the model's reply into a [`DocumentAnalysis`].
///
/// Accepts a bare JSON object, one wrapped in a markdown code fence, or one
/// embedded in surrounding prose.
pub fn parse_analysis_content(content: &str) -> Result<DocumentAnalysis, AnalysisError> {
    let candidate = strip_code_fence(content.trim());
    match serde_json::from_str(candidate) {
        Ok(analysis) => Ok(analysis),
        Err(first) => {
            let embedded = match (candidate.find('{'), candidate.rfind('}')) {
                (Some(start), Some(end)) if start < end => &candidate[start..=end],
                _ => {
                    return Err(AnalysisError::MalformedResponse(format!(
                        "analysis content: {first}"
                    )))
                }
            };
            serde_json::from_str(embedded)
                .map_err(|e| AnalysisError::MalformedResponse(format!("analysis content: {e}")))
        }
    }
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    // Drop the info string ("json") on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        truncate_chars(trimmed, MAX_ERROR_BODY_CHARS).to_string()
    }
}

/// The longest prefix of `s` holding at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskLevel;

    const ANALYSIS_JSON: &str = r#"{"summary":"Permit terms.","requirements":["Display permit"],"documentType":"Permit","riskLevel":"Low","actionItems":["Print it"]}"#;

    #[test]
    fn parses_bare_json() {
        let a = parse_analysis_content(ANALYSIS_JSON).unwrap();
        assert_eq!(a.document_type, "Permit");
        assert_eq!(a.risk_level, RiskLevel::Low);
    }

    #[test]
    fn parses_fenced_json() {
        let fenced = format!("```json\n{ANALYSIS_JSON}\n```");
        assert_eq!(
            parse_analysis_content(&fenced).unwrap(),
            parse_analysis_content(ANALYSIS_JSON).unwrap()
        );
        let bare_fence = format!("```\n{ANALYSIS_JSON}\n```\n");
        assert!(parse_analysis_content(&bare_fence).is_ok());
    }

    #[test]
    fn parses_json_inside_prose() {
        let chatty = format!("Here is the analysis:\n{ANALYSIS_JSON}\nLet me know!");
        assert!(parse_analysis_content(&chatty).is_ok());
    }

    #[test]
    fn rejects_non_json_and_missing_fields() {
        assert!(matches!(
            parse_analysis_content("I cannot help with that."),
            Err(AnalysisError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_analysis_content(r#"{"summary":"only"}"#),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("café au lait", 4), "café");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn error_message_prefers_structured_body() {
        let status = reqwest::StatusCode::UNAUTHORIZED;
        assert_eq!(
            error_message(r#"{"error":{"message":"Invalid API key","type":"auth"}}"#, status),
            "Invalid API key"
        );
        assert_eq!(error_message("", status), "Unauthorized");
        assert_eq!(error_message("gateway down", status), "gateway down");
    }
}
