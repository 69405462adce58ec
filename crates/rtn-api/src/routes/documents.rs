//! # Document Analysis
//!
//! - `POST /v1/documents/analyze`: analyze plain document text.
//!
//! | Outcome | Status |
//! |---------|--------|
//! | analysis parsed, or manual fallback after a malformed response | 200 |
//! | blank or unusable text | 422 |
//! | analysis service failed (network or API error) | 502 |
//! | no analysis client configured | 503 |

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rtn_analysis::{analyze_or_fallback, to_markdown, AnalysisSource, DocumentAnalysis};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl Validate for AnalyzeRequest {
    fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("text must not be blank".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: DocumentAnalysis,
    pub source: AnalysisSource,
    pub analyzed_at: DateTime<Utc>,
    /// The analysis rendered as markdown.
    pub markdown: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/documents/analyze", post(analyze))
}

async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let request = extract_validated_json(body)?;
    let client = state.analysis.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("document analysis is not configured".to_string())
    })?;

    let outcome = analyze_or_fallback(client, &request.text).await?;
    Ok(Json(AnalyzeResponse {
        markdown: to_markdown(&outcome.analysis),
        analysis: outcome.analysis,
        source: outcome.source,
        analyzed_at: outcome.analyzed_at,
    }))
}
