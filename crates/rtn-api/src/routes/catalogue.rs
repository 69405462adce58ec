//! # Catalogue Browsing
//!
//! Read-only views of the loaded dataset.
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/v1/regulations?jurisdiction=` | `Vec<Regulation>` |
//! | GET | `/v1/regulations/{id}` | `Regulation` or 404 |
//! | GET | `/v1/scenarios` | `Vec<ScenarioSummary>` |
//! | GET | `/v1/scenarios/{id}` | `Scenario` or 404 |

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use rtn_core::{JurisdictionTag, Regulation, Scenario, ScenarioSummary};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RegulationFilter {
    /// Only regulations tagged with this jurisdiction.
    pub jurisdiction: Option<JurisdictionTag>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/regulations", get(list_regulations))
        .route("/v1/regulations/{id}", get(get_regulation))
        .route("/v1/scenarios", get(list_scenarios))
        .route("/v1/scenarios/{id}", get(get_scenario))
}

async fn list_regulations(
    State(state): State<AppState>,
    filter: Result<Query<RegulationFilter>, QueryRejection>,
) -> Result<Json<Vec<Regulation>>, AppError> {
    let Query(filter) = filter.map_err(|e| AppError::Validation(e.body_text()))?;
    let regulations = state
        .dataset
        .regulations
        .iter()
        .filter(|r| filter.jurisdiction.map_or(true, |j| r.jurisdiction == j))
        .cloned()
        .collect();
    Ok(Json(regulations))
}

async fn get_regulation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Regulation>, AppError> {
    state
        .dataset
        .regulation(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("regulation {id}")))
}

async fn list_scenarios(State(state): State<AppState>) -> Json<Vec<ScenarioSummary>> {
    Json(state.dataset.summaries())
}

async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Scenario>, AppError> {
    state
        .dataset
        .scenario(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("scenario {id}")))
}
