//! # Search
//!
//! - `GET /v1/search?q=<query>`: evaluate one query through the pipeline.
//!
//! A missing `q` is treated as a blank query and answers with the empty
//! result, not an error.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use rtn_query::QueryResult;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/search", get(search))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<QueryResult> {
    let query = params.q.unwrap_or_default();
    Json(state.engine.evaluate(&query))
}
