//! # rtn-api — Axum API Services for Red Tape Navigator
//!
//! HTTP surface for the presentation layer. Route handlers hold no business
//! logic: search delegates to [`rtn_query::QueryEngine`], catalogue views
//! read the shared [`rtn_pack::Dataset`], and document analysis delegates to
//! [`rtn_analysis`].
//!
//! ## API Surface
//!
//! | Prefix                    | Module                   | Domain             |
//! |---------------------------|--------------------------|--------------------|
//! | `/v1/search`              | [`routes::search`]       | Query pipeline     |
//! | `/v1/regulations/*`       | [`routes::catalogue`]    | Regulations        |
//! | `/v1/scenarios/*`         | [`routes::catalogue`]    | Scenarios          |
//! | `/v1/documents/analyze`   | [`routes::documents`]    | Document analysis  |
//! | `/health/*`               | this module              | Probes             |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer (optional) → DefaultBodyLimit → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Request body limit for every route.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Assemble the application router with permissive CORS disabled.
pub fn app(state: AppState) -> Router {
    app_with_cors(state, false)
}

/// Assemble the application router, optionally allowing any origin.
pub fn app_with_cors(state: AppState, cors_permissive: bool) -> Router {
    let mut router = Router::new()
        .merge(routes::search::router())
        .merge(routes::catalogue::router())
        .merge(routes::documents::router())
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    if cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Readiness probe body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    pub status: String,
    pub dataset_digest: String,
    pub regulations: usize,
    pub scenarios: usize,
    pub requirements: usize,
    pub analysis_configured: bool,
}

/// Liveness probe. Always 200 while the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. Reports the dataset identity and whether document
/// analysis is available; 503 if the dataset cannot be digested.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let dataset_digest = match state.dataset.digest() {
        Ok(digest) => digest,
        Err(e) => {
            tracing::warn!(error = %e, "dataset digest failed");
            return (StatusCode::SERVICE_UNAVAILABLE, "dataset unavailable").into_response();
        }
    };

    Json(Readiness {
        status: "ready".to_string(),
        dataset_digest,
        regulations: state.dataset.regulations.len(),
        scenarios: state.dataset.scenarios.len(),
        requirements: state.dataset.requirement_count(),
        analysis_configured: state.analysis.is_some(),
    })
    .into_response()
}
