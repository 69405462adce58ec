//! # rtn-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Configuration comes from the environment:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `RTN_PORT` | Port to bind (default 8080) |
//! | `RTN_DATASET` | JSON/YAML dataset replacing the built-in catalogue |
//! | `RTN_CORS_PERMISSIVE` | `true` to allow any origin |
//! | `RTN_ANALYSIS_API_KEY` etc. | Document analysis client (optional) |
//! | `RTN_LOG_FORMAT` | `json` for JSON log lines |
//! | `RUST_LOG` | Log filter (default `info`) |

use anyhow::Context;

use rtn_analysis::{AnalysisClient, AnalysisConfig};
use rtn_api::{AppConfig, AppState};
use rtn_pack::Dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env().context("invalid server configuration")?;

    let dataset = match &config.dataset_path {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?,
        None => Dataset::builtin().context("built-in dataset is invalid")?,
    };

    let analysis = match AnalysisConfig::from_env() {
        Ok(analysis_config) => {
            tracing::info!(model = %analysis_config.model, "document analysis configured");
            Some(AnalysisClient::new(analysis_config).context("failed to build analysis client")?)
        }
        Err(e) => {
            tracing::warn!(
                "document analysis not configured: {e}. /v1/documents/analyze will return 503."
            );
            None
        }
    };

    let state = AppState::new(dataset, analysis);
    let app = rtn_api::app_with_cors(state, config.cors_permissive);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Red Tape Navigator API listening on {addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let json = std::env::var("RTN_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
