//! # Application State
//!
//! Shared state for the Axum application: the immutable dataset, the query
//! engine built over it, and the optional document analysis client.
//! Everything is behind `Arc`, so cloning the state per request is cheap
//! and no handler takes a lock.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use rtn_analysis::AnalysisClient;
use rtn_pack::Dataset;
use rtn_query::QueryEngine;

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 8080;

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub engine: Arc<QueryEngine>,
    /// `None` when no analysis API key is configured; the analyze endpoint
    /// then answers 503.
    pub analysis: Option<Arc<AnalysisClient>>,
}

impl AppState {
    pub fn new(dataset: Dataset, analysis: Option<AnalysisClient>) -> Self {
        let dataset = Arc::new(dataset);
        Self {
            engine: Arc::new(QueryEngine::new(Arc::clone(&dataset))),
            dataset,
            analysis: analysis.map(Arc::new),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Dataset file replacing the built-in catalogue.
    pub dataset_path: Option<PathBuf>,
    /// Allow any origin. Intended for local development against a separate
    /// front-end dev server.
    pub cors_permissive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dataset_path: None,
            cors_permissive: false,
        }
    }
}

/// Error reading [`AppConfig`] from the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppConfigError {
    #[error("{var} is not a valid port: {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be \"true\" or \"false\", got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

impl AppConfig {
    /// Read `RTN_PORT`, `RTN_DATASET` and `RTN_CORS_PERMISSIVE`.
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Unset and blank variables
    /// take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let port = match get("RTN_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| AppConfigError::InvalidPort {
                    var: "RTN_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let cors_permissive = match get("RTN_CORS_PERMISSIVE") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(AppConfigError::InvalidFlag {
                        var: "RTN_CORS_PERMISSIVE",
                        value,
                    })
                }
            },
            None => false,
        };

        Ok(Self {
            port,
            dataset_path: get("RTN_DATASET").map(PathBuf::from),
            cors_permissive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, AppConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]).unwrap(), AppConfig::default());
        assert_eq!(config(&[("RTN_PORT", "  ")]).unwrap().port, DEFAULT_PORT);
    }

    #[test]
    fn reads_all_variables() {
        let c = config(&[
            ("RTN_PORT", "9090"),
            ("RTN_DATASET", "/srv/rtn/dataset.yaml"),
            ("RTN_CORS_PERMISSIVE", "TRUE"),
        ])
        .unwrap();
        assert_eq!(c.port, 9090);
        assert_eq!(c.dataset_path, Some(PathBuf::from("/srv/rtn/dataset.yaml")));
        assert!(c.cors_permissive);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[("RTN_PORT", "eighty")]),
            Err(AppConfigError::InvalidPort { .. })
        ));
        assert!(matches!(
            config(&[("RTN_PORT", "70000")]),
            Err(AppConfigError::InvalidPort { .. })
        ));
        assert!(matches!(
            config(&[("RTN_CORS_PERMISSIVE", "yes")]),
            Err(AppConfigError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn state_shares_one_dataset() {
        let state = AppState::new(Dataset::builtin().unwrap(), None);
        assert!(Arc::ptr_eq(&state.dataset, state.engine.dataset()));
        assert!(state.analysis.is_none());
    }
}
