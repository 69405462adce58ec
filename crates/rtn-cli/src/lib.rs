//! # rtn-cli — CLI Tool for Red Tape Navigator
//!
//! Provides the `rtn` command-line interface over the same dataset, query
//! pipeline and analysis client the API serves.
//!
//! ## Subcommands
//!
//! - `rtn search`: evaluate a query; text report or JSON.
//! - `rtn scenarios`, `rtn regulations`: list the catalogue.
//! - `rtn dataset`: validate, export, or digest a dataset.
//! - `rtn analyze`: analyze a document file.
//!
//! ```bash
//! rtn search cafe sydney
//! rtn --dataset data/au.yaml search builder --json
//! rtn dataset validate data/au.yaml
//! rtn analyze lease.pdf --markdown
//! ```
//!
//! Every subcommand handler returns `anyhow::Result<u8>`; the `u8` is the
//! process exit code.

pub mod analyze;
pub mod catalogue;
pub mod dataset;
pub mod search;

use std::path::Path;

use anyhow::{Context, Result};

use rtn_pack::Dataset;

/// Load the dataset named by `--dataset`, or the built-in catalogue.
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let dataset = match path {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?,
        None => Dataset::builtin().context("built-in dataset is invalid")?,
    };
    tracing::debug!(
        regulations = dataset.regulations.len(),
        scenarios = dataset.scenarios.len(),
        "dataset ready"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_builtin_without_path() {
        let dataset = load_dataset(None).unwrap();
        assert_eq!(dataset.scenarios.len(), 5);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = load_dataset(Some(Path::new("/nonexistent/rtn.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/rtn.yaml"));
    }
}
