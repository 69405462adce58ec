//! # Dataset CLI — validate, export, and digest datasets.
//!
//! ```bash
//! rtn dataset validate data/au.yaml
//! rtn dataset export --format yaml > au.yaml
//! rtn --dataset au.yaml dataset digest
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use rtn_pack::{validate_dataset, Dataset, PackError};

/// Dataset subcommand arguments.
#[derive(Args, Debug)]
pub struct DatasetArgs {
    #[command(subcommand)]
    pub command: DatasetCommand,
}

#[derive(Subcommand, Debug)]
pub enum DatasetCommand {
    /// Load a dataset file and report validation errors and warnings.
    Validate {
        /// JSON or YAML dataset file.
        path: PathBuf,
    },

    /// Print the active dataset.
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Print the SHA-256 digest of the active dataset.
    Digest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

/// Execute the dataset subcommand. `active` is the dataset selected by the
/// global `--dataset` flag, or the built-in catalogue.
pub fn run_dataset(args: &DatasetArgs, active: &Dataset) -> Result<u8> {
    match &args.command {
        DatasetCommand::Validate { path } => run_validate(path),
        DatasetCommand::Export { format } => {
            let text = match format {
                ExportFormat::Json => active.to_json_pretty(),
                ExportFormat::Yaml => active.to_yaml(),
            }
            .context("failed to encode dataset")?;
            println!("{}", text.trim_end());
            Ok(0)
        }
        DatasetCommand::Digest => {
            println!("{}", active.digest().context("failed to digest dataset")?);
            Ok(0)
        }
    }
}

fn run_validate(path: &Path) -> Result<u8> {
    match Dataset::load(path) {
        Ok(dataset) => {
            let report = validate_dataset(&dataset);
            for warning in &report.warnings {
                println!("  warning: {warning}");
            }
            println!(
                "{}: OK ({} regulations, {} scenarios, {} warnings)",
                path.display(),
                dataset.regulations.len(),
                dataset.scenarios.len(),
                report.warnings.len()
            );
            Ok(0)
        }
        Err(PackError::Invalid { errors }) => {
            for error in &errors {
                println!("  error: {error}");
            }
            println!("{}: INVALID ({} errors)", path.display(), errors.len());
            Ok(1)
        }
        Err(e) => Err(e).with_context(|| format!("failed to load {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn validate_accepts_exported_builtin() {
        let builtin = Dataset::builtin().unwrap();
        let file = write_temp(".json", &builtin.to_json_pretty().unwrap());
        assert_eq!(run_validate(file.path()).unwrap(), 0);
    }

    #[test]
    fn validate_reports_invalid_dataset_with_exit_code() {
        let mut builtin = Dataset::builtin().unwrap();
        let duplicate = builtin.regulations[0].clone();
        builtin.regulations.push(duplicate);
        let file = write_temp(".yaml", &builtin.to_yaml().unwrap());
        assert_eq!(run_validate(file.path()).unwrap(), 1);
    }

    #[test]
    fn validate_propagates_parse_errors() {
        let file = write_temp(".json", "{ not json");
        assert!(run_validate(file.path()).is_err());
    }
}
