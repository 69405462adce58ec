//! # rtn CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rtn_cli::analyze::{run_analyze, AnalyzeArgs};
use rtn_cli::catalogue::{run_regulations, run_scenarios, ListArgs, RegulationsArgs};
use rtn_cli::dataset::{run_dataset, DatasetArgs};
use rtn_cli::load_dataset;
use rtn_cli::search::{run_search, SearchArgs};

/// Red Tape Navigator
///
/// Find the local, state and federal requirements that apply to an
/// Australian business, and analyze regulatory documents.
#[derive(Parser, Debug)]
#[command(name = "rtn", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON or YAML dataset to use instead of the built-in catalogue.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search regulations, requirements and conflicts.
    Search(SearchArgs),

    /// List scenarios.
    Scenarios(ListArgs),

    /// List regulations.
    Regulations(RegulationsArgs),

    /// Validate, export, or digest datasets.
    Dataset(DatasetArgs),

    /// Analyze a regulatory document.
    Analyze(AnalyzeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let dataset = || load_dataset(cli.dataset.as_deref());

    match cli.command {
        Commands::Search(args) => run_search(&args, dataset()?),
        Commands::Scenarios(args) => run_scenarios(&args, &dataset()?),
        Commands::Regulations(args) => run_regulations(&args, &dataset()?),
        Commands::Dataset(args) => run_dataset(&args, &dataset()?),
        Commands::Analyze(args) => run_analyze(&args),
    }
}
