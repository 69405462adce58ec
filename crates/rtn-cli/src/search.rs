//! # Search CLI — evaluate a query from the command line.
//!
//! ```bash
//! rtn search cafe sydney
//! rtn search "canberra cybersecurity" --json
//! ```
//!
//! Query words are joined with single spaces before evaluation.

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use rtn_pack::Dataset;
use rtn_query::{LocationKind, QueryEngine, QueryResult};

/// Search subcommand arguments.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query words, e.g. `cafe sydney`.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Print the full result as JSON instead of a text report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the search subcommand.
pub fn run_search(args: &SearchArgs, dataset: Dataset) -> Result<u8> {
    let engine = QueryEngine::new(Arc::new(dataset));
    let result = engine.evaluate(&args.query.join(" "));

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("failed to encode result")?;
        println!("{json}");
    } else {
        print!("{}", render_report(&result));
    }
    Ok(0)
}

/// Human-readable report of one query result.
pub fn render_report(result: &QueryResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, result: &QueryResult) -> std::fmt::Result {
    writeln!(out, "Query:       {}", result.query.trim())?;
    if result.is_empty() {
        writeln!(out)?;
        writeln!(out, "No matching regulations found.")?;
        return Ok(());
    }

    writeln!(out, "Search term: {}", result.search_term)?;
    if let Some(location) = &result.location_context {
        let kind = match location.kind {
            LocationKind::StateCode => "state code",
            LocationKind::StateName => "state name",
            LocationKind::CapitalCity => "capital city",
        };
        writeln!(
            out,
            "Location:    {} ({}, {kind})",
            location.state_code.name(),
            location.state_code.code()
        )?;
    }

    if !result.regulations.is_empty() {
        writeln!(out)?;
        writeln!(out, "Regulations ({})", result.regulations.len())?;
        for r in &result.regulations {
            writeln!(
                out,
                "  - {} [{}] complexity {}, {}, {}",
                r.title,
                r.jurisdiction.as_str(),
                r.complexity.as_str(),
                r.cost,
                r.timeframe
            )?;
        }
    }

    if !result.requirements.is_empty() {
        let tally = &result.jurisdiction_tally;
        writeln!(out)?;
        writeln!(
            out,
            "Requirements ({}): local {}, state {}, federal {}",
            result.requirements.len(),
            tally.local,
            tally.state,
            tally.federal
        )?;
        for r in &result.requirements {
            writeln!(
                out,
                "  - [{}] {} ({}) {}%",
                r.jurisdiction.as_str(),
                r.title,
                r.regulator,
                r.progress.value()
            )?;
        }
    }

    if !result.conflicts.is_empty() {
        writeln!(out)?;
        writeln!(out, "Conflicts ({})", result.conflicts.len())?;
        for c in &result.conflicts {
            writeln!(
                out,
                "  - [{}] {} ({})",
                c.severity.as_str(),
                c.title,
                c.jurisdictions.join(" / ")
            )?;
        }
    }

    if !result.steps.is_empty() {
        writeln!(out)?;
        writeln!(out, "Roadmap")?;
        for s in &result.steps {
            writeln!(
                out,
                "  {}. {} ({}) [{}]",
                s.step,
                s.title,
                s.timeframe,
                s.status.as_str()
            )?;
        }
    }
    Ok(())
}
