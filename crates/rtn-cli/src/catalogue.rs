//! # Catalogue listings — `rtn scenarios` and `rtn regulations`.

use anyhow::{Context, Result};
use clap::Args;

use rtn_core::JurisdictionTag;
use rtn_pack::Dataset;

/// Shared listing arguments.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `rtn regulations`.
#[derive(Args, Debug)]
pub struct RegulationsArgs {
    /// Only regulations with this jurisdiction tag.
    #[arg(long, value_parser = parse_jurisdiction)]
    pub jurisdiction: Option<JurisdictionTag>,

    #[command(flatten)]
    pub list: ListArgs,
}

fn parse_jurisdiction(s: &str) -> Result<JurisdictionTag, String> {
    match s.to_ascii_lowercase().as_str() {
        "local" => Ok(JurisdictionTag::Local),
        "state" => Ok(JurisdictionTag::State),
        "federal" => Ok(JurisdictionTag::Federal),
        "multi" => Ok(JurisdictionTag::Multi),
        other => Err(format!(
            "unknown jurisdiction '{other}' (expected local, state, federal or multi)"
        )),
    }
}

pub fn run_scenarios(args: &ListArgs, dataset: &Dataset) -> Result<u8> {
    let summaries = dataset.summaries();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summaries).context("failed to encode scenarios")?
        );
        return Ok(0);
    }

    for s in &summaries {
        println!(
            "  {:<24} {:<4} {:<40} {} requirements, {} conflicts",
            s.id.as_str(),
            s.state.code(),
            s.title,
            s.requirement_count,
            s.conflict_count
        );
    }
    println!();
    println!("Total: {} scenarios", summaries.len());
    Ok(0)
}

pub fn run_regulations(args: &RegulationsArgs, dataset: &Dataset) -> Result<u8> {
    let regulations: Vec<_> = dataset
        .regulations
        .iter()
        .filter(|r| args.jurisdiction.map_or(true, |j| r.jurisdiction == j))
        .collect();

    if args.list.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&regulations).context("failed to encode regulations")?
        );
        return Ok(0);
    }

    for r in &regulations {
        println!(
            "  {:<32} {:<8} {:<6} {}",
            r.id.as_str(),
            r.jurisdiction.as_str(),
            r.complexity.as_str(),
            r.title
        );
    }
    println!();
    println!("Total: {} regulations", regulations.len());
    Ok(0)
}
