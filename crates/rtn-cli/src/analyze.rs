//! # Analyze CLI — summarize a regulatory document.
//!
//! ```bash
//! rtn analyze lease.pdf --markdown
//! RTN_ANALYSIS_API_KEY=... rtn analyze permit.txt --model gpt-4o
//! rtn analyze notice.txt --offline
//! ```
//!
//! Text is pulled from the file through the default extractor chain. The
//! service is configured from `RTN_ANALYSIS_*` variables, with flags taking
//! precedence. `--offline` skips the service and runs manual extraction.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use rtn_analysis::{
    analyze_or_fallback, manual_extraction, to_markdown, AnalysisClient, AnalysisConfig,
    AnalysisOutcome, AnalysisSource, ExtractorChain,
};

/// Analyze subcommand arguments.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Document to analyze (text, PDF, or other).
    pub file: PathBuf,

    /// Print markdown instead of JSON.
    #[arg(long)]
    pub markdown: bool,

    /// Skip the analysis service and use manual extraction.
    #[arg(long)]
    pub offline: bool,

    /// API key; overrides RTN_ANALYSIS_API_KEY.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model name; overrides RTN_ANALYSIS_MODEL.
    #[arg(long)]
    pub model: Option<String>,

    /// API root; overrides RTN_ANALYSIS_BASE_URL.
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Execute the analyze subcommand.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<u8> {
    let text = read_document(&args.file)?;

    let outcome = if args.offline {
        AnalysisOutcome::new(manual_extraction(&text), AnalysisSource::ManualFallback)
    } else {
        let client = AnalysisClient::new(resolve_config(args)?)
            .context("failed to build analysis client")?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        runtime
            .block_on(analyze_or_fallback(&client, &text))
            .with_context(|| format!("analysis of {} failed", args.file.display()))?
    };

    if outcome.source == AnalysisSource::ManualFallback && !args.offline {
        tracing::warn!("service response was unusable; showing manual extraction");
    }

    if args.markdown {
        print!("{}", to_markdown(&outcome.analysis));
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("failed to encode analysis")?
        );
    }
    Ok(0)
}

/// Read `path` and extract its text.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let extracted = ExtractorChain::default()
        .extract(&bytes)
        .with_context(|| format!("no text could be extracted from {}", path.display()))?;
    if extracted.partial {
        tracing::warn!(
            strategy = extracted.strategy,
            "only part of the document text could be extracted"
        );
    } else {
        tracing::info!(strategy = extracted.strategy, "document text extracted");
    }
    Ok(extracted.text)
}

/// Environment configuration with command-line overrides applied.
fn resolve_config(args: &AnalyzeArgs) -> Result<AnalysisConfig> {
    let mut config = match &args.api_key {
        Some(key) => AnalysisConfig::new(key.as_str())?,
        None => AnalysisConfig::from_env()
            .context("set RTN_ANALYSIS_API_KEY or pass --api-key (or use --offline)")?,
    };
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url)?;
    }
    if let Some(model) = &args.model {
        config = config.with_model(model.as_str());
    }
    Ok(config)
}
