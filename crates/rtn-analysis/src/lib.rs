//! # rtn-analysis — AI Document Analysis
//!
//! Summarizes regulatory documents through an OpenAI-compatible
//! chat-completions service and turns the answer into a typed
//! [`DocumentAnalysis`].
//!
//! ## Pieces
//!
//! - [`AnalysisConfig`]: explicit configuration passed to the client. There
//!   is no process-wide client or stored key.
//! - [`AnalysisClient`]: one request per document. Failures are terminal
//!   and never retried.
//! - [`ExtractorChain`]: turns uploaded bytes into text by trying each
//!   [`TextExtractor`] in a fixed order.
//! - [`manual_extraction`]: a deterministic keyword heuristic used when the
//!   service answers with something that is not a valid analysis.
//! - [`to_markdown`]: renders an analysis for display.
//!
//! ## Error categories
//!
//! | Variant | Cause |
//! |---------|-------|
//! | `Network` | transport failure, timeout |
//! | `Api` | non-2xx status from the service |
//! | `MalformedResponse` | unparsable envelope or analysis content |
//! | `UnsupportedInput` | no text could be extracted |

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod markdown;
pub mod types;

pub use client::{analyze_or_fallback, parse_analysis_content, AnalysisClient};
pub use config::{AnalysisConfig, ConfigError, SecretString};
pub use error::AnalysisError;
pub use extract::{ExtractedText, Extraction, ExtractorChain, TextExtractor};
pub use fallback::manual_extraction;
pub use markdown::to_markdown;
pub use types::{AnalysisOutcome, AnalysisSource, DocumentAnalysis, RiskLevel};
