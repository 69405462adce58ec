//! # rtn-query — The Query Pipeline
//!
//! Turns a free-text query into a [`QueryResult`] over an immutable
//! [`rtn_pack::Dataset`]:
//!
//! ```text
//! raw query ─▶ trim + lowercase ─▶ KeywordNormalizer ─▶ LocationDetector
//!           ─▶ SearchTerm ─▶ relevance filters ─▶ JurisdictionTally ─▶ QueryResult
//! ```
//!
//! Every stage is a pure function of its inputs. [`QueryEngine`] bundles
//! the configured stages with a shared dataset and is `Send + Sync`, so a
//! single engine can serve concurrent callers without locking.
//!
//! ## Blank queries
//!
//! An empty or whitespace-only query produces [`QueryResult::empty`]: no
//! regulations, requirements or conflicts, and a zero tally. Blank input
//! never means "show everything".

pub mod aggregate;
pub mod compose;
pub mod engine;
pub mod error;
pub mod filter;
pub mod location;
pub mod normalize;

pub use aggregate::JurisdictionTally;
pub use compose::QueryResult;
pub use engine::QueryEngine;
pub use error::QueryError;
pub use filter::{Matches, SearchTerm, Searchable, MAX_REQUIREMENT_RESULTS};
pub use location::{LocationContext, LocationDetector, LocationKind};
pub use normalize::{KeywordNormalizer, DEFAULT_SUBSTITUTIONS};
