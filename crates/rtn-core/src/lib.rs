//! # rtn-core — Foundational Types for Red Tape Navigator
//!
//! Defines the immutable reference records the navigator searches over
//! (regulations, requirements, conflicts, compliance steps, scenarios) and
//! the closed tag sets they carry. Every other crate in the workspace
//! depends on `rtn-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed tag sets are enums.** Jurisdiction, severity, status and
//!    complexity tags deserialize into enums, so an unknown tag is rejected
//!    at the data-loading boundary instead of flowing through as a string.
//!
//! 2. **Requirements never carry `multi`.** A requirement's jurisdiction is a
//!    [`JurisdictionLevel`] (local/state/federal), which makes the per-bucket
//!    tally a total function.
//!
//! 3. **Validated newtypes.** [`Progress`] is bounded to `0..=100`;
//!    [`RegulationId`] and [`ScenarioId`] are lowercase slugs.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rtn-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod jurisdiction;
pub mod records;
pub mod scenario;

pub use error::RtnError;
pub use identity::{RegulationId, ScenarioId};
pub use jurisdiction::{AustralianState, JurisdictionLevel, JurisdictionTag};
pub use records::{
    ComplianceStep, Complexity, Conflict, Progress, Regulation, Requirement, Severity, StepStatus,
};
pub use scenario::{Scenario, ScenarioSummary};
