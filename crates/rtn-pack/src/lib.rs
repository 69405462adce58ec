//! # rtn-pack — Reference Dataset
//!
//! Owns the immutable reference data the query pipeline searches:
//!
//! - **Built-in catalogue** (`builtin/`): Australian regulations and worked
//!   scenarios, one module per jurisdiction.
//! - **Loading** (`dataset.rs`): JSON or YAML dataset files, deserialized
//!   into the typed records of `rtn-core`.
//! - **Validation** (`validation.rs`): structural checks applied at the
//!   loading boundary. Invalid datasets never reach the pipeline.
//!
//! ## Crate Policy
//!
//! - Depends only on `rtn-core` internally.
//! - A [`Dataset`] is read-only once constructed; share it behind `Arc`.

pub mod builtin;
pub mod dataset;
pub mod error;
pub mod validation;

pub use dataset::Dataset;
pub use error::{PackError, PackResult};
pub use validation::{validate_dataset, DatasetValidation};
