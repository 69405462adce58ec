//! # Route Modules
//!
//! Each module defines an Axum router for one API surface area. Routers are
//! merged in [`crate::app`].

pub mod catalogue;
pub mod documents;
pub mod search;
