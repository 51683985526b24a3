//! Packplan Core - domain types for pack-combination solving
//!
//! This crate provides the shared vocabulary of the packplan workspace:
//! - [`PackSize`] and [`Distribution`] for describing shipments
//! - [`PackPlanError`] for the solver's failure modes

pub mod domain;
pub mod error;


pub use domain::{Distribution, PackSize};
pub use error::{PackPlanError, Result};
