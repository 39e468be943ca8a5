//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the observation type (`Sample`)
//! - dataset stats (`DatasetStats`)
//! - run configuration (`FitConfig`) and the exported record (`FitSummary`)

pub mod types;

pub use types::*;
