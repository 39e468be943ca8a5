//! Polynomial fitting.
//!
//! Responsibilities:
//!
//! - derive the interpolating polynomial's coefficients from the samples
//! - answer integral / quadrature queries
//! - produce the lazy estimate grid used for plotting and export

pub mod estimate;
pub mod fitter;

pub use estimate::*;
pub use fitter::*;
