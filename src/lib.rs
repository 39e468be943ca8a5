//! `lagrange-ti` library crate.
//!
//! Fits the Lagrange interpolating polynomial through thermodynamic-integration
//! samples (λ, dG/dλ) and integrates it to estimate a free-energy difference.
//!
//! The binary (`lti`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the fitter can be embedded in other analysis tools
//!
//! ```
//! use lagrange_ti::domain::Sample;
//! use lagrange_ti::fit::PolynomialFitter;
//!
//! let fit = PolynomialFitter::new(&[
//!     Sample::new(0.0, 1.0),
//!     Sample::new(1.0, 2.0),
//!     Sample::new(2.0, 5.0),
//! ])?;
//! assert_eq!(fit.coefficients().len(), 3);
//! assert!((fit.integral() - 14.0 / 3.0).abs() < 1e-12);
//! # Ok::<(), lagrange_ti::error::FitError>(())
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
