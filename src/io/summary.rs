//! Read/write fit summary JSON files.
//!
//! A summary is the "portable" record of one run:
//! - the samples and the derived coefficients
//! - analytic integral vs trapezoid quadrature
//! - a precomputed estimate grid for quick plotting
//!
//! The schema is defined by `domain::FitSummary`.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::FitSummary;
use crate::error::AppError;
use crate::fit::PolynomialFitter;

/// Assemble the summary for a fitted polynomial.
pub fn build_summary(
    fitter: &PolynomialFitter,
    input: Option<PathBuf>,
    steps: usize,
) -> Result<FitSummary, AppError> {
    let integral = fitter.integral();
    let quadrature = fitter.quadrature();

    Ok(FitSummary {
        tool: "lti".to_string(),
        generated: Local::now().to_rfc3339(),
        input,
        samples: fitter.samples().to_vec(),
        coefficients: fitter.coefficients().to_vec(),
        lower: fitter.lower(),
        upper: fitter.upper(),
        integral,
        quadrature,
        difference: integral - quadrature,
        estimates: fitter.sample(steps)?.collect(),
    })
}

/// Write a summary JSON file.
pub fn write_summary_json(path: &Path, summary: &FitSummary) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create summary JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, summary)
        .map_err(|e| AppError::new(2, format!("Failed to write summary JSON: {e}")))?;

    Ok(())
}

/// Read a summary JSON file.
pub fn read_summary_json(path: &Path) -> Result<FitSummary, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open summary JSON '{}': {e}", path.display())))?;
    let summary: FitSummary =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid summary JSON: {e}")))?;
    Ok(summary)
}
