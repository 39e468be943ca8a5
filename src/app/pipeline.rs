//! Shared "fit pipeline" logic used by the `fit` and `plot` commands.
//!
//! ingest -> fit -> integrals -> optional exports
//!
//! The commands then focus on presentation.

use tracing::info;

use crate::domain::FitConfig;
use crate::error::AppError;
use crate::fit::PolynomialFitter;
use crate::io::ingest::{IngestedData, load_samples};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub fitter: PolynomialFitter,
    pub integral: f64,
    pub quadrature: f64,
    pub steps: usize,
}

/// Load the input file and fit it.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let ingest = load_samples(&config.input)?;
    run_fit_with_ingest(config, ingest)
}

/// Fit already-ingested samples and write the configured exports.
pub fn run_fit_with_ingest(config: &FitConfig, ingest: IngestedData) -> Result<RunOutput, AppError> {
    let fitter = PolynomialFitter::new(&ingest.samples)?;
    let integral = fitter.integral();
    let quadrature = fitter.quadrature();
    let steps = config.resolved_steps(ingest.samples.len());

    info!(
        n = ingest.rows_used,
        degree = fitter.degree(),
        integral,
        quadrature,
        "fit complete"
    );

    if let Some(path) = &config.export_estimates {
        let rows = crate::io::export::write_estimates_csv(path, fitter.sample(steps)?)?;
        info!(rows, path = %path.display(), "wrote estimates");
    }
    if let Some(path) = &config.export_summary {
        let summary = crate::io::summary::build_summary(&fitter, Some(config.input.clone()), steps)?;
        crate::io::summary::write_summary_json(path, &summary)?;
        info!(path = %path.display(), "wrote summary");
    }

    Ok(RunOutput {
        ingest,
        fitter,
        integral,
        quadrature,
        steps,
    })
}
