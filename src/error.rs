//! Error types.
//!
//! - `FitError`: typed failures of the interpolation engine (library callers match on these)
//! - `AppError`: message + process exit code, used by ingest/export and the binary

use thiserror::Error;

/// Failures detected while building or querying a `PolynomialFitter`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("At least 2 samples are required to fit a polynomial (found {found}).")]
    InsufficientData { found: usize },

    #[error("Degenerate sample: points {index} and {other} cannot be separated in x (x = {x}).")]
    DegenerateSample { index: usize, other: usize, x: f64 },

    #[error("Too many samples for the combinatorial expansion: {found} (max {max}).")]
    CapacityExceeded { found: usize, max: usize },

    #[error("Coordinate sequences differ in length: {xs} x-values vs {ys} y-values.")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("Sample {index} has a non-finite coordinate.")]
    NonFinite { index: usize },

    #[error("Step count must be positive and below usize::MAX.")]
    InvalidSteps,
}

impl FitError {
    /// Process exit code used when this error reaches the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            FitError::InsufficientData { .. } => 3,
            FitError::LengthMismatch { .. } | FitError::InvalidSteps => 2,
            FitError::DegenerateSample { .. }
            | FitError::CapacityExceeded { .. }
            | FitError::NonFinite { .. } => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}
