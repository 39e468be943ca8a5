//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One observation: coupling parameter `x` (λ) and the sampled value `y` (dG/dλ).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Summary stats about the samples actually used for fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DatasetStats {
    /// Compute stats over finite samples. Returns `None` when nothing is left.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut n_points = 0usize;

        for s in samples.iter().filter(|s| s.x.is_finite() && s.y.is_finite()) {
            x_min = x_min.min(s.x);
            x_max = x_max.max(s.x);
            y_min = y_min.min(s.y);
            y_max = y_max.max(s.y);
            n_points += 1;
        }

        if n_points == 0 {
            return None;
        }
        Some(Self {
            n_points,
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

/// Fully resolved run configuration.
///
/// This is derived from CLI flags (plus defaults and environment).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub input: PathBuf,
    /// Estimate grid size; `None` means "sample count - 1" (one step per interval).
    pub steps: Option<usize>,
    pub export_estimates: Option<PathBuf>,
    pub export_summary: Option<PathBuf>,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}

impl FitConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            steps: None,
            export_estimates: None,
            export_summary: None,
            plot: false,
            plot_width: 72,
            plot_height: 20,
        }
    }

    /// Resolve the estimate step count for a data set of `n_samples` points.
    pub fn resolved_steps(&self, n_samples: usize) -> usize {
        self.steps.unwrap_or(n_samples.saturating_sub(1)).max(1)
    }
}

/// Portable record of one fit (written with `--summary`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitSummary {
    pub tool: String,
    pub generated: String,
    pub input: Option<PathBuf>,
    pub samples: Vec<Sample>,
    pub coefficients: Vec<f64>,
    pub lower: f64,
    pub upper: f64,
    pub integral: f64,
    pub quadrature: f64,
    pub difference: f64,
    pub estimates: Vec<Sample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_skip_non_finite_samples() {
        let samples = [
            Sample::new(0.0, 3.0),
            Sample::new(f64::NAN, 1.0),
            Sample::new(1.0, -2.0),
        ];
        let stats = DatasetStats::from_samples(&samples).unwrap();
        assert_eq!(stats.n_points, 2);
        assert_eq!(stats.x_min, 0.0);
        assert_eq!(stats.x_max, 1.0);
        assert_eq!(stats.y_min, -2.0);
        assert_eq!(stats.y_max, 3.0);
    }

    #[test]
    fn default_steps_follow_interval_count() {
        let mut config = FitConfig::new("in.dat");
        assert_eq!(config.resolved_steps(11), 10);
        assert_eq!(config.resolved_steps(1), 1);
        config.steps = Some(100);
        assert_eq!(config.resolved_steps(11), 100);
    }
}
