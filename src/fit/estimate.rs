//! Estimate grid over the fitted polynomial.
//!
//! Used for plotting. The grid is `x = s / steps` for `s = 0..=steps`, i.e. it
//! covers λ ∈ [0, 1] regardless of where the samples lie.

use std::iter::FusedIterator;

use crate::domain::Sample;

/// `Σ c_k · x^k`, evaluated term by term.
pub fn power_sum(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(k, &c)| c * x.powi(k as i32))
        .sum()
}

/// Lazy `(x, p(x))` sequence of length `steps + 1`.
///
/// Cloning (or asking the fitter again) restarts the sequence.
#[derive(Debug, Clone)]
pub struct Estimates<'a> {
    coefficients: &'a [f64],
    steps: usize,
    next: usize,
}

impl<'a> Estimates<'a> {
    pub(crate) fn new(coefficients: &'a [f64], steps: usize) -> Self {
        debug_assert!(steps > 0 && steps < usize::MAX);
        Self {
            coefficients,
            steps,
            next: 0,
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Iterator for Estimates<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.next > self.steps {
            return None;
        }
        // Divide rather than accumulate so the last x is exactly 1.0.
        let x = self.next as f64 / self.steps as f64;
        self.next += 1;
        Some(Sample::new(x, power_sum(self.coefficients, x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps + 1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Estimates<'_> {}

impl FusedIterator for Estimates<'_> {}
