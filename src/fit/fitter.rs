//! Lagrange interpolating polynomial in explicit monomial form.
//!
//! Given samples `(x_i, y_i)` with distinct `x_i`, the fitter builds
//!
//! ```text
//! p(x) = Σ_i y_i · Π_{j≠i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! by expanding each numerator product into monomial coefficients
//! (`math::expand_roots`), scaling by `y_i / Π_{j≠i}(x_i - x_j)` and summing into
//! one accumulator. The expansion yields coefficients from the highest power
//! down, so the accumulator is reversed once at the end: `factor[k]` is the
//! coefficient of `x^k`.
//!
//! Coefficients are derived eagerly. A fitter is never observable in a
//! half-built state and is read-only afterwards.

use tracing::{debug, trace, warn};

use crate::domain::Sample;
use crate::error::FitError;
use crate::fit::estimate::{Estimates, power_sum};
use crate::math::{MAX_ROOTS, expand_roots, trapezoid};

/// Largest sample count the subset-mask expansion supports.
pub const MAX_SAMPLES: usize = MAX_ROOTS + 1;

#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFitter {
    samples: Vec<Sample>,
    factor: Vec<f64>,
}

impl PolynomialFitter {
    /// Fit the samples. The fitter keeps its own copy.
    pub fn new(samples: &[Sample]) -> Result<Self, FitError> {
        let samples = samples.to_vec();
        validate(&samples)?;

        if !samples.windows(2).all(|w| w[0].x < w[1].x) {
            warn!(
                n = samples.len(),
                "samples are not ascending in x; integration bounds follow input order"
            );
        }

        let factor = derive_coefficients(&samples)?;
        debug!(n = samples.len(), degree = factor.len() - 1, "derived interpolating polynomial");

        Ok(Self { samples, factor })
    }

    /// Fit from parallel coordinate slices.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, FitError> {
        Self::new(&zip_xy(xs, ys)?)
    }

    /// Replace the data set and recompute every coefficient.
    ///
    /// On error the fitter keeps its previous samples and coefficients.
    pub fn reload(&mut self, samples: &[Sample]) -> Result<(), FitError> {
        *self = Self::new(samples)?;
        Ok(())
    }

    pub fn reload_xy(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), FitError> {
        *self = Self::from_xy(xs, ys)?;
        Ok(())
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Coefficients in ascending power order (`[0]` is the constant term).
    pub fn coefficients(&self) -> &[f64] {
        &self.factor
    }

    pub fn degree(&self) -> usize {
        self.factor.len() - 1
    }

    /// x of the first sample (sequence order, not sorted).
    pub fn lower(&self) -> f64 {
        self.samples[0].x
    }

    /// x of the last sample (sequence order, not sorted).
    pub fn upper(&self) -> f64 {
        self.samples[self.samples.len() - 1].x
    }

    /// `p(x)` as a direct power sum.
    pub fn evaluate(&self, x: f64) -> f64 {
        power_sum(&self.factor, x)
    }

    /// Analytic integral of `p` between the first and last sample.
    pub fn integral(&self) -> f64 {
        self.integral_between(self.lower(), self.upper())
    }

    /// Analytic integral of `p` over `[a, b]` (signed; `b < a` flips the sign).
    pub fn integral_between(&self, a: f64, b: f64) -> f64 {
        self.factor
            .iter()
            .enumerate()
            .map(|(k, &c)| {
                let power = (k + 1) as i32;
                c * (b.powi(power) - a.powi(power)) / power as f64
            })
            .sum()
    }

    /// Trapezoid-rule area over the raw samples; ignores the polynomial.
    pub fn quadrature(&self) -> f64 {
        trapezoid(&self.samples)
    }

    /// Lazily evaluate `p` at `x = s / steps` for `s = 0..=steps`.
    ///
    /// The grid always starts at 0.0 and ends at 1.0, whatever the sample range.
    /// `steps` must be positive and `steps + 1` must fit in a `usize`.
    pub fn sample(&self, steps: usize) -> Result<Estimates<'_>, FitError> {
        if steps == 0 || steps == usize::MAX {
            return Err(FitError::InvalidSteps);
        }
        Ok(Estimates::new(&self.factor, steps))
    }
}

fn zip_xy(xs: &[f64], ys: &[f64]) -> Result<Vec<Sample>, FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    Ok(xs.iter().zip(ys).map(|(&x, &y)| Sample::new(x, y)).collect())
}

fn validate(samples: &[Sample]) -> Result<(), FitError> {
    let n = samples.len();
    if n < 2 {
        return Err(FitError::InsufficientData { found: n });
    }
    if n > MAX_SAMPLES {
        return Err(FitError::CapacityExceeded {
            found: n,
            max: MAX_SAMPLES,
        });
    }
    if let Some(index) = samples.iter().position(|s| !(s.x.is_finite() && s.y.is_finite())) {
        return Err(FitError::NonFinite { index });
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if samples[i].x == samples[j].x {
                return Err(FitError::DegenerateSample {
                    index: i,
                    other: j,
                    x: samples[i].x,
                });
            }
        }
    }
    Ok(())
}

fn derive_coefficients(samples: &[Sample]) -> Result<Vec<f64>, FitError> {
    let n = samples.len();
    let mut acc = vec![0.0; n];
    let mut roots = Vec::with_capacity(n - 1);

    for (i, p) in samples.iter().enumerate() {
        roots.clear();
        let mut denom = 1.0;
        for (j, q) in samples.iter().enumerate() {
            if i == j {
                continue;
            }
            denom *= p.x - q.x;
            roots.push(q.x);
        }

        // Distinct x can still underflow the product to zero or overflow it to inf.
        let scale = p.y / denom;
        if denom == 0.0 || !denom.is_finite() || !scale.is_finite() {
            return Err(degenerate_near(samples, i));
        }

        let terms = expand_roots(&roots);
        trace!(point = i, scale, ?terms, "expanded basis polynomial");

        // `terms` runs from x^(n-1) down to x^0.
        for (slot, t) in acc.iter_mut().zip(&terms) {
            *slot += scale * t;
        }
    }

    acc.reverse();

    if let Some(k) = acc.iter().position(|c| !c.is_finite()) {
        debug!(power = k, "non-finite coefficient after expansion");
        let (i, _) = closest_pair(samples);
        return Err(degenerate_near(samples, i));
    }

    Ok(acc)
}

/// Report sample `i` together with its nearest neighbour in x.
fn degenerate_near(samples: &[Sample], i: usize) -> FitError {
    let other = samples
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .min_by(|(_, a), (_, b)| {
            let da = (a.x - samples[i].x).abs();
            let db = (b.x - samples[i].x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(j, _)| j)
        .unwrap_or(i);

    FitError::DegenerateSample {
        index: i.min(other),
        other: i.max(other),
        x: samples[i].x,
    }
}

fn closest_pair(samples: &[Sample]) -> (usize, usize) {
    let mut best = (0, 1);
    let mut best_gap = f64::INFINITY;
    for i in 0..samples.len() {
        for j in (i + 1)..samples.len() {
            let gap = (samples[i].x - samples[j].x).abs();
            if gap < best_gap {
                best_gap = gap;
                best = (i, j);
            }
        }
    }
    best
}
