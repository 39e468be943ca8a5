//! Trapezoid rule over raw samples.
//!
//! Independent of any fitted polynomial: this walks the samples in sequence
//! order and sums the signed area of each consecutive trapezoid. Spacing may be
//! non-uniform.

use crate::domain::Sample;

/// `Σ 0.5 · (y_i + y_{i+1}) · (x_{i+1} - x_i)` over consecutive pairs.
///
/// Fewer than two samples have no area and return `0.0`.
pub fn trapezoid(samples: &[Sample]) -> f64 {
    samples
        .windows(2)
        .map(|w| 0.5 * (w[0].y + w[1].y) * (w[1].x - w[0].x))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_points_make_one_trapezoid() {
        let s = [Sample::new(0.0, 1.0), Sample::new(2.0, 3.0)];
        assert!((trapezoid(&s) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn handles_non_uniform_spacing() {
        let s = [
            Sample::new(0.0, 0.0),
            Sample::new(0.1, 1.0),
            Sample::new(1.0, 1.0),
        ];
        // 0.5*1*0.1 + 1*0.9
        assert!((trapezoid(&s) - 0.95).abs() < 1e-12);
    }

    #[test]
    fn descending_order_gives_signed_area() {
        let s = [Sample::new(1.0, 2.0), Sample::new(0.0, 2.0)];
        assert!((trapezoid(&s) + 2.0).abs() < 1e-12);
    }
}
