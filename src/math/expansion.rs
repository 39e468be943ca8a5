//! Combinatorial expansion of a product of linear factors.
//!
//! For roots `a_0..a_{m-1}`:
//!
//! ```text
//! Π (x - a_k) = Σ_S (-1)^|S| (Π_{k∈S} a_k) x^(m - |S|)
//! ```
//!
//! Every subset `S` is enumerated as a `u32` bitmask and its signed product is
//! accumulated into the bucket indexed by `popcount(S)`. Bucket `c` therefore
//! holds the coefficient of `x^(m - c)`: the output runs from the highest power
//! down to the constant term. Callers that want ascending powers must reverse it.
//!
//! Cost is `O(m · 2^m)`. The mask register caps `m` at `MAX_ROOTS`.

/// Width of the subset mask register.
pub const MAX_ROOTS: usize = u32::BITS as usize - 1;

/// Expand `Π (x - roots[k])` into `roots.len() + 1` coefficients, highest power first.
///
/// # Panics
/// Panics if `roots.len() > MAX_ROOTS`. The fitter validates sample counts before
/// calling this.
pub fn expand_roots(roots: &[f64]) -> Vec<f64> {
    let m = roots.len();
    assert!(m <= MAX_ROOTS, "expansion supports at most {MAX_ROOTS} roots, got {m}");

    let mut buckets = vec![0.0; m + 1];
    let subsets = 1u32 << m;

    for mask in 0..subsets {
        let mut term = 1.0;
        for (k, &a) in roots.iter().enumerate() {
            if mask & (1 << k) != 0 {
                term *= -a;
            }
        }
        buckets[mask.count_ones() as usize] += term;
    }

    buckets
}
