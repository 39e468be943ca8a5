//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the fitting code stays free of printing
//! - output changes are localized (important for snapshot tests)

use crate::io::ingest::IngestedData;

/// One `degree, coefficient` row per power, lowest power first.
pub fn format_coefficients(coefficients: &[f64]) -> String {
    let mut out = String::from("Degree, Coefficients\n");
    for (degree, c) in coefficients.iter().enumerate() {
        out.push_str(&format!("{degree:>6}, {c:.8}\n"));
    }
    out
}

/// Analytic (Lagrange) vs trapezoid estimate of the free-energy difference.
pub fn format_free_energy(integral: f64, quadrature: f64) -> String {
    format!("Free energy difference\n Lagrange: {integral:.8}\nTrapezoid: {quadrature:.8}\n")
}

/// Rows read/used/skipped plus data ranges.
pub fn format_ingest_summary(ingest: &IngestedData) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Samples: n={} | rows read={} | skipped={}\n",
        ingest.rows_used,
        ingest.rows_read,
        ingest.row_errors.len()
    ));
    out.push_str(&format!(
        "Range: x=[{:.4}, {:.4}] | y=[{:.4}, {:.4}]\n",
        ingest.stats.x_min, ingest.stats.x_max, ingest.stats.y_min, ingest.stats.y_max
    ));
    for e in &ingest.row_errors {
        out.push_str(&format!("  (line {}) {}\n", e.line, e.message));
    }
    out
}
