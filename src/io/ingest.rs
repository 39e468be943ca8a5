//! Sample file ingest.
//!
//! Thermodynamic-integration output is a loose text format: one `λ dG/dλ` pair
//! per line, separated by any mix of tabs, commas, semicolons and spaces, with
//! `#` comment lines. This module turns such a file into an ordered list of
//! `Sample`s.
//!
//! Design goals:
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **File order preserved** (integration bounds come from first/last rows)
//! - **Separation of concerns**: no fitting logic here

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{DatasetStats, Sample};
use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based line number in the input.
    pub line: usize,
    pub message: String,
}

/// Ingest output: samples in file order + stats + row errors.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub samples: Vec<Sample>,
    pub stats: DatasetStats,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load samples from a text file.
pub fn load_samples(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open input '{}': {e}", path.display())))?;
    parse_samples(BufReader::new(file))
}

/// Parse samples from any buffered reader.
pub fn parse_samples<R: BufRead>(reader: R) -> Result<IngestedData, AppError> {
    let mut samples = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| AppError::new(2, format!("Failed to read input line {line_no}: {e}")))?;

        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        rows_read += 1;

        match parse_line(&line) {
            Ok(sample) => samples.push(sample),
            Err(message) => {
                warn!(line = line_no, %message, "skipping input row");
                row_errors.push(RowError {
                    line: line_no,
                    message,
                });
            }
        }
    }

    let rows_used = samples.len();
    let stats = DatasetStats::from_samples(&samples)
        .ok_or_else(|| AppError::new(3, "No valid samples found in input."))?;

    debug!(
        rows_read,
        rows_used,
        skipped = row_errors.len(),
        "ingested samples"
    );

    Ok(IngestedData {
        samples,
        stats,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '\t' | ',' | ';' | ' ' | '\r')
}

/// Parse `x` and `y` from the first two tokens; trailing tokens are ignored.
fn parse_line(line: &str) -> Result<Sample, String> {
    let mut tokens = line.split(is_delimiter).filter(|t| !t.is_empty());
    let x = parse_value(tokens.next(), "x")?;
    let y = parse_value(tokens.next(), "y")?;
    Ok(Sample::new(x, y))
}

fn parse_value(token: Option<&str>, name: &str) -> Result<f64, String> {
    let token = token.ok_or_else(|| format!("Missing `{name}` value"))?;
    let v = token
        .parse::<f64>()
        .map_err(|_| format!("Invalid `{name}` value '{token}'"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("Non-finite `{name}` value '{token}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_delimiters_and_comments() {
        let input = "# lambda dG/dl\n0.0, 51.5\n0.5;\t-5.25\n\n1.0   -12.0  extra\n";
        let data = parse_samples(input.as_bytes()).unwrap();
        assert_eq!(
            data.samples,
            vec![
                Sample::new(0.0, 51.5),
                Sample::new(0.5, -5.25),
                Sample::new(1.0, -12.0)
            ]
        );
        assert_eq!(data.rows_read, 3);
        assert_eq!(data.rows_used, 3);
        assert!(data.row_errors.is_empty());
    }

    #[test]
    fn bad_rows_are_reported_with_line_numbers() {
        let input = "0.0 1.0\nabc 2.0\n0.5\n1.0 3.0\r\n";
        let data = parse_samples(input.as_bytes()).unwrap();
        assert_eq!(data.samples.len(), 2);
        assert_eq!(data.rows_read, 4);
        let lines: Vec<usize> = data.row_errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert!(data.row_errors[1].message.contains("Missing `y`"));
    }

    #[test]
    fn only_comments_is_an_error() {
        let err = parse_samples("# nothing here\n".as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn stats_cover_used_rows() {
        let data = parse_samples("0.0 4.0\n0.5 -1.0\n1.0 2.0\n".as_bytes()).unwrap();
        assert_eq!(data.stats.n_points, 3);
        assert_eq!(data.stats.x_min, 0.0);
        assert_eq!(data.stats.x_max, 1.0);
        assert_eq!(data.stats.y_min, -1.0);
        assert_eq!(data.stats.y_max, 4.0);
    }
}
