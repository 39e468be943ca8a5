//! End-to-end tests: text file -> fit -> exports.

use std::fs;

use approx::assert_relative_eq;
use tempfile::TempDir;

use lagrange_ti::app::pipeline::run_fit;
use lagrange_ti::domain::{FitConfig, Sample};
use lagrange_ti::io::{load_samples, read_summary_json};

const TI_DATA: &str = "\
# lambda   dG/dl
# produced by a 5-window run
0.00\t10.0
0.25,\t4.0
0.50;  1.0
0.75 0.5
1.00, 0.25
";

fn write_input(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("ti.dat");
    fs::write(&path, body).expect("Failed to write input");
    path
}

#[test]
fn test_load_samples_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_input(&dir, TI_DATA);

    let data = load_samples(&path).unwrap();
    assert_eq!(data.rows_used, 5);
    assert_eq!(data.samples[1], Sample::new(0.25, 4.0));
    assert_eq!(data.samples[4], Sample::new(1.0, 0.25));
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_samples(&dir.path().join("nope.dat")).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_run_fit_writes_estimates_with_default_steps() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, TI_DATA);
    let estimates = dir.path().join("plot.csv");

    let config = FitConfig {
        export_estimates: Some(estimates.clone()),
        ..FitConfig::new(&input)
    };
    let run = run_fit(&config).unwrap();
    assert_eq!(run.steps, 4);

    let text = fs::read_to_string(&estimates).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    // Grid points coincide with the samples here, so the fit reproduces them.
    assert_eq!(lines[0], "0.0000, 10.00000000");
    assert_eq!(lines[2], "0.5000, 1.00000000");
    assert_eq!(lines[4], "1.0000, 0.25000000");
}

#[test]
fn test_run_fit_writes_summary_json() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, TI_DATA);
    let summary_path = dir.path().join("fit.json");

    let config = FitConfig {
        steps: Some(8),
        export_summary: Some(summary_path.clone()),
        ..FitConfig::new(&input)
    };
    let run = run_fit(&config).unwrap();

    let summary = read_summary_json(&summary_path).unwrap();
    assert_eq!(summary.tool, "lti");
    assert_eq!(summary.input.as_deref(), Some(input.as_path()));
    assert_eq!(summary.samples.len(), 5);
    assert_eq!(summary.estimates.len(), 9);
    for (a, b) in summary.coefficients.iter().zip(run.fitter.coefficients()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-14);
    }
    assert_relative_eq!(summary.integral, run.integral, epsilon = 1e-12);
    assert_relative_eq!(summary.quadrature, run.quadrature, epsilon = 1e-12);
}

#[test]
fn test_unrepresentable_step_count_fails_the_run() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, TI_DATA);

    let config = FitConfig {
        steps: Some(usize::MAX),
        export_estimates: Some(dir.path().join("plot.csv")),
        ..FitConfig::new(&input)
    };
    let err = run_fit(&config).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("Step count"));
}

#[test]
fn test_duplicate_lambda_fails_the_run() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "0.0 1.0\n0.5 2.0\n0.5 3.0\n");

    let err = run_fit(&FitConfig::new(&input)).unwrap_err();
    assert_eq!(err.exit_code(), 4);
    assert!(err.to_string().contains("Degenerate"));
}

#[test]
fn test_single_row_fails_the_run() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&dir, "# one window only\n0.0 1.0\n");

    let err = run_fit(&FitConfig::new(&input)).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}
