//! Command-line parsing for the Lagrange free-energy estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "lti",
    version,
    about = "Lagrange interpolating polynomials for free-energy estimates"
)]
pub struct Cli {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the samples, print coefficients and the free-energy difference, optionally export.
    Fit(FitArgs),
    /// Fit the samples and print an ASCII plot of the polynomial.
    Plot(PlotArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Thermodynamic integration data (`lambda dG/dl` per line, `#` comments).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the estimate grid (`x, y` lines over [0, 1]) to this file.
    #[arg(short, long, value_name = "FILE")]
    pub estimates: Option<PathBuf>,

    /// Number of estimate steps (default: sample count - 1).
    #[arg(short, long, env = "LTI_STEPS")]
    pub steps: Option<usize>,

    /// Write a JSON summary (coefficients, integrals, estimate grid).
    #[arg(long, value_name = "JSON")]
    pub summary: Option<PathBuf>,

    /// Also render an ASCII plot.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72, env = "LTI_PLOT_WIDTH")]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20, env = "LTI_PLOT_HEIGHT")]
    pub height: usize,
}

/// Options for plotting.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72, env = "LTI_PLOT_WIDTH")]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20, env = "LTI_PLOT_HEIGHT")]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_flags_parse() {
        let cli = Cli::parse_from(["lti", "fit", "ti.dat", "--estimates", "plot.csv", "--steps", "50", "-v"]);
        assert!(cli.verbose);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.input, PathBuf::from("ti.dat"));
        assert_eq!(args.estimates, Some(PathBuf::from("plot.csv")));
        assert_eq!(args.steps, Some(50));
        assert!(!args.plot);
    }
}
