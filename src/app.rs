//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and parses CLI arguments
//! - installs the log subscriber
//! - runs ingest + fit
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, FitArgs, PlotArgs};
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lti` binary.
pub fn run() -> Result<(), AppError> {
    // A missing `.env` is fine; defaults then come from flags only.
    let _ = dotenvy::dotenv();

    // Accept the classic positional form `lti INPUT [PLOT_FILE [DATA_POINTS]]`
    // by rewriting it into `lti fit ...` before clap sees it.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    init_logging(cli.verbose);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    println!("{}", crate::report::format_ingest_summary(&run.ingest));
    println!("{}", crate::report::format_coefficients(run.fitter.coefficients()));
    println!("{}", crate::report::format_free_energy(run.integral, run.quadrature));

    if config.plot {
        let plot = crate::plot::render_ascii_plot(&run.fitter, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let config = FitConfig {
        plot: true,
        plot_width: args.width,
        plot_height: args.height,
        ..FitConfig::new(args.input)
    };
    let run = pipeline::run_fit(&config)?;

    let plot = crate::plot::render_ascii_plot(&run.fitter, config.plot_width, config.plot_height);
    println!("{plot}");
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        input: args.input.clone(),
        steps: args.steps,
        export_estimates: args.estimates.clone(),
        export_summary: args.summary.clone(),
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
    }
}

/// Rewrite argv so the positional form maps onto `lti fit`.
///
/// Rules:
/// - `lti`                     -> `lti --help`
/// - `lti IN`                  -> `lti fit IN`
/// - `lti IN OUT`              -> `lti fit IN --estimates OUT`
/// - `lti IN OUT N`            -> `lti fit IN --estimates OUT --steps N`
/// - subcommands, flags, help  -> unchanged
///
/// `-v`/`--verbose` may appear anywhere; it is lifted out before the
/// positional form is recognized and passed on after it.
fn rewrite_args(argv: Vec<String>) -> Vec<String> {
    let mut argv = argv.into_iter();
    let bin = argv.next().unwrap_or_else(|| "lti".to_string());
    let (verbose, rest): (Vec<String>, Vec<String>) =
        argv.partition(|a| matches!(a.as_str(), "-v" | "--verbose"));

    let Some(arg1) = rest.first() else {
        return vec![bin, "--help".to_string()];
    };

    let is_subcommand_or_flag =
        matches!(arg1.as_str(), "fit" | "plot" | "help") || arg1.starts_with('-');

    let mut out = vec![bin];
    if is_subcommand_or_flag {
        out.extend(rest);
    } else if rest.len() > 3 || rest.iter().any(|a| a.starts_with('-')) {
        // Anything beyond the plain positional form is left to clap.
        out.push("fit".to_string());
        out.extend(rest);
    } else {
        let mut rest = rest.into_iter();
        out.push("fit".to_string());
        out.extend(rest.next());
        if let Some(estimates) = rest.next() {
            out.push("--estimates".to_string());
            out.push(estimates);
        }
        if let Some(steps) = rest.next() {
            out.push("--steps".to_string());
            out.push(steps);
        }
    }
    out.extend(verbose);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn positional_form_is_rewritten() {
        assert_eq!(rewrite_args(argv(&["lti", "ti.dat"])), argv(&["lti", "fit", "ti.dat"]));
        assert_eq!(
            rewrite_args(argv(&["lti", "ti.dat", "plot.csv", "100"])),
            argv(&["lti", "fit", "ti.dat", "--estimates", "plot.csv", "--steps", "100"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        let a = argv(&["lti", "plot", "ti.dat"]);
        assert_eq!(rewrite_args(a.clone()), a);
        let a = argv(&["lti", "--help"]);
        assert_eq!(rewrite_args(a.clone()), a);
    }

    #[test]
    fn bare_invocation_shows_help() {
        assert_eq!(rewrite_args(argv(&["lti"])), argv(&["lti", "--help"]));
        assert_eq!(rewrite_args(argv(&["lti", "-v"])), argv(&["lti", "--help", "-v"]));
    }

    #[test]
    fn verbose_flag_does_not_break_positional_form() {
        let expected = argv(&["lti", "fit", "ti.dat", "--estimates", "out.csv", "--steps", "10", "-v"]);
        assert_eq!(rewrite_args(argv(&["lti", "ti.dat", "out.csv", "10", "-v"])), expected);
        assert_eq!(rewrite_args(argv(&["lti", "-v", "ti.dat", "out.csv", "10"])), expected);
        assert_eq!(
            rewrite_args(argv(&["lti", "--verbose", "ti.dat"])),
            argv(&["lti", "fit", "ti.dat", "--verbose"])
        );
    }

    #[test]
    fn rewritten_positional_form_parses() {
        let cli = crate::cli::Cli::parse_from(rewrite_args(argv(&["lti", "-v", "ti.dat", "out.csv", "10"])));
        assert!(cli.verbose);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.steps, Some(10));
        assert_eq!(args.estimates.as_deref(), Some(std::path::Path::new("out.csv")));
    }

    #[test]
    fn input_with_flags_gets_fit_prefix() {
        assert_eq!(
            rewrite_args(argv(&["lti", "ti.dat", "--plot"])),
            argv(&["lti", "fit", "ti.dat", "--plot"])
        );
    }
}
