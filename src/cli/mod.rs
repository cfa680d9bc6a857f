//! Command-line parsing for the complexity estimator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! measurement and fitting code. Every tunable flag can also come from the
//! environment (or a `.env` file loaded before parsing).

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{DEFAULT_ITERATIONS, DEFAULT_SIZES};

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "bigo",
    version,
    about = "Estimate the time complexity of a function by timing it over growing inputs"
)]
pub struct Cli {
    /// Catalog module (see `--list`).
    #[arg(required_unless_present = "list")]
    pub module: Option<String>,

    /// Function within the module.
    #[arg(required_unless_present = "list")]
    pub function: Option<String>,

    /// Print the available modules and functions, then exit.
    #[arg(long)]
    pub list: bool,

    /// Input sizes to measure (strictly increasing).
    #[arg(
        long,
        env = "BIGO_SIZES",
        value_delimiter = ',',
        default_values_t = DEFAULT_SIZES
    )]
    pub sizes: Vec<usize>,

    /// Timed calls per size (after one warm-up call).
    #[arg(long, env = "BIGO_ITERATIONS", default_value_t = DEFAULT_ITERATIONS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,

    /// Render an ASCII plot of normalized timings and the fitted curve.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Write the full report (samples, fits, verdict) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Write the timing table to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Log measurement and fitting details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_calibration_set() {
        let cli = Cli::try_parse_from(["bigo", "demo", "linear"]).unwrap();
        assert_eq!(cli.module.as_deref(), Some("demo"));
        assert_eq!(cli.function.as_deref(), Some("linear"));
        assert_eq!(cli.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(cli.iterations, DEFAULT_ITERATIONS);
    }

    #[test]
    fn missing_positionals_is_a_usage_error() {
        let err = Cli::try_parse_from(["bigo", "demo"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(Cli::try_parse_from(["bigo", "--list"]).is_ok());
    }

    #[test]
    fn sizes_are_comma_separated() {
        let cli = Cli::try_parse_from(["bigo", "vec", "sum", "--sizes", "10,20,40"]).unwrap();
        assert_eq!(cli.sizes, vec![10, 20, 40]);
        assert!(Cli::try_parse_from(["bigo", "vec", "sum", "--iterations", "0"]).is_err());
    }
}
