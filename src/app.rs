//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - looks the candidate up in the catalog
//! - runs measurement + curve fitting + model selection
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::domain::{EstimateConfig, SizeSeries};
use crate::error::{AppError, EXIT_CONFIG, EXIT_MEASURE};

pub mod pipeline;

/// Entry point for the `bigo` binary.
pub fn run() -> Result<(), AppError> {
    // Flags fall back to BIGO_* variables, which may live in `.env`.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        print!("{}", crate::report::format_catalog(crate::catalog::entries()));
        return Ok(());
    }

    let config = estimate_config_from_args(&cli)?;
    handle_estimate(&config)
}

fn handle_estimate(config: &EstimateConfig) -> Result<(), AppError> {
    let entry = crate::catalog::lookup(&config.module, &config.function)?;
    let name = entry.qualified_name();

    println!("Estimating complexity for {name}...");
    print!("{}", crate::report::format_table_header());

    let run = pipeline::run_estimate(entry, &config.sizes, config.iterations, |sample| {
        println!("{}", crate::report::format_sample_row(sample));
    })
    .map_err(|err| {
        AppError::new(
            EXIT_MEASURE,
            format!(
                "Failed to execute {name} at n={}: {}. Ensure it accepts an integer size or a sequence.",
                err.size, err.source
            ),
        )
    })?;

    println!("{}", crate::report::format_selection(&run.selection));

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.series,
            &run.selection,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_json {
        crate::io::report::write_report_json(path, &run, config)?;
    }
    if let Some(path) = &config.export_csv {
        crate::io::export::write_timings_csv(path, &run.series)?;
    }

    Ok(())
}

pub fn estimate_config_from_args(cli: &Cli) -> Result<EstimateConfig, AppError> {
    let (Some(module), Some(function)) = (&cli.module, &cli.function) else {
        return Err(AppError::new(EXIT_CONFIG, "Both <MODULE> and <FUNCTION> are required."));
    };

    Ok(EstimateConfig {
        module: module.clone(),
        function: function.clone(),
        sizes: SizeSeries::new(cli.sizes.clone())?,
        iterations: cli.iterations,
        plot: cli.plot,
        plot_width: cli.width,
        plot_height: cli.height,
        export_json: cli.export_json.clone(),
        export_csv: cli.export_csv.clone(),
    })
}

/// Install the stderr logger.
///
/// `BIGO_LOG` takes an `EnvFilter` directive; `--verbose` forces debug output
/// for this crate.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,bigo_curves=debug")
    } else {
        EnvFilter::try_from_env("BIGO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
