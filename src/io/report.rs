//! Read/write report JSON files.
//!
//! A report is the portable record of one estimation run:
//! - the target (module/function) and timing parameters
//! - every measured sample
//! - per-model fits, skipped models and the verdict
//!
//! The schema is defined by `domain::ReportFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::app::pipeline::RunOutput;
use crate::domain::{EstimateConfig, ReportFile, SkippedModel};
use crate::error::{AppError, EXIT_CONFIG};

/// Build the serializable report for a finished run.
pub fn build_report(run: &RunOutput, config: &EstimateConfig) -> ReportFile {
    let selection = &run.selection;
    ReportFile {
        tool: "bigo".to_string(),
        generated_at: Utc::now(),
        module: config.module.clone(),
        function: config.function.clone(),
        iterations: config.iterations,
        samples: run.series.samples().to_vec(),
        fits: selection.fits.clone(),
        skipped: selection
            .skipped
            .iter()
            .map(|&(model, reason)| SkippedModel { model, reason })
            .collect(),
        tie_break: selection.tie_break,
        verdict: selection.verdict,
    }
}

/// Write a report JSON file.
pub fn write_report_json(path: &Path, run: &RunOutput, config: &EstimateConfig) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_CONFIG,
            format!("Failed to create report JSON '{}': {e}", path.display()),
        )
    })?;

    let report = build_report(run, config);
    serde_json::to_writer_pretty(file, &report)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<ReportFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            EXIT_CONFIG,
            format!("Failed to open report JSON '{}': {e}", path.display()),
        )
    })?;
    let report: ReportFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Invalid report JSON: {e}")))?;
    Ok(report)
}
