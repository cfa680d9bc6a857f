//! Export the timing table to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::TimingSeries;
use crate::error::{AppError, EXIT_CONFIG};
use crate::fit::fitter::normalize_times;

/// Write `size,seconds,normalized` rows, one per measured size.
pub fn write_timings_csv(path: &Path, series: &TimingSeries) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_CONFIG,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "size,seconds,normalized")
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to write export CSV header: {e}")))?;

    let normalized = normalize_times(&series.seconds());
    for (sample, norm) in series.samples().iter().zip(normalized) {
        writeln!(file, "{},{:.12e},{:.6}", sample.size, sample.seconds, norm)
            .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_one_row_per_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timings.csv");
        let series = TimingSeries::new(&[100, 200, 400], &[2e-6, 4e-6, 8e-6]).unwrap();

        write_timings_csv(&path, &series).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "size,seconds,normalized");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("100,2.000000000000e-6,"));
        assert!(lines[3].ends_with(",4.000000"));
    }

    #[test]
    fn unwritable_path_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("timings.csv");
        let series = TimingSeries::new(&[1, 2, 3], &[1.0, 1.0, 1.0]).unwrap();
        let err = write_timings_csv(&path, &series).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_CONFIG);
        assert!(err.to_string().contains("Failed to create export CSV"));
    }
}
