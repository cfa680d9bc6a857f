//! Shared "estimate pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! dispatch resolution -> per-size measurement -> fit -> selection
//!
//! The CLI can then focus on presentation, and tests can drive the same code
//! with in-process candidates.

use tracing::{debug, info, warn};

use crate::bench::{Candidate, Dispatch, measure};
use crate::domain::{SizeSeries, TimingSample, TimingSeries};
use crate::error::{CallError, MeasureError};
use crate::fit::selection::{Selection, detect_complexity};

/// All computed outputs of a single estimation run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dispatch: Dispatch,
    pub series: TimingSeries,
    pub selection: Selection,
}

/// Measure every size in order, reporting each sample as it lands.
///
/// The first failing size aborts the whole series: a curve fit over a series
/// with a hole in it would be meaningless.
pub fn measure_series<C, F>(
    candidate: &C,
    sizes: &SizeSeries,
    iterations: u32,
    mut on_sample: F,
) -> Result<(Dispatch, TimingSeries), MeasureError>
where
    C: Candidate + ?Sized,
    F: FnMut(&TimingSample),
{
    let dispatch = Dispatch::resolve(candidate);
    debug!(?dispatch, sizes = sizes.len(), iterations, "measuring series");

    let mut series = TimingSeries::default();
    for &n in sizes.as_slice() {
        let seconds = measure(candidate, dispatch, n, iterations).inspect_err(|err| {
            warn!(n, %err, "measurement failed, aborting run");
        })?;
        let sample = TimingSample { size: n, seconds };
        debug!(n, seconds, "measured");

        // Sizes are pre-validated and averages are finite and >= 0, so this
        // only trips on a broken clock.
        series.push(sample).map_err(|e| MeasureError {
            size: n,
            source: CallError::Failed(e.to_string()),
        })?;
        on_sample(&sample);
    }

    Ok((dispatch, series))
}

/// Measure a candidate and estimate its growth model.
pub fn run_estimate<C, F>(
    candidate: &C,
    sizes: &SizeSeries,
    iterations: u32,
    on_sample: F,
) -> Result<RunOutput, MeasureError>
where
    C: Candidate + ?Sized,
    F: FnMut(&TimingSample),
{
    let (dispatch, series) = measure_series(candidate, sizes, iterations, on_sample)?;
    let selection = detect_complexity(&series);

    match &selection.verdict {
        Some(v) => info!(model = %v.model, rmse = v.rmse, "estimate complete"),
        None => info!(samples = series.len(), "insufficient data"),
    }

    Ok(RunOutput {
        dispatch,
        series,
        selection,
    })
}
