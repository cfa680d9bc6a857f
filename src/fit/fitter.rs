//! Per-model fitting of normalized timings.
//!
//! Given:
//! - input sizes `n_i`
//! - raw average durations `t_i`
//!
//! we normalize the durations by their minimum and, for each growth model,
//! regress the normalized times on `f(n_i)` and score the fit by RMSE.
//! Models whose regression cannot explain growth are reported as skipped.

use tracing::{debug, trace};

use crate::domain::{GrowthModel, LineFit, ModelFit, SkipReason};
use crate::math::{fit_line, mean, rmse};

/// Substitute for a non-positive minimum duration.
pub const TIME_FLOOR: f64 = 1e-9;

/// Slopes at or below this do not count as growth.
pub const MIN_SLOPE: f64 = 1e-12;

/// Divide each duration by the smallest one (floored at [`TIME_FLOOR`]).
pub fn normalize_times(times: &[f64]) -> Vec<f64> {
    let min = times.iter().copied().fold(f64::INFINITY, f64::min);
    let min = if min.is_finite() && min > 0.0 { min } else { TIME_FLOOR };
    times.iter().map(|t| t / min).collect()
}

/// Fit a single growth model to normalized timings.
pub fn fit_growth_model(
    model: GrowthModel,
    sizes: &[usize],
    normalized: &[f64],
) -> Result<ModelFit, SkipReason> {
    let theoretical = model.theoretical(sizes);
    let (residuals, line) = compute_residuals(&theoretical, normalized)?;

    let score = rmse(&residuals).ok_or(SkipReason::NonFinite)?;
    if !score.is_finite() {
        return Err(SkipReason::NonFinite);
    }

    Ok(ModelFit {
        model,
        rmse: score,
        line,
    })
}

/// Fit every model in evaluation order.
///
/// Returns the successful fits and the skipped models, both in
/// [`GrowthModel::ALL`] order.
pub fn fit_all(sizes: &[usize], normalized: &[f64]) -> (Vec<ModelFit>, Vec<(GrowthModel, SkipReason)>) {
    let mut fits = Vec::with_capacity(GrowthModel::ALL.len());
    let mut skipped = Vec::new();

    for model in GrowthModel::ALL {
        match fit_growth_model(model, sizes, normalized) {
            Ok(fit) => {
                debug!(model = %model, rmse = fit.rmse, "model fitted");
                fits.push(fit);
            }
            Err(reason) => {
                trace!(model = %model, reason = reason.describe(), "model skipped");
                skipped.push((model, reason));
            }
        }
    }

    (fits, skipped)
}

fn compute_residuals(
    theoretical: &[f64],
    normalized: &[f64],
) -> Result<(Vec<f64>, Option<LineFit>), SkipReason> {
    let flat = theoretical.windows(2).all(|w| w[0] == w[1]);
    if flat {
        // Constant model: the best level is the mean.
        let level = mean(normalized).ok_or(SkipReason::NonFinite)?;
        let residuals = normalized.iter().map(|t| t - level).collect();
        return Ok((residuals, None));
    }

    let line = fit_line(theoretical, normalized).ok_or(SkipReason::Degenerate)?;
    if !(line.slope > MIN_SLOPE) {
        return Err(SkipReason::NonPositiveSlope);
    }

    let residuals = normalized
        .iter()
        .zip(theoretical)
        .map(|(t, x)| t - (line.slope * x + line.intercept))
        .collect();
    Ok((residuals, Some(line)))
}
