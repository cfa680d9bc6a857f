//! Closed-form simple regression helpers.
//!
//! Every fit in this crate has a single regressor, so we solve
//!
//! ```text
//! minimize Σ (y_i - (a x_i + b))^2
//! ```
//!
//! directly from the running sums Σx, Σy, Σx², Σxy instead of building a
//! design matrix.

use crate::domain::LineFit;

/// Below this `|count·Σx² − (Σx)²|` the regressor has no usable spread.
pub const DEGENERATE_DENOM: f64 = 1e-12;

/// Ordinary least squares with intercept.
///
/// Returns `None` when the denominator is numerically zero (all `x` equal) or
/// the inputs are empty / mismatched.
pub fn fit_line(x: &[f64], y: &[f64]) -> Option<LineFit> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }

    let n = x.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xx += xi * xi;
        sum_xy += xi * yi;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if denom.abs() < DEGENERATE_DENOM {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    Some(LineFit { slope, intercept })
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Root-mean-square of residuals; `None` for an empty slice.
pub fn rmse(residuals: &[f64]) -> Option<f64> {
    let sq: Vec<f64> = residuals.iter().map(|r| r * r).collect();
    mean(&sq).map(f64::sqrt)
}

/// Slope of `y` on `x` via centred covariance / variance.
///
/// Returns `None` when `x` has zero variance.
pub fn covariance_slope(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() {
        return None;
    }
    let x_bar = mean(x)?;
    let y_bar = mean(y)?;

    let mut cov = 0.0;
    let mut var = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_bar;
        cov += dx * (yi - y_bar);
        var += dx * dx;
    }
    if var == 0.0 {
        return None;
    }
    Some(cov / var)
}
