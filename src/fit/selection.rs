//! Growth model selection using RMSE with a simplicity tie-break.
//!
//! Selection rules:
//! 1. Fewer than [`MIN_SAMPLES`] timings: no verdict ("insufficient data").
//! 2. Walk the models from simplest to most complex; a model replaces the
//!    current best only if its RMSE is lower by more than 5% of the best
//!    score. Within that band the simpler model is kept.
//! 3. If the winner is linear or linearithmic and their scores are within 5%
//!    of each other, decide between them from the log-log slope of the raw
//!    timings.

use tracing::{debug, info};

use crate::domain::{
    GrowthModel, MIN_SAMPLES, ModelFit, SkipReason, TieBreak, TimingSeries, Verdict,
};
use crate::fit::fitter::{fit_all, normalize_times};
use crate::math::{covariance_slope, mean};

/// Relative band within which two scores count as tied.
pub const RELATIVE_TIE: f64 = 0.05;

/// Tie band used when the current best score is exactly zero.
const ZERO_SCORE_TIE: f64 = 1e-9;

/// Below this `|ln(n_mid)|` the expected linearithmic slope blows up.
const MIN_LN_MID: f64 = 1e-6;

/// Output of fitting + selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// `None` when there were too few samples.
    pub verdict: Option<Verdict>,
    /// Fits for all applicable models, in evaluation order.
    pub fits: Vec<ModelFit>,
    /// Models that could not explain the data and why.
    pub skipped: Vec<(GrowthModel, SkipReason)>,
    /// Set when the linear/linearithmic slope check ran to completion.
    pub tie_break: Option<TieBreak>,
}

impl Selection {
    fn insufficient() -> Self {
        Self {
            verdict: None,
            fits: Vec::new(),
            skipped: Vec::new(),
            tie_break: None,
        }
    }

    pub fn score(&self, model: GrowthModel) -> Option<f64> {
        self.fits.iter().find(|f| f.model == model).map(|f| f.rmse)
    }
}

/// Estimate the growth model of a timing series.
pub fn detect_complexity(series: &TimingSeries) -> Selection {
    if series.len() < MIN_SAMPLES {
        debug!(samples = series.len(), "insufficient data for a verdict");
        return Selection::insufficient();
    }

    let sizes = series.sizes();
    let times = series.seconds();
    let normalized = normalize_times(&times);

    let (fits, skipped) = fit_all(&sizes, &normalized);
    let mut verdict = select_simplest(&fits);
    let mut tie_break = None;

    if let Some(v) = verdict {
        if matches!(v.model, GrowthModel::Linear | GrowthModel::Linearithmic) {
            if let Some(tb) = tie_break_linear_vs_linearithmic(&sizes, &times, &fits) {
                let rmse = fits
                    .iter()
                    .find(|f| f.model == tb.pick)
                    .map(|f| f.rmse)
                    .unwrap_or(v.rmse);
                if tb.pick != v.model {
                    debug!(from = %v.model, to = %tb.pick, slope = tb.observed_slope, "log-log slope override");
                }
                verdict = Some(Verdict { model: tb.pick, rmse });
                tie_break = Some(tb);
            }
        }
    }

    if let Some(v) = &verdict {
        info!(model = %v.model, rmse = v.rmse, "selected growth model");
    }

    Selection {
        verdict,
        fits,
        skipped,
        tie_break,
    }
}

/// Pick the lowest-RMSE fit, preferring simpler models within the tie band.
///
/// `fits` must be in evaluation order.
pub fn select_simplest(fits: &[ModelFit]) -> Option<Verdict> {
    let mut best: Option<Verdict> = None;

    for fit in fits {
        let Some(current) = best else {
            best = Some(Verdict { model: fit.model, rmse: fit.rmse });
            continue;
        };

        let threshold = if current.rmse > 0.0 {
            RELATIVE_TIE * current.rmse
        } else {
            ZERO_SCORE_TIE
        };

        if fit.rmse < current.rmse - threshold {
            best = Some(Verdict { model: fit.model, rmse: fit.rmse });
        } else if (fit.rmse - current.rmse).abs() <= threshold
            && fit.model.priority() < current.model.priority()
        {
            best = Some(Verdict { model: fit.model, rmse: fit.rmse });
        }
    }

    best
}

/// Decide between linear and linearithmic growth from the log-log slope.
///
/// Only engages when both models were fitted and their RMSEs are within
/// [`RELATIVE_TIE`] of the smaller one. Returns `None` whenever the check
/// cannot be carried out, in which case the RMSE pick stands.
pub fn tie_break_linear_vs_linearithmic(
    sizes: &[usize],
    times: &[f64],
    fits: &[ModelFit],
) -> Option<TieBreak> {
    let score = |m: GrowthModel| fits.iter().find(|f| f.model == m).map(|f| f.rmse);
    let linear = score(GrowthModel::Linear)?;
    let nlogn = score(GrowthModel::Linearithmic)?;

    let threshold = RELATIVE_TIE * linear.min(nlogn);
    if (linear - nlogn).abs() > threshold {
        return None;
    }

    // Keep pairs aligned; ln(1) = 0 and ln(0) are useless here.
    let (log_n, log_t): (Vec<f64>, Vec<f64>) = sizes
        .iter()
        .zip(times)
        .filter(|&(&n, &t)| n > 1 && t > 0.0)
        .map(|(&n, &t)| ((n as f64).ln(), t.ln()))
        .unzip();
    if log_n.len() < 2 {
        return None;
    }

    let slope = covariance_slope(&log_n, &log_t)?;
    let ln_mid = mean(&log_n)?; // ln(exp(mean ln n))
    if ln_mid.abs() < MIN_LN_MID {
        return None;
    }

    let expected_nlogn = 1.0 + 1.0 / ln_mid;
    let pick = if (slope - 1.0).abs() <= (slope - expected_nlogn).abs() {
        GrowthModel::Linear
    } else {
        GrowthModel::Linearithmic
    };

    Some(TieBreak {
        observed_slope: slope,
        expected_linearithmic_slope: expected_nlogn,
        pick,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(sizes: &[usize], times: &[f64]) -> TimingSeries {
        TimingSeries::new(sizes, times).unwrap()
    }

    fn fit(model: GrowthModel, rmse: f64) -> ModelFit {
        ModelFit { model, rmse, line: None }
    }

    const SIZES: [usize; 5] = [100, 500, 1000, 2000, 5000];

    #[test]
    fn example_constant_scenario() {
        let s = series(&[100, 1000, 5000, 10000], &[1e-6, 1e-6, 1.1e-6, 0.9e-6]);
        let sel = detect_complexity(&s);
        assert_eq!(sel.verdict.unwrap().model, GrowthModel::Constant);
    }

    #[test]
    fn identical_durations_are_constant() {
        let s = series(&SIZES, &[3e-7; 5]);
        let v = detect_complexity(&s).verdict.unwrap();
        assert_eq!(v.model, GrowthModel::Constant);
        assert!(v.rmse.abs() < 1e-12);
    }

    #[test]
    fn example_linear_scenario() {
        let sizes = [100, 1000, 5000, 10000];
        let times: Vec<f64> = sizes.iter().map(|&n| n as f64 * 1e-6).collect();
        let v = detect_complexity(&series(&sizes, &times)).verdict.unwrap();
        assert_eq!(v.model, GrowthModel::Linear);
        assert!(v.rmse < 1e-6, "rmse={}", v.rmse);
    }

    #[test]
    fn example_quadratic_scenario() {
        let sizes = [100, 500, 1000, 2000];
        let times: Vec<f64> = sizes.iter().map(|&n| (n * n) as f64 * 1e-9).collect();
        let v = detect_complexity(&series(&sizes, &times)).verdict.unwrap();
        assert_eq!(v.model, GrowthModel::Quadratic);
        assert!(v.rmse < 1e-6, "rmse={}", v.rmse);
    }

    #[test]
    fn linearithmic_data_is_not_called_linear() {
        let times: Vec<f64> = SIZES
            .iter()
            .map(|&n| n as f64 * (n as f64).ln() * 1e-8)
            .collect();
        let v = detect_complexity(&series(&SIZES, &times)).verdict.unwrap();
        assert_eq!(v.model, GrowthModel::Linearithmic);
    }

    #[test]
    fn two_samples_are_insufficient() {
        let sel = detect_complexity(&series(&[100, 200], &[1e-6, 2e-6]));
        assert!(sel.verdict.is_none());
        assert!(sel.fits.is_empty());
        assert!(detect_complexity(&TimingSeries::default()).verdict.is_none());
    }

    #[test]
    fn selection_is_deterministic() {
        let times = [1.3e-6, 2.9e-6, 5.2e-6, 9.8e-6, 26.0e-6];
        let s = series(&SIZES, &times);
        assert_eq!(detect_complexity(&s), detect_complexity(&s));
    }

    #[test]
    fn near_tie_prefers_simpler_model() {
        let fits = vec![
            fit(GrowthModel::Logarithmic, 1.00),
            fit(GrowthModel::Linear, 0.97),
        ];
        assert_eq!(select_simplest(&fits).unwrap().model, GrowthModel::Logarithmic);
    }

    #[test]
    fn clear_improvement_wins() {
        let fits = vec![
            fit(GrowthModel::Constant, 1.00),
            fit(GrowthModel::Linear, 0.90),
            fit(GrowthModel::Quadratic, 0.50),
        ];
        let v = select_simplest(&fits).unwrap();
        assert_eq!(v.model, GrowthModel::Quadratic);
        assert_eq!(v.rmse, 0.50);
    }

    #[test]
    fn zero_best_score_uses_absolute_band() {
        let fits = vec![
            fit(GrowthModel::Linear, 0.0),
            fit(GrowthModel::Linearithmic, 5e-10),
        ];
        assert_eq!(select_simplest(&fits).unwrap().model, GrowthModel::Linear);
        assert!(select_simplest(&[]).is_none());
    }

    #[test]
    fn slope_check_picks_linearithmic_for_nlogn_timings() {
        let times: Vec<f64> = SIZES
            .iter()
            .map(|&n| n as f64 * (n as f64).ln() * 1e-8)
            .collect();
        let fits = vec![fit(GrowthModel::Linear, 0.10), fit(GrowthModel::Linearithmic, 0.10)];
        let tb = tie_break_linear_vs_linearithmic(&SIZES, &times, &fits).unwrap();
        assert_eq!(tb.pick, GrowthModel::Linearithmic);
        assert!(tb.observed_slope > 1.1 && tb.observed_slope < 1.2);
    }

    #[test]
    fn slope_check_picks_linear_for_linear_timings() {
        let times: Vec<f64> = SIZES.iter().map(|&n| n as f64 * 1e-8).collect();
        let fits = vec![fit(GrowthModel::Linear, 0.10), fit(GrowthModel::Linearithmic, 0.104)];
        let tb = tie_break_linear_vs_linearithmic(&SIZES, &times, &fits).unwrap();
        assert_eq!(tb.pick, GrowthModel::Linear);
        assert!((tb.observed_slope - 1.0).abs() < 1e-9);
    }

    #[test]
    fn slope_check_skips_distinct_scores_and_bad_pairs() {
        let times: Vec<f64> = SIZES.iter().map(|&n| n as f64 * 1e-8).collect();
        let far = vec![fit(GrowthModel::Linear, 0.10), fit(GrowthModel::Linearithmic, 0.50)];
        assert!(tie_break_linear_vs_linearithmic(&SIZES, &times, &far).is_none());

        let tied = vec![fit(GrowthModel::Linear, 0.10), fit(GrowthModel::Linearithmic, 0.10)];
        // n = 1 is dropped, two pairs remain.
        assert!(tie_break_linear_vs_linearithmic(&[1, 10, 20], &[1e-6, 1e-6, 2e-6], &tied).is_some());
        // n = 1 and t = 0 are dropped, one pair remains.
        assert!(tie_break_linear_vs_linearithmic(&[1, 10, 20], &[1e-6, 0.0, 2e-6], &tied).is_none());

        let missing = vec![fit(GrowthModel::Linear, 0.10)];
        assert!(tie_break_linear_vs_linearithmic(&SIZES, &times, &missing).is_none());
    }
}
