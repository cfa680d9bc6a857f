//! Theoretical cost for each growth model.
//!
//! The fitter relies on two primitive operations:
//! - evaluate `f(n)` over the measured sizes (the regressor)
//! - predict a normalized time from a fitted line (for residuals/plots)

use crate::domain::{GrowthModel, LineFit};
use crate::math::{ln_or_zero, n_ln_n, square};

impl GrowthModel {
    /// Theoretical cost `f(n)`.
    pub fn evaluate(self, n: f64) -> f64 {
        match self {
            GrowthModel::Constant => 1.0,
            GrowthModel::Logarithmic => ln_or_zero(n),
            GrowthModel::Linear => n,
            GrowthModel::Linearithmic => n_ln_n(n),
            GrowthModel::Quadratic => square(n),
        }
    }

    /// `f(n)` for each size, in order.
    pub fn theoretical(self, sizes: &[usize]) -> Vec<f64> {
        sizes.iter().map(|&n| self.evaluate(n as f64)).collect()
    }
}

/// Predicted normalized time at size `n`.
///
/// `line = None` is the flat fit, which predicts `flat_level` everywhere.
pub fn predict(model: GrowthModel, line: Option<&LineFit>, flat_level: f64, n: f64) -> f64 {
    match line {
        Some(l) => l.slope * model.evaluate(n) + l.intercept,
        None => flat_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theoretical_preserves_order() {
        let sizes = [1, 10, 100];
        assert_eq!(GrowthModel::Constant.theoretical(&sizes), vec![1.0, 1.0, 1.0]);
        assert_eq!(GrowthModel::Linear.theoretical(&sizes), vec![1.0, 10.0, 100.0]);
        assert_eq!(
            GrowthModel::Quadratic.theoretical(&sizes),
            vec![1.0, 100.0, 10000.0]
        );
        let logs = GrowthModel::Logarithmic.theoretical(&sizes);
        assert_eq!(logs[0], 0.0);
        assert!(logs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn predict_uses_line_or_flat_level() {
        let line = LineFit { slope: 2.0, intercept: 1.0 };
        assert_eq!(predict(GrowthModel::Linear, Some(&line), 0.0, 3.0), 7.0);
        assert_eq!(predict(GrowthModel::Constant, None, 1.5, 1e6), 1.5);
    }
}
