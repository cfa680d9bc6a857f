//! Reference growth functions `f(n)`.
//!
//! The logarithmic terms are defined as `0` for `n <= 0` so every function is
//! total over the input sizes the fitter might see.

/// `ln(n)`, or `0` when `n <= 0`.
pub fn ln_or_zero(n: f64) -> f64 {
    if n > 0.0 { n.ln() } else { 0.0 }
}

/// `n * ln(n)`, or `0` when `n <= 0`.
pub fn n_ln_n(n: f64) -> f64 {
    if n > 0.0 { n * n.ln() } else { 0.0 }
}

/// `n^2`.
pub fn square(n: f64) -> f64 {
    n * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_terms_vanish_at_non_positive_n() {
        assert_eq!(ln_or_zero(0.0), 0.0);
        assert_eq!(ln_or_zero(-3.0), 0.0);
        assert_eq!(n_ln_n(0.0), 0.0);
        assert_eq!(ln_or_zero(1.0), 0.0);
    }

    #[test]
    fn basis_finite_positive_inputs() {
        for &n in &[1.0, 10.0, 1e3, 1e6] {
            assert!(ln_or_zero(n).is_finite());
            assert!(n_ln_n(n).is_finite());
            assert!(square(n).is_finite());
        }
        assert!((n_ln_n(100.0) - 100.0 * 100f64.ln()).abs() < 1e-9);
    }
}
