//! Choosing the argument shape for a candidate.
//!
//! Declared shapes are authoritative: a candidate that declares a scalar
//! always receives the size, and a failing declared call is a hard failure.
//! Only candidates without a declaration are probed (size first, then a
//! sequence on a type mismatch).

use tracing::{debug, trace};

use crate::bench::{Candidate, time_call};
use crate::domain::{Input, ParamShape};
use crate::error::{CallError, MeasureError};

/// How inputs are produced for one candidate, resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    DeclaredScalar,
    DeclaredSequence,
    Unknown,
}

impl Dispatch {
    pub fn resolve<C: Candidate + ?Sized>(candidate: &C) -> Self {
        match candidate.shape() {
            ParamShape::Scalar => Dispatch::DeclaredScalar,
            ParamShape::Sequence => Dispatch::DeclaredSequence,
            ParamShape::Unknown => Dispatch::Unknown,
        }
    }
}

/// `n` sequential integers `0..n`.
pub fn synthesize_sequence(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// Measure one size with the resolved dispatch.
pub fn measure<C: Candidate + ?Sized>(
    candidate: &C,
    dispatch: Dispatch,
    n: usize,
    iterations: u32,
) -> Result<f64, MeasureError> {
    let wrap = |source: CallError| MeasureError { size: n, source };

    match dispatch {
        Dispatch::DeclaredScalar => time_call(candidate, &Input::Scalar(n), iterations).map_err(wrap),
        Dispatch::DeclaredSequence => {
            let input = Input::Sequence(synthesize_sequence(n));
            time_call(candidate, &input, iterations).map_err(wrap)
        }
        Dispatch::Unknown => match time_call(candidate, &Input::Scalar(n), iterations) {
            Err(CallError::TypeMismatch { expected }) => {
                trace!(n, expected, "scalar rejected, retrying with a sequence");
                let input = Input::Sequence(synthesize_sequence(n));
                time_call(candidate, &input, iterations).map_err(wrap)
            }
            other => {
                if let Err(err) = &other {
                    debug!(n, %err, "scalar probe failed");
                }
                other.map_err(wrap)
            }
        },
    }
}
