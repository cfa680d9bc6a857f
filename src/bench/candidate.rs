//! The function-under-test interface.

use crate::domain::{Input, ParamShape};
use crate::error::CallError;

/// A function whose running time is being estimated.
///
/// Implementations should do their work on every call; wrap results in
/// [`std::hint::black_box`] so the optimizer cannot drop it. Any per-call
/// state reset is the candidate's own responsibility.
pub trait Candidate {
    /// Declared parameter shape. `Unknown` makes the harness probe.
    fn shape(&self) -> ParamShape {
        ParamShape::Unknown
    }

    fn call(&self, input: &Input) -> Result<(), CallError>;
}

/// Candidate declared to take the size itself.
pub struct ScalarFn<F>(pub F);

impl<F: Fn(usize)> Candidate for ScalarFn<F> {
    fn shape(&self) -> ParamShape {
        ParamShape::Scalar
    }

    fn call(&self, input: &Input) -> Result<(), CallError> {
        match input {
            Input::Scalar(n) => {
                (self.0)(*n);
                Ok(())
            }
            Input::Sequence(_) => Err(CallError::TypeMismatch { expected: "integer" }),
        }
    }
}

/// Candidate declared to take a sequence.
pub struct SequenceFn<F>(pub F);

impl<F: Fn(&[i64])> Candidate for SequenceFn<F> {
    fn shape(&self) -> ParamShape {
        ParamShape::Sequence
    }

    fn call(&self, input: &Input) -> Result<(), CallError> {
        match input {
            Input::Sequence(v) => {
                (self.0)(v);
                Ok(())
            }
            Input::Scalar(_) => Err(CallError::TypeMismatch { expected: "sequence" }),
        }
    }
}

/// Candidate with no declared shape; it inspects the input itself.
pub struct UntypedFn<F>(pub F);

impl<F: Fn(&Input) -> Result<(), CallError>> Candidate for UntypedFn<F> {
    fn call(&self, input: &Input) -> Result<(), CallError> {
        (self.0)(input)
    }
}
