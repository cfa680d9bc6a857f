//! Wall-clock timing of repeated candidate calls.

use std::time::Instant;

use crate::bench::Candidate;
use crate::domain::Input;
use crate::error::CallError;

/// Average seconds per call over `iterations` calls, after one untimed warm-up.
///
/// The warm-up absorbs one-time costs (allocator growth, page faults, lazy
/// statics). Any failing call aborts the measurement; a failure is never
/// reported as a zero duration.
pub fn time_call<C: Candidate + ?Sized>(
    candidate: &C,
    input: &Input,
    iterations: u32,
) -> Result<f64, CallError> {
    let iterations = iterations.max(1);

    candidate.call(input)?;

    let start = Instant::now();
    for _ in 0..iterations {
        candidate.call(input)?;
    }
    let elapsed = start.elapsed();

    Ok(elapsed.as_secs_f64() / f64::from(iterations))
}
