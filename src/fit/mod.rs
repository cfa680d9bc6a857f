//! Curve fitting orchestration.
//!
//! Responsibilities:
//!
//! - normalize timings and fit each growth model (`fitter`)
//! - select the best model with simplicity tie-breaks (`selection`)

pub mod fitter;
pub mod selection;

pub use fitter::*;
pub use selection::*;
