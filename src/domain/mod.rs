//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input series (`SizeSeries`, `TimingSeries`)
//! - the growth model enum and fit outputs (`GrowthModel`, `ModelFit`, `Verdict`)
//! - candidate-facing types (`ParamShape`, `Input`)
//! - run configuration and the exported report schema

pub mod types;

pub use types::*;
