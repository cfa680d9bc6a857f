//! Input/output helpers.
//!
//! - timing table export (CSV) (`export`)
//! - full report read/write (JSON) (`report`)

pub mod export;
pub mod report;

pub use export::*;
pub use report::*;
