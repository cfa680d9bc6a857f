//! Reporting utilities: the timing table, model diagnostics and the verdict.

pub mod format;

pub use format::*;
