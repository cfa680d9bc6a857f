//! Error types.
//!
//! Library code returns small typed errors (`CallError`, `MeasureError`, ...).
//! The binary funnels everything into [`AppError`], which carries the process
//! exit code alongside the human-readable message.

use thiserror::Error;

/// Exit code for invalid flags, invalid size series, or export I/O failures.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code when the requested module/function is not in the catalog.
pub const EXIT_LOOKUP: u8 = 3;
/// Exit code when the candidate fails while being measured.
pub const EXIT_MEASURE: u8 = 4;

#[derive(Clone, Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

/// Failure reported by a candidate function for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The candidate cannot accept this input shape (e.g. wants a sequence, got a size).
    ///
    /// Only this variant triggers the scalar -> sequence retry for candidates
    /// without a declared shape.
    #[error("argument type mismatch: expected {expected}")]
    TypeMismatch { expected: &'static str },
    /// Any other failure inside the candidate.
    #[error("{0}")]
    Failed(String),
}

/// The harness could not produce a timing for one size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("measurement failed at n={size}: {source}")]
pub struct MeasureError {
    pub size: usize,
    #[source]
    pub source: CallError,
}

/// Invalid size/timing series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("size series is empty")]
    Empty,
    #[error("input sizes must be positive (got {0})")]
    NonPositiveSize(usize),
    #[error("input sizes must be strictly increasing ({prev} then {next})")]
    NotIncreasing { prev: usize, next: usize },
    #[error("{sizes} sizes but {times} timings")]
    LengthMismatch { sizes: usize, times: usize },
    #[error("invalid duration {seconds} for n={size} (must be finite and >= 0)")]
    InvalidDuration { size: usize, seconds: f64 },
}

/// Catalog lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown module '{module}' (available: {available})")]
    UnknownModule { module: String, available: String },
    #[error("module '{module}' has no function '{function}'")]
    UnknownFunction { module: String, function: String },
}

impl From<SeriesError> for AppError {
    fn from(err: SeriesError) -> Self {
        AppError::new(EXIT_CONFIG, format!("Invalid size series: {err}"))
    }
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        AppError::new(EXIT_LOOKUP, format!("error: {err}"))
    }
}
