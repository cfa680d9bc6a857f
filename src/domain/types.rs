//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between the harness, fitter and selector as plain values
//! - exported to JSON/CSV
//! - rebuilt from fixed numbers in tests without running anything

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// Input sizes used when the caller does not pass `--sizes`.
pub const DEFAULT_SIZES: [usize; 5] = [100, 500, 1000, 2000, 5000];

/// Timed calls per size (after one warm-up call).
pub const DEFAULT_ITERATIONS: u32 = 5;

/// Fewer samples than this cannot distinguish the growth curves.
pub const MIN_SAMPLES: usize = 3;

/// Strictly increasing list of positive input sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct SizeSeries(Vec<usize>);

impl SizeSeries {
    pub fn new(sizes: Vec<usize>) -> Result<Self, SeriesError> {
        validate_sizes(&sizes)?;
        Ok(Self(sizes))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a full run over this series can produce a verdict at all.
    pub fn is_sufficient(&self) -> bool {
        self.0.len() >= MIN_SAMPLES
    }
}

impl Default for SizeSeries {
    fn default() -> Self {
        Self(DEFAULT_SIZES.to_vec())
    }
}

impl TryFrom<Vec<usize>> for SizeSeries {
    type Error = SeriesError;

    fn try_from(value: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SizeSeries> for Vec<usize> {
    fn from(value: SizeSeries) -> Self {
        value.0
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<(), SeriesError> {
    let Some(&first) = sizes.first() else {
        return Err(SeriesError::Empty);
    };
    if first == 0 {
        return Err(SeriesError::NonPositiveSize(first));
    }
    for w in sizes.windows(2) {
        if w[1] <= w[0] {
            return Err(SeriesError::NotIncreasing { prev: w[0], next: w[1] });
        }
    }
    Ok(())
}

/// Average wall-clock time for one input size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    pub size: usize,
    pub seconds: f64,
}

/// One sample per size, in size order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingSeries {
    samples: Vec<TimingSample>,
}

impl TimingSeries {
    /// Build a series from parallel size/duration slices.
    pub fn new(sizes: &[usize], seconds: &[f64]) -> Result<Self, SeriesError> {
        if sizes.len() != seconds.len() {
            return Err(SeriesError::LengthMismatch {
                sizes: sizes.len(),
                times: seconds.len(),
            });
        }
        if !sizes.is_empty() {
            validate_sizes(sizes)?;
        }
        let mut series = Self::default();
        for (&size, &secs) in sizes.iter().zip(seconds) {
            series.push(TimingSample { size, seconds: secs })?;
        }
        Ok(series)
    }

    /// Append a sample; sizes must keep increasing and durations must be finite and >= 0.
    pub fn push(&mut self, sample: TimingSample) -> Result<(), SeriesError> {
        if sample.size == 0 {
            return Err(SeriesError::NonPositiveSize(sample.size));
        }
        if let Some(last) = self.samples.last() {
            if sample.size <= last.size {
                return Err(SeriesError::NotIncreasing {
                    prev: last.size,
                    next: sample.size,
                });
            }
        }
        if !(sample.seconds.is_finite() && sample.seconds >= 0.0) {
            return Err(SeriesError::InvalidDuration {
                size: sample.size,
                seconds: sample.seconds,
            });
        }
        self.samples.push(sample);
        Ok(())
    }

    pub fn samples(&self) -> &[TimingSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.size).collect()
    }

    pub fn seconds(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.seconds).collect()
    }
}

/// Reference growth curve.
///
/// Variant order is the evaluation order used by the selector and matches
/// the priority rank (simpler first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthModel {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
}

/// Priority ranks, indexed by `GrowthModel as usize`. Lower is simpler.
const PRIORITY: [u8; 5] = [0, 1, 2, 3, 4];

impl GrowthModel {
    /// Fixed evaluation order.
    pub const ALL: [GrowthModel; 5] = [
        GrowthModel::Constant,
        GrowthModel::Logarithmic,
        GrowthModel::Linear,
        GrowthModel::Linearithmic,
        GrowthModel::Quadratic,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            GrowthModel::Constant => "O(1) (Constant)",
            GrowthModel::Logarithmic => "O(log n) (Logarithmic)",
            GrowthModel::Linear => "O(n) (Linear)",
            GrowthModel::Linearithmic => "O(n log n) (Linearithmic)",
            GrowthModel::Quadratic => "O(n^2) (Quadratic)",
        }
    }

    /// Tie-break rank; the simpler model wins near-ties.
    pub fn priority(self) -> u8 {
        PRIORITY[self as usize]
    }
}

impl std::fmt::Display for GrowthModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fitted line `t ≈ slope * f(n) + intercept` in normalized time units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Successful fit of one growth model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFit {
    pub model: GrowthModel,
    pub rmse: f64,
    /// `None` for the flat (mean-only) fit of the constant model.
    pub line: Option<LineFit>,
}

/// Why a model was excluded from selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Regression denominator is numerically zero.
    Degenerate,
    /// Fitted slope is not strictly positive: the model does not explain growth.
    NonPositiveSlope,
    /// The residuals did not produce a finite RMSE.
    NonFinite,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::Degenerate => "degenerate regression (no variance in f(n))",
            SkipReason::NonPositiveSlope => "non-positive slope",
            SkipReason::NonFinite => "non-finite residuals",
        }
    }
}

/// Selected model and its error score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub model: GrowthModel,
    pub rmse: f64,
}

/// Diagnostics of the log-log slope check between linear and linearithmic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TieBreak {
    pub observed_slope: f64,
    pub expected_linearithmic_slope: f64,
    pub pick: GrowthModel,
}

/// Declared parameter shape of a candidate function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamShape {
    /// Takes the input size itself.
    Scalar,
    /// Takes a sequence of that many elements.
    Sequence,
    /// Nothing declared; probe with the size, then a sequence.
    Unknown,
}

/// Argument value handed to a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Scalar(usize),
    Sequence(Vec<i64>),
}

impl Input {
    /// Number of elements the candidate sees (the size itself for scalars).
    pub fn len(&self) -> usize {
        match self {
            Input::Scalar(n) => *n,
            Input::Sequence(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus environment and defaults).
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    pub module: String,
    pub function: String,
    pub sizes: SizeSeries,
    pub iterations: u32,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
}

/// A saved estimation report (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub module: String,
    pub function: String,
    pub iterations: u32,
    pub samples: Vec<TimingSample>,
    pub fits: Vec<ModelFit>,
    pub skipped: Vec<SkippedModel>,
    pub tie_break: Option<TieBreak>,
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedModel {
    pub model: GrowthModel,
    pub reason: SkipReason,
}
