//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (and pinned by the tests below)

use crate::catalog::CatalogEntry;
use crate::domain::{ParamShape, TimingSample};
use crate::fit::selection::Selection;

const RULE_WIDTH: usize = 35;

/// Header of the streaming timing table.
pub fn format_table_header() -> String {
    format!(
        "{:<15} | {:<15}\n{}\n",
        "Input Size (n)",
        "Avg Time (s)",
        "-".repeat(RULE_WIDTH)
    )
}

/// One `(n, avg seconds)` row.
pub fn format_sample_row(sample: &TimingSample) -> String {
    format!("{:<15} | {:.6e}", sample.size, sample.seconds)
}

/// Per-model diagnostics followed by the verdict line(s).
pub fn format_selection(selection: &Selection) -> String {
    let mut out = String::new();
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    let Some(verdict) = selection.verdict else {
        out.push_str("Insufficient data to estimate complexity.");
        return out;
    };

    out.push_str("Model diagnostics:\n");
    for fit in &selection.fits {
        let chosen = if fit.model == verdict.model { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<26} RMSE={:.3}\n",
            fit.model.display_name(),
            fit.rmse
        ));
    }
    for (model, reason) in &selection.skipped {
        out.push_str(&format!(
            "  (skipped {}) {}\n",
            model.display_name(),
            reason.describe()
        ));
    }

    if let Some(tb) = &selection.tie_break {
        out.push_str(&format!(
            "Tie-break: log-log slope {:.3} (linear 1.000, linearithmic {:.3}) -> {}\n",
            tb.observed_slope,
            tb.expected_linearithmic_slope,
            tb.pick.display_name()
        ));
    }

    out.push('\n');
    out.push_str(&format!("Estimated Complexity: {}\n", verdict.model.display_name()));
    out.push_str(&format!("RMSE: {:.3}", verdict.rmse));
    out
}

/// `--list` output: modules, functions, declared shapes.
pub fn format_catalog(entries: &[CatalogEntry]) -> String {
    let mut out = String::new();
    let mut current = "";
    for e in entries {
        if e.module != current {
            if !current.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("{}:\n", e.module));
            current = e.module;
        }
        let shape = match e.shape {
            ParamShape::Scalar => "n",
            ParamShape::Sequence => "[n]",
            ParamShape::Unknown => "?",
        };
        out.push_str(&format!("  {:<24} {:<4} {}\n", e.name, shape, e.summary));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GrowthModel, ModelFit, SkipReason, TieBreak, Verdict};

    #[test]
    fn table_rows_align_with_header() {
        let header = format_table_header();
        assert!(header.starts_with("Input Size (n)  | Avg Time (s)"));
        let row = format_sample_row(&TimingSample { size: 500, seconds: 1.5e-6 });
        assert_eq!(row, "500             | 1.500000e-6");
    }

    #[test]
    fn insufficient_data_message() {
        let sel = Selection {
            verdict: None,
            fits: vec![],
            skipped: vec![],
            tie_break: None,
        };
        assert!(format_selection(&sel).ends_with("Insufficient data to estimate complexity."));
    }

    #[test]
    fn selection_marks_chosen_model_and_skips() {
        let sel = Selection {
            verdict: Some(Verdict { model: GrowthModel::Linearithmic, rmse: 0.0123 }),
            fits: vec![
                ModelFit { model: GrowthModel::Linear, rmse: 0.0125, line: None },
                ModelFit { model: GrowthModel::Linearithmic, rmse: 0.0123, line: None },
            ],
            skipped: vec![(GrowthModel::Logarithmic, SkipReason::NonPositiveSlope)],
            tie_break: Some(TieBreak {
                observed_slope: 1.158,
                expected_linearithmic_slope: 1.148,
                pick: GrowthModel::Linearithmic,
            }),
        };
        let txt = format_selection(&sel);
        assert!(txt.contains("* O(n log n) (Linearithmic)"));
        assert!(txt.contains("  O(n) (Linear)"));
        assert!(txt.contains("(skipped O(log n) (Logarithmic)) non-positive slope"));
        assert!(txt.contains("Tie-break: log-log slope 1.158"));
        assert!(txt.ends_with("Estimated Complexity: O(n log n) (Linearithmic)\nRMSE: 0.012"));
    }

    #[test]
    fn catalog_listing_groups_modules() {
        let txt = format_catalog(crate::catalog::entries());
        assert!(txt.starts_with("demo:\n"));
        assert!(txt.contains("\nvec:\n"));
        assert!(txt.contains("  sort_unstable"));
    }
}
