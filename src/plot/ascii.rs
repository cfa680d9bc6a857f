//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - measured points (normalized time vs n): `o`
//! - fitted curve of the selected model: `-` line

use crate::domain::{GrowthModel, LineFit, TimingSeries};
use crate::fit::fitter::normalize_times;
use crate::fit::selection::Selection;
use crate::math::mean;
use crate::models::predict;

/// Render measured points plus the selected model's fitted curve.
///
/// Without a verdict only the points are drawn.
pub fn render_ascii_plot(
    series: &TimingSeries,
    selection: &Selection,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let sizes = series.sizes();
    let normalized = normalize_times(&series.seconds());
    let points: Vec<(f64, f64)> = sizes
        .iter()
        .zip(&normalized)
        .map(|(&n, &y)| (n as f64, y))
        .collect();

    let Some((n_min, n_max)) = n_range(&sizes) else {
        return "Plot: not enough distinct sizes to draw.\n".to_string();
    };

    let fitted = selection.verdict.and_then(|v| {
        let fit = selection.fits.iter().find(|f| f.model == v.model)?;
        let flat_level = mean(&normalized).unwrap_or(0.0);
        Some((
            v.model,
            sample_curve(v.model, fit.line.as_ref(), flat_level, n_min, n_max, width),
        ))
    });
    let curve = fitted.as_ref().map(|(_, c)| c.as_slice());

    let (y_min, y_max) = y_range(&points, curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Curve first so points overlay it.
    if let Some(curve) = curve {
        draw_curve(&mut grid, curve, n_min, n_max, y_min, y_max);
    }
    for &(n, y) in &points {
        let x = map_x(n, n_min, n_max, width);
        let yy = map_y(y, y_min, y_max, height);
        grid[yy][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: n=[{n_min}, {n_max}] | normalized time=[{y_min:.2}, {y_max:.2}]"
    ));
    if let Some((model, _)) = &fitted {
        out.push_str(&format!(" | fit: {}", model.display_name()));
    }
    out.push('\n');

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn n_range(sizes: &[usize]) -> Option<(f64, f64)> {
    let min = *sizes.iter().min()? as f64;
    let max = *sizes.iter().max()? as f64;
    (max > min).then_some((min, max))
}

fn sample_curve(
    model: GrowthModel,
    line: Option<&LineFit>,
    flat_level: f64,
    n_min: f64,
    n_max: f64,
    steps: usize,
) -> Vec<(f64, f64)> {
    let steps = steps.max(2);
    (0..steps)
        .map(|i| {
            let u = i as f64 / (steps as f64 - 1.0);
            let n = n_min + u * (n_max - n_min);
            (n, predict(model, line, flat_level, n))
        })
        .collect()
}

fn y_range(points: &[(f64, f64)], curve: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for &(_, y) in points.iter().chain(curve.unwrap_or(&[])) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else if min_y.is_finite() && min_y == max_y {
        // Identical timings: center the flat line.
        Some((min_y - 0.5, max_y + 0.5))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(n: f64, n_min: f64, n_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((n - n_min) / (n_max - n_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // Largest value on row 0.
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], n_min: f64, n_max: f64, y_min: f64, y_max: f64) {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    if curve.len() < 2 || width == 0 {
        return;
    }

    let mut prev = None;
    for &(n, y) in curve {
        let x = map_x(n, n_min, n_max, width);
        let yy = map_y(y, y_min, y_max, height);
        match prev {
            Some((x0, y0)) => draw_line(grid, x0, y0, x, yy, '-'),
            None => grid[yy][x] = '-',
        }
        prev = Some((x, yy));
    }
}

/// Integer line drawing (Bresenham).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let (mut x0, mut y0) = (x0 as isize, y0 as isize);
    let (x1, y1) = (x1 as isize, y1 as isize);

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if let Some(cell) = grid
            .get_mut(y0 as usize)
            .and_then(|row| row.get_mut(x0 as usize))
            .filter(|c| **c == ' ')
        {
            *cell = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelFit, Verdict};

    fn linear_selection() -> Selection {
        Selection {
            verdict: Some(Verdict { model: GrowthModel::Linear, rmse: 0.0 }),
            fits: vec![ModelFit {
                model: GrowthModel::Linear,
                rmse: 0.0,
                line: Some(LineFit { slope: 0.1, intercept: 0.0 }),
            }],
            skipped: vec![],
            tie_break: None,
        }
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let series = TimingSeries::new(&[10, 20, 30], &[1.0, 2.0, 3.0]).unwrap();
        let txt = render_ascii_plot(&series, &linear_selection(), 10, 5);
        let expected = concat!(
            "Plot: n=[10, 30] | normalized time=[0.90, 3.10] | fit: O(n) (Linear)\n",
            "         o\n",
            "      --- \n",
            "    -o    \n",
            " ---      \n",
            "o         \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn points_only_without_verdict() {
        let series = TimingSeries::new(&[10, 20, 30], &[1.0, 2.0, 3.0]).unwrap();
        let sel = Selection {
            verdict: None,
            fits: vec![],
            skipped: vec![],
            tie_break: None,
        };
        let txt = render_ascii_plot(&series, &sel, 10, 5);
        assert!(!txt.contains('-'));
        assert!(!txt.contains("fit:"));
        let body: String = txt.lines().skip(1).collect();
        assert_eq!(body.matches('o').count(), 3);
    }

    #[test]
    fn single_size_is_not_plotted() {
        let series = TimingSeries::new(&[10], &[1.0]).unwrap();
        let txt = render_ascii_plot(&series, &linear_selection(), 10, 5);
        assert!(txt.contains("not enough distinct sizes"));
    }
}
