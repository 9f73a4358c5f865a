//! Value-to-pixel mapping
//!
//! Every piece of chart geometry is a linear map from data space into the
//! plot rectangle. The helpers live here so the line and bar widgets share
//! one set of rules.
//!
//! ## Conventions
//!
//! - Data values grow upward while screen y grows downward, so vertical
//!   maps flip.
//! - A value of 0 sits on the x axis; the full-scale value sits on the top
//!   edge. Values outside that range are clamped to the plot.

use eframe::egui::{Pos2, Rect};

/// Fraction of a bar slot occupied by the bar itself
pub const BAR_WIDTH_FRACTION: f32 = 0.8;

/// Fraction of a bar slot left as spacing ahead of each bar
pub const BAR_SPACING_FRACTION: f32 = 0.1;

/// Value granularity used when growing the gridline count
pub const Y_STEP_UNIT: f64 = 0.2;

/// How the top edge of the plot relates to the data
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FullScale {
    /// A fixed value maps to the top edge
    Fixed(f64),
    /// The largest observed value maps to the top edge
    Auto,
}

/// Resolve the data value mapped to the top edge of the plot.
///
/// Non-positive fixed values and empty or non-positive series fall back
/// to 1.0, so callers can always divide by the result.
pub fn resolve_full_scale(mode: FullScale, points: &[f64]) -> f64 {
    match mode {
        FullScale::Fixed(full) if full > 0.0 => full,
        FullScale::Fixed(_) => 1.0,
        FullScale::Auto => {
            let max = points.iter().copied().fold(0.0_f64, f64::max);
            if max > 0.0 {
                max
            } else {
                1.0
            }
        }
    }
}

/// X position of line point `i` out of `n`, spread across the plot width.
///
/// The first point sits on the left edge, the last on the right edge.
/// With fewer than two points there is no spread to compute; callers skip
/// line geometry entirely in that case.
pub fn line_x(plot: Rect, i: usize, n: usize) -> f32 {
    if n < 2 {
        return plot.left();
    }
    plot.left() + i as f32 * plot.width() / (n - 1) as f32
}

/// Y position for a data value, clamped to the plot's vertical range
pub fn value_y(plot: Rect, value: f64, full: f64) -> f32 {
    let t = (value / full).clamp(0.0, 1.0) as f32;
    plot.bottom() - t * plot.height()
}

/// Screen position of line point `i` holding `value`
pub fn line_point(plot: Rect, i: usize, n: usize, value: f64, full: f64) -> Pos2 {
    Pos2::new(line_x(plot, i, n), value_y(plot, value, full))
}

/// Horizontal gridline rows, top to bottom.
///
/// Returns `steps + 1` pairs of `(screen y, data value at that height)`.
/// The top row carries the full-scale value, the bottom row 0.0. A zero
/// step count is clamped to 1.
pub fn grid_rows(plot: Rect, steps: usize, full: f64) -> Vec<(f32, f64)> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let y = plot.top() + plot.height() * i as f32 / steps as f32;
            let value = full * (steps - i) as f64 / steps as f64;
            (y, value)
        })
        .collect()
}

/// Width of one bar when `n` bars share the plot
pub fn bar_width(plot: Rect, n: usize) -> f32 {
    plot.width() / n as f32 * BAR_WIDTH_FRACTION
}

/// Spacing ahead of each bar when `n` bars share the plot
pub fn bar_spacing(plot: Rect, n: usize) -> f32 {
    plot.width() / n as f32 * BAR_SPACING_FRACTION
}

/// Left edge of bar `i` out of `n`
pub fn bar_x(plot: Rect, i: usize, n: usize) -> f32 {
    plot.left() + i as f32 * (bar_width(plot, n) + bar_spacing(plot, n)) + bar_spacing(plot, n)
}

/// Filled rectangle for bar `i` holding `value`
pub fn bar_rect(plot: Rect, i: usize, n: usize, value: f64, full: f64) -> Rect {
    let left = bar_x(plot, i, n);
    let top = value_y(plot, value, full);
    Rect::from_min_max(
        Pos2::new(left, top),
        Pos2::new(left + bar_width(plot, n), plot.bottom()),
    )
}

/// Gridline count after appending `value`: grows to cover the value in
/// `Y_STEP_UNIT` increments, never shrinks, never drops below 1
pub fn grown_y_steps(current: usize, value: f64) -> usize {
    let needed = (value / Y_STEP_UNIT).ceil() as usize;
    current.max(needed).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Vec2;

    fn plot() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(600.0, 400.0))
    }

    #[test]
    fn test_line_point_positions() {
        let values = [0.1, 0.4, 0.9, 0.2, 0.7];
        let expected_x = [0.0, 150.0, 300.0, 450.0, 600.0];
        let expected_y = [360.0, 240.0, 40.0, 320.0, 120.0];

        for (i, value) in values.iter().enumerate() {
            let pos = line_point(plot(), i, values.len(), *value, 1.0);
            assert!((pos.x - expected_x[i]).abs() < 1e-3);
            assert!((pos.y - expected_y[i]).abs() < 1e-3);
        }
    }

    #[test]
    fn test_line_x_monotonic_within_plot() {
        let n = 7;
        let mut last = f32::MIN;
        for i in 0..n {
            let x = line_x(plot(), i, n);
            assert!(x > last);
            assert!(x >= plot().left() - 1e-3);
            assert!(x <= plot().right() + 1e-3);
            last = x;
        }
    }

    #[test]
    fn test_value_y_clamps_out_of_range() {
        assert!((value_y(plot(), 2.0, 1.0) - 0.0).abs() < 1e-3);
        assert!((value_y(plot(), -1.0, 1.0) - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_grid_rows_count_and_spacing() {
        let rows = grid_rows(plot(), 5, 1.0);
        assert_eq!(rows.len(), 6);

        for (i, (y, value)) in rows.iter().enumerate() {
            assert!((y - i as f32 * 80.0).abs() < 1e-3);
            assert!((value - (1.0 - i as f64 * 0.2)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_grid_rows_clamp_zero_steps() {
        assert_eq!(grid_rows(plot(), 0, 1.0).len(), 2);
    }

    #[test]
    fn test_bar_slots() {
        let n = 5;
        assert!((bar_width(plot(), n) - 96.0).abs() < 1e-3);
        assert!((bar_spacing(plot(), n) - 12.0).abs() < 1e-3);

        let mut last = f32::MIN;
        for i in 0..n {
            let x = bar_x(plot(), i, n);
            assert!(x > last);
            last = x;
        }

        // Each slot keeps its trailing tenth unused, so the last bar ends
        // at nine tenths of the plot width
        let right = bar_x(plot(), n - 1, n) + bar_width(plot(), n);
        assert!((right - 540.0).abs() < 1e-3);
    }

    #[test]
    fn test_bar_rect_geometry() {
        let rect = bar_rect(plot(), 0, 5, 0.5, 1.0);
        assert!((rect.left() - 12.0).abs() < 1e-3);
        assert!((rect.top() - 200.0).abs() < 1e-3);
        assert!((rect.bottom() - 400.0).abs() < 1e-3);
        assert!((rect.width() - 96.0).abs() < 1e-3);
    }

    #[test]
    fn test_full_scale_resolution() {
        assert_eq!(resolve_full_scale(FullScale::Fixed(2.0), &[9.0]), 2.0);
        assert_eq!(resolve_full_scale(FullScale::Fixed(0.0), &[9.0]), 1.0);
        assert_eq!(resolve_full_scale(FullScale::Auto, &[0.1, 0.9, 0.4]), 0.9);
        assert_eq!(resolve_full_scale(FullScale::Auto, &[]), 1.0);
        assert_eq!(resolve_full_scale(FullScale::Auto, &[0.0, -3.0]), 1.0);
    }

    #[test]
    fn test_grown_y_steps() {
        // Values already covered leave the count alone
        assert_eq!(grown_y_steps(5, 0.35), 5);
        assert_eq!(grown_y_steps(5, 1.0), 5);

        // ceil(3.7 / 0.2) = 19
        assert_eq!(grown_y_steps(5, 3.7), 19);

        assert_eq!(grown_y_steps(0, 0.1), 1);
        assert_eq!(grown_y_steps(8, -2.0), 8);
    }
}
