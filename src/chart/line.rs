//! Line chart widget
//!
//! Draws a value series as a connected polyline over axes, gridlines and
//! labels. Nothing is cached: `scene` derives every primitive from current
//! state, so mutating `points` (or any other field) takes effect on the
//! next frame.

use eframe::egui::{self, Align2, Color32, Pos2, Rect, Stroke, Vec2};

use super::scale::{self, FullScale};
use super::scene::Scene;
use super::style::{ChartStyle, MIN_CHART_SIZE};

/// Line chart widget
///
/// Values are plotted against their index: the first point sits on the
/// left edge of the plot, the last on the right edge.
pub struct LineChart {
    /// Data series, drawn left to right
    pub points: Vec<f64>,

    /// Labels under the vertical gridlines, index-matched to `points`
    pub x_labels: Vec<String>,

    /// Number of horizontal gridline divisions
    pub y_steps: usize,

    /// Polyline color
    pub color: Color32,

    /// Horizontal axis title
    pub x_title: String,

    /// Vertical axis title
    pub y_title: String,

    /// Which data value maps to the top of the plot
    pub full_scale: FullScale,

    /// Colors, stroke widths and label layout
    pub style: ChartStyle,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LineChart {
    /// Create a line chart from an initial series.
    ///
    /// Values are assumed to lie in `[0, 1]`; set a different `full_scale`
    /// when they don't.
    pub fn new(points: Vec<f64>) -> Self {
        Self {
            points,
            x_labels: Vec::new(),
            y_steps: 5,
            color: Color32::from_rgb(0, 0, 255),
            x_title: "X".to_owned(),
            y_title: "Y".to_owned(),
            full_scale: FullScale::Fixed(1.0),
            style: ChartStyle::default(),
        }
    }

    /// Append a value, growing the gridline count to cover it
    pub fn add_value(&mut self, value: f64) {
        self.points.push(value);
        self.y_steps = scale::grown_y_steps(self.y_steps, value);
    }

    /// Build this frame's primitives for the given widget rect
    pub fn scene(&self, rect: Rect) -> Scene {
        let mut scene = Scene::new();
        let plot = self.style.plot_rect(rect);
        let full = scale::resolve_full_scale(self.full_scale, &self.points);

        scene.rect(rect, self.style.background);
        self.push_axes(&mut scene, plot);
        self.push_grid(&mut scene, plot, full);
        self.push_line(&mut scene, plot, full);
        scene
    }

    /// Draw the chart into the UI, never smaller than `MIN_CHART_SIZE`
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `size` - Desired widget size (or None for available space)
    ///
    /// # Returns
    /// The response from the widget
    pub fn show(&self, ui: &mut egui::Ui, size: Option<Vec2>) -> egui::Response {
        let size = size
            .unwrap_or_else(|| ui.available_size())
            .max(MIN_CHART_SIZE);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        self.scene(response.rect).paint(&painter);
        response
    }

    /// X axis along the bottom, Y axis along the left, titles in the corners
    fn push_axes(&self, scene: &mut Scene, plot: Rect) {
        let stroke = Stroke::new(self.style.axis_width, self.style.axis_color);
        scene.segment(plot.left_bottom(), plot.right_bottom(), stroke);
        scene.segment(plot.left_top(), plot.left_bottom(), stroke);

        scene.text(
            Pos2::new(plot.right() - 4.0, plot.bottom() - 4.0),
            Align2::RIGHT_BOTTOM,
            self.x_title.clone(),
            self.style.title_size,
            self.style.axis_color,
        );
        scene.text(
            Pos2::new(plot.left() + 4.0, plot.top() + 2.0),
            Align2::LEFT_TOP,
            self.y_title.clone(),
            self.style.title_size,
            self.style.axis_color,
        );
    }

    /// Horizontal gridlines with value labels, plus one vertical gridline
    /// per point with its x label underneath
    fn push_grid(&self, scene: &mut Scene, plot: Rect, full: f64) {
        let stroke = Stroke::new(self.style.grid_width, self.style.grid_color);

        for (y, value) in scale::grid_rows(plot, self.y_steps, full) {
            scene.segment(Pos2::new(plot.left(), y), Pos2::new(plot.right(), y), stroke);
            scene.text(
                Pos2::new(plot.left() - 4.0, y),
                Align2::RIGHT_CENTER,
                format!("{:.1}", value),
                self.style.label_size,
                self.style.label_color,
            );
        }

        // A single point has no horizontal spread; skip the verticals
        let n = self.points.len();
        if n < 2 {
            return;
        }
        for i in 0..n {
            let x = scale::line_x(plot, i, n);
            scene.segment(Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom()), stroke);
            if let Some(label) = self.x_labels.get(i) {
                scene.text(
                    Pos2::new(x, plot.bottom() + 4.0),
                    Align2::CENTER_TOP,
                    label.clone(),
                    self.style.label_size,
                    self.style.label_color,
                );
            }
        }
    }

    /// The data polyline; needs at least two points
    fn push_line(&self, scene: &mut Scene, plot: Rect, full: f64) {
        let n = self.points.len();
        if n < 2 {
            return;
        }

        let stroke = Stroke::new(self.style.mark_width, self.color);
        for (i, pair) in self.points.windows(2).enumerate() {
            scene.segment(
                scale::line_point(plot, i, n, pair[0], full),
                scale::line_point(plot, i + 1, n, pair[1], full),
                stroke,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::CanvasItem;
    use eframe::egui::Margin;

    fn chart_600x400() -> (LineChart, Rect) {
        let mut chart = LineChart::new(vec![0.1, 0.4, 0.9, 0.2, 0.7]);
        chart.style.margin = Margin::ZERO;
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(600.0, 400.0));
        (chart, rect)
    }

    fn mark_segments(chart: &LineChart, rect: Rect) -> Vec<(Pos2, Pos2)> {
        chart
            .scene(rect)
            .items
            .iter()
            .filter_map(|item| match item {
                CanvasItem::Segment { from, to, stroke } if stroke.color == chart.color => {
                    Some((*from, *to))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_polyline_positions() {
        let (chart, rect) = chart_600x400();
        let segments = mark_segments(&chart, rect);
        assert_eq!(segments.len(), 4);

        let expected_x = [0.0, 150.0, 300.0, 450.0, 600.0];
        let expected_y = [360.0, 240.0, 40.0, 320.0, 120.0];
        for (i, (from, to)) in segments.iter().enumerate() {
            assert!((from.x - expected_x[i]).abs() < 1e-3);
            assert!((from.y - expected_y[i]).abs() < 1e-3);
            assert!((to.x - expected_x[i + 1]).abs() < 1e-3);
            assert!((to.y - expected_y[i + 1]).abs() < 1e-3);
        }
    }

    #[test]
    fn test_segments_connect() {
        let (chart, rect) = chart_600x400();
        let segments = mark_segments(&chart, rect);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_grid_counts() {
        let (chart, rect) = chart_600x400();
        let scene = chart.scene(rect);

        let grid = scene
            .items
            .iter()
            .filter(|item| {
                matches!(item, CanvasItem::Segment { stroke, .. }
                    if stroke.color == chart.style.grid_color)
            })
            .count();

        // y_steps + 1 horizontals plus one vertical per point
        assert_eq!(grid, chart.y_steps + 1 + chart.points.len());
    }

    #[test]
    fn test_no_line_below_two_points() {
        let mut chart = LineChart::new(vec![0.5]);
        chart.style.margin = Margin::ZERO;
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(600.0, 400.0));
        assert!(mark_segments(&chart, rect).is_empty());

        chart.points.clear();
        assert!(mark_segments(&chart, rect).is_empty());
    }

    #[test]
    fn test_add_value_appends_and_grows_steps() {
        let mut chart = LineChart::new(Vec::new());
        assert_eq!(chart.y_steps, 5);

        chart.add_value(3.7);
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.y_steps, 19);

        // Small values never shrink the grid back
        chart.add_value(0.1);
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.y_steps, 19);
    }

    #[test]
    fn test_x_labels_emitted() {
        let (mut chart, rect) = chart_600x400();
        chart.x_labels = vec!["a".into(), "b".into()];

        let labels: Vec<String> = chart
            .scene(rect)
            .items
            .iter()
            .filter_map(|item| match item {
                CanvasItem::Text { text, anchor, .. } if *anchor == Align2::CENTER_TOP => {
                    Some(text.clone())
                }
                _ => None,
            })
            .collect();

        // Points without a matching label get none
        assert_eq!(labels, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn test_background_first() {
        let (chart, rect) = chart_600x400();
        let scene = chart.scene(rect);
        assert!(matches!(
            scene.items.first(),
            Some(CanvasItem::Rect { fill, .. }) if *fill == chart.style.background
        ));
    }

    #[test]
    fn test_top_tick_label_is_full_scale() {
        let (chart, rect) = chart_600x400();
        let scene = chart.scene(rect);

        // Tick labels hang left of the plot; the first one is the top row
        let top_tick = scene.items.iter().find_map(|item| match item {
            CanvasItem::Text { text, pos, .. } if pos.x < rect.left() => {
                Some((text.clone(), pos.y))
            }
            _ => None,
        });

        let (text, y) = top_tick.unwrap();
        assert_eq!(text, "1.0");
        assert!((y - rect.top()).abs() < 1e-3);
    }
}
