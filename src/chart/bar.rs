//! Bar chart widget
//!
//! Same frame-by-frame model as the line chart: `scene` derives every
//! primitive from current state. Bar heights and gridline labels share one
//! full-scale value, which by default tracks the largest observed value.

use eframe::egui::{self, Align2, Color32, Pos2, Rect, Stroke, Vec2};

use super::scale::{self, FullScale};
use super::scene::Scene;
use super::style::{ChartStyle, MIN_CHART_SIZE};

/// Bar chart widget
///
/// Each value becomes one bar. Bars take 80% of their slot, with 10%
/// leading spacing, so the series always fits the plot width.
pub struct BarChart {
    /// Data series, one bar per value
    pub points: Vec<f64>,

    /// Labels under the bars, index-matched to `points`
    pub x_labels: Vec<String>,

    /// Number of horizontal gridline divisions
    pub y_steps: usize,

    /// Bar fill color
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

impl Default for BarChart {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl BarChart {
    /// Create a bar chart from an initial series
    pub fn new(points: Vec<f64>) -> Self {
        Self {
            points,
            x_labels: Vec::new(),
            y_steps: 5,
            color: Color32::from_rgb(0, 0, 255),
            x_title: "X".to_owned(),
            y_title: "Y".to_owned(),
            full_scale: FullScale::Auto,
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
        self.push_bars(&mut scene, plot, full);
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

    /// Horizontal gridlines with value labels on the same scale as the bars
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
    }

    /// Bars with their value labels above and x labels below
    fn push_bars(&self, scene: &mut Scene, plot: Rect, full: f64) {
        let n = self.points.len();
        if n == 0 {
            return;
        }

        for (i, value) in self.points.iter().enumerate() {
            let bar = scale::bar_rect(plot, i, n, *value, full);
            scene.rect(bar, self.color);

            scene.text(
                Pos2::new(bar.center().x, bar.top() - 2.0),
                Align2::CENTER_BOTTOM,
                format!("{:.2}", value),
                self.style.label_size,
                self.style.label_color,
            );

            if let Some(label) = self.x_labels.get(i) {
                scene.text(
                    Pos2::new(bar.center().x, plot.bottom() + 4.0),
                    Align2::CENTER_TOP,
                    label.clone(),
                    self.style.label_size,
                    self.style.label_color,
                );
            }
        }
    }
}
