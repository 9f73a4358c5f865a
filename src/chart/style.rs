//! Shared visual defaults for the chart widgets

use eframe::egui::{Color32, Margin, Pos2, Rect, Vec2};

/// Smallest size a chart allocates for itself
pub const MIN_CHART_SIZE: Vec2 = Vec2::new(400.0, 300.0);

/// Colors, stroke widths and label layout shared by both chart kinds.
///
/// The data mark color is not in here; it lives on the widget itself.
#[derive(Clone, Debug)]
pub struct ChartStyle {
    /// Widget background fill
    pub background: Color32,

    /// Axis line and axis title color
    pub axis_color: Color32,

    /// Gridline color
    pub grid_color: Color32,

    /// Tick and value label color
    pub label_color: Color32,

    /// Axis stroke width in pixels
    pub axis_width: f32,

    /// Gridline stroke width in pixels
    pub grid_width: f32,

    /// Stroke width of the data polyline in pixels
    pub mark_width: f32,

    /// Axis title text size in points
    pub title_size: f32,

    /// Tick and value label text size in points
    pub label_size: f32,

    /// Space kept around the plot area so labels stay inside the widget
    pub margin: Margin,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            axis_color: Color32::BLACK,
            grid_color: Color32::from_rgb(200, 200, 200),
            label_color: Color32::BLACK,
            axis_width: 1.0,
            grid_width: 1.0,
            mark_width: 2.0,
            title_size: 12.0,
            label_size: 10.0,
            margin: Margin {
                left: 44.0,
                right: 12.0,
                top: 16.0,
                bottom: 22.0,
            },
        }
    }
}

impl ChartStyle {
    /// The plot area: the widget rect shrunk by the label margin
    pub fn plot_rect(&self, rect: Rect) -> Rect {
        Rect::from_min_max(
            Pos2::new(rect.left() + self.margin.left, rect.top() + self.margin.top),
            Pos2::new(
                rect.right() - self.margin.right,
                rect.bottom() - self.margin.bottom,
            ),
        )
    }
}
