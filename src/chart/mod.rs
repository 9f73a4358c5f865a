//! Chart widgets and the pieces they share
//!
//! This module provides:
//! - `LineChart` and `BarChart` widgets for egui
//! - `Scene` and `CanvasItem`: the per-frame primitive list the widgets
//!   build, replayed by both the on-screen painter and the PNG exporter
//! - Value-to-pixel mapping helpers shared by the two chart kinds

mod scene;
mod scale;
mod style;
mod line;
mod bar;

pub use bar::BarChart;
pub use line::LineChart;
pub use scale::FullScale;
pub use scene::{CanvasItem, Scene};
pub use style::ChartStyle;
