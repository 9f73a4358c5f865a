//! Drawable primitives shared by the chart widgets
//!
//! Widgets never paint directly. On every layout pass they build a `Scene`:
//! a flat list of `CanvasItem`s in absolute screen coordinates. `show`
//! replays the scene onto an `egui::Painter`, and the PNG exporter replays
//! the same scene into an image buffer, so both outputs stay in sync.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke};

/// A single positioned drawing primitive
#[derive(Clone, Debug)]
pub enum CanvasItem {
    /// Axis-aligned filled rectangle
    Rect { rect: Rect, fill: Color32 },

    /// Straight line segment
    Segment { from: Pos2, to: Pos2, stroke: Stroke },

    /// Text label anchored at `pos`
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// One frame's worth of primitives, rebuilt from widget state every pass
#[derive(Clone, Debug)]
pub struct Scene {
    pub items: Vec<CanvasItem>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(64),
        }
    }

    pub fn rect(&mut self, rect: Rect, fill: Color32) {
        self.items.push(CanvasItem::Rect { rect, fill });
    }

    pub fn segment(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.items.push(CanvasItem::Segment { from, to, stroke });
    }

    pub fn text(
        &mut self,
        pos: Pos2,
        anchor: Align2,
        text: impl Into<String>,
        size: f32,
        color: Color32,
    ) {
        self.items.push(CanvasItem::Text {
            pos,
            anchor,
            text: text.into(),
            size,
            color,
        });
    }

    /// Replay every item onto an egui painter, in insertion order
    pub fn paint(&self, painter: &egui::Painter) {
        for item in &self.items {
            match item {
                CanvasItem::Rect { rect, fill } => {
                    painter.rect_filled(*rect, 0.0, *fill);
                }
                CanvasItem::Segment { from, to, stroke } => {
                    painter.line_segment([*from, *to], *stroke);
                }
                CanvasItem::Text {
                    pos,
                    anchor,
                    text,
                    size,
                    color,
                } => {
                    painter.text(*pos, *anchor, text, FontId::proportional(*size), *color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_helpers() {
        let mut scene = Scene::new();
        scene.rect(
            Rect::from_min_max(Pos2::ZERO, Pos2::new(10.0, 10.0)),
            Color32::WHITE,
        );
        scene.segment(
            Pos2::ZERO,
            Pos2::new(5.0, 5.0),
            Stroke::new(1.0, Color32::BLACK),
        );
        scene.text(Pos2::ZERO, Align2::LEFT_TOP, "hi", 10.0, Color32::BLACK);

        assert_eq!(scene.items.len(), 3);
        assert!(matches!(scene.items[0], CanvasItem::Rect { .. }));
        assert!(matches!(scene.items[1], CanvasItem::Segment { .. }));
        assert!(matches!(scene.items[2], CanvasItem::Text { .. }));
    }

    #[test]
    fn test_text_owns_its_string() {
        let mut scene = Scene::new();
        let label = String::from("0.5");
        scene.text(Pos2::ZERO, Align2::CENTER_CENTER, label, 10.0, Color32::BLACK);

        match &scene.items[0] {
            CanvasItem::Text { text, .. } => assert_eq!(text, "0.5"),
            other => panic!("expected text item, got {:?}", other),
        }
    }
}
