//! PNG export for chart scenes
//!
//! Replays a `Scene` into an RGBA image so a chart saves to disk looking
//! the way it does on screen. Text uses egui's embedded proportional font,
//! pulled out through `FontDefinitions`.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use eframe::egui::{Align, Color32, FontDefinitions, FontFamily, Vec2};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut, text_size};
use imageproc::rect::Rect as PixelRect;
use thiserror::Error;

use crate::chart::{CanvasItem, Scene};

/// Errors that can occur while exporting a chart
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("No usable font in the default egui font set")]
    FontUnavailable,

    #[error("Export size must be at least one pixel in both dimensions")]
    EmptySize,
}

/// Render a scene into an RGBA image of the given pixel size
pub fn render_png(scene: &Scene, size: Vec2) -> Result<RgbaImage, ExportError> {
    let width = size.x.round() as u32;
    let height = size.y.round() as u32;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptySize);
    }

    let font = default_font()?;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    for item in &scene.items {
        match item {
            CanvasItem::Rect { rect, fill } => {
                let w = rect.width().round() as i32;
                let h = rect.height().round() as i32;
                if w > 0 && h > 0 {
                    let pixel_rect =
                        PixelRect::at(rect.left().round() as i32, rect.top().round() as i32)
                            .of_size(w as u32, h as u32);
                    draw_filled_rect_mut(&mut img, pixel_rect, to_rgba(*fill));
                }
            }
            CanvasItem::Segment { from, to, stroke } => {
                let color = to_rgba(stroke.color);

                // Thicken by stacking one-pixel lines offset across the
                // segment's dominant direction
                let horizontal = (to.x - from.x).abs() >= (to.y - from.y).abs();
                let passes = (stroke.width.round() as i32).max(1);
                for pass in 0..passes {
                    let offset = alternating_offset(pass) as f32;
                    let (dx, dy) = if horizontal { (0.0, offset) } else { (offset, 0.0) };
                    draw_line_segment_mut(
                        &mut img,
                        (from.x + dx, from.y + dy),
                        (to.x + dx, to.y + dy),
                        color,
                    );
                }
            }
            CanvasItem::Text {
                pos,
                anchor,
                text,
                size,
                color,
            } => {
                let scale = PxScale::from(*size);
                let (w, h) = text_size(scale, &font, text);
                let x = anchored(pos.x, w as f32, anchor.x());
                let y = anchored(pos.y, h as f32, anchor.y());
                draw_text_mut(
                    &mut img,
                    to_rgba(*color),
                    x.round() as i32,
                    y.round() as i32,
                    scale,
                    &font,
                    text,
                );
            }
        }
    }

    Ok(img)
}

/// Render a scene and write it to `path` as a PNG file
pub fn save_png(scene: &Scene, size: Vec2, path: &Path) -> Result<(), ExportError> {
    let img = render_png(scene, size)?;
    img.save_with_format(path, ImageFormat::Png)?;
    log::info!("Exported chart to {}", path.display());
    Ok(())
}

/// Offsets 0, 1, -1, 2, -2, ... for line thickening passes
fn alternating_offset(pass: i32) -> i32 {
    if pass % 2 == 1 {
        (pass + 1) / 2
    } else {
        -(pass / 2)
    }
}

/// Shift an anchored position to the top-left corner imageproc draws from
fn anchored(pos: f32, extent: f32, align: Align) -> f32 {
    match align {
        Align::Min => pos,
        Align::Center => pos - extent / 2.0,
        Align::Max => pos - extent,
    }
}

/// Pull the first proportional font out of egui's embedded set
fn default_font() -> Result<FontVec, ExportError> {
    let defs = FontDefinitions::default();
    let name = defs
        .families
        .get(&FontFamily::Proportional)
        .and_then(|names| names.first())
        .ok_or(ExportError::FontUnavailable)?;
    let data = defs
        .font_data
        .get(name)
        .ok_or(ExportError::FontUnavailable)?;
    FontVec::try_from_vec(data.font.to_vec()).map_err(|_| ExportError::FontUnavailable)
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), color.a()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::BarChart;
    use eframe::egui::{Margin, Pos2, Rect};

    #[test]
    fn test_empty_size_rejected() {
        let scene = Scene::new();
        assert!(matches!(
            render_png(&scene, Vec2::ZERO),
            Err(ExportError::EmptySize)
        ));
    }

    #[test]
    fn test_bar_and_background_pixels() {
        let mut chart = BarChart::new(vec![1.0]);
        chart.style.margin = Margin::ZERO;

        let size = Vec2::new(200.0, 100.0);
        let scene = chart.scene(Rect::from_min_size(Pos2::ZERO, size));
        let img = render_png(&scene, size).unwrap();

        assert_eq!(img.dimensions(), (200, 100));

        // Inside the single bar (it spans x 20..180 at full height)
        assert_eq!(img.get_pixel(100, 50).0, [0, 0, 255, 255]);

        // Left of the bar, on a row without a gridline
        assert_eq!(img.get_pixel(10, 50).0, [255, 255, 255, 255]);

        // Gridline row outside the bar
        assert_eq!(img.get_pixel(5, 20).0, [200, 200, 200, 255]);
    }

    #[test]
    fn test_alternating_offsets() {
        let offsets: Vec<i32> = (0..5).map(alternating_offset).collect();
        assert_eq!(offsets, vec![0, 1, -1, 2, -2]);
    }
}
