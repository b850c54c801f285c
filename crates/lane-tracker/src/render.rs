//! Lane overlay drawing

use crate::config::RenderConfig;
use crate::geometry::{LaneGeometry, Point};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

/// Draws tracked lanes onto a transparent overlay
#[derive(Debug, Clone)]
pub struct LaneRenderer {
    config: RenderConfig,
}

impl LaneRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Fresh transparent overlay with both boundaries and the centerline drawn
    pub fn render(&self, geometry: &LaneGeometry, width: u32, height: u32) -> RgbaImage {
        let mut overlay = RgbaImage::new(width, height);
        self.draw(&mut overlay, geometry);
        overlay
    }

    /// Draw onto an existing canvas
    pub fn draw(&self, canvas: &mut RgbaImage, geometry: &LaneGeometry) {
        let boundary = Rgba(self.config.boundary_color);
        let center = Rgba(self.config.centerline_color);

        for line in [geometry.left_line(), geometry.right_line()] {
            draw_thick_line(canvas, line, self.config.boundary_thickness, boundary);
        }
        draw_thick_line(
            canvas,
            geometry.centerline(),
            self.config.centerline_thickness,
            center,
        );
    }
}

/// Parallel 1px strokes at half-pixel spacing across the line normal
fn draw_thick_line(
    canvas: &mut RgbaImage,
    (start, end): (Point, Point),
    thickness: u32,
    color: Rgba<u8>,
) {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let len = (dx * dx + dy * dy).sqrt();
    let to_f32 = |p: Point| (p.0 as f32, p.1 as f32);

    if thickness <= 1 || len < f64::EPSILON {
        draw_line_segment_mut(canvas, to_f32(start), to_f32(end), color);
        return;
    }

    let (nx, ny) = (-dy / len, dx / len);
    let half = (thickness as f64 - 1.0) / 2.0;
    let strokes = thickness * 2 - 1;
    for k in 0..strokes {
        let offset = k as f64 * 0.5 - half;
        let shift = |p: Point| (p.0 + nx * offset, p.1 + ny * offset);
        draw_line_segment_mut(canvas, to_f32(shift(start)), to_f32(shift(end)), color);
    }
}
