//! Rasterisation of filled rounded rectangles.
//!
//! Outlines are built as `tiny_skia` paths and filled anti-aliased into a
//! scratch `Pixmap`, whose coverage is then copied into `image` buffers.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

use crate::layout::Rect;

/// Control-point distance that makes a cubic Bézier approximate a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Closed rounded-rect outline. The radius is clamped to half the shorter side.
pub fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    let (x0, y0) = (rect.x as f32, rect.y as f32);
    let (x1, y1) = (rect.right() as f32, rect.bottom() as f32);
    let r = radius.clamp(0.0, rect.width.min(rect.height) as f32 / 2.0);

    if r == 0.0 {
        let bounds = tiny_skia::Rect::from_ltrb(x0, y0, x1, y1)?;
        return Some(PathBuilder::from_rect(bounds));
    }

    let k = r * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.cubic_to(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.cubic_to(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.cubic_to(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}

fn rasterize(
    width: u32,
    height: u32,
    rect: Rect,
    radius: f32,
    color: Rgba<u8>,
) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    let path = rounded_rect_path(rect, radius)?;

    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;
    pixmap.fill_path(
        &path,
        &paint,
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    Some(pixmap)
}

/// Luminance mask with a rounded rectangle spanning the whole extent:
/// 255 inside, 0 outside, anti-aliased along the curves.
pub fn rounded_rect_mask(width: u32, height: u32, radius: f32) -> GrayImage {
    let rect = Rect::new(0, 0, width, height);
    let Some(pixmap) = rasterize(width, height, rect, radius, Rgba([255, 255, 255, 255])) else {
        return GrayImage::new(width, height);
    };

    let coverage: Vec<u8> = pixmap.pixels().iter().map(|px| px.alpha()).collect();
    GrayImage::from_raw(width, height, coverage).unwrap_or_else(|| GrayImage::new(width, height))
}

/// Paints `color` into `rect`. Covered pixels are replaced rather than
/// blended; anything past the canvas edge is clipped.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, rect: Rect, radius: f32, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    let Some(pixmap) = rasterize(width, height, rect, radius, color) else {
        return;
    };

    for (pixel, painted) in canvas.pixels_mut().zip(pixmap.pixels()) {
        if painted.alpha() == 0 {
            continue;
        }

        let c = painted.demultiply();
        *pixel = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
}
