use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Rgba, RgbaImage};
use log::debug;

use crate::layout::IconLayout;
use crate::output::{encode_png, write_atomic};
use crate::shape;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Loads `input`, turns it into a rounded app icon with a drop shadow and
/// writes it to `output` as PNG.
pub fn build_icon(input: &Path, output: &Path) -> Result<()> {
    let source =
        image::open(input).with_context(|| format!("Failed to open image: {}", input.display()))?;
    debug!(
        "Loaded {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let canvas = render_icon(&source, &IconLayout::macos());
    let png = encode_png(&canvas)?;
    write_atomic(output, &png)?;

    debug!("Wrote {} bytes to {}", png.len(), output.display());
    Ok(())
}

/// Runs the in-memory part of the pipeline and returns the finished canvas.
pub fn render_icon(source: &DynamicImage, layout: &IconLayout) -> RgbaImage {
    let size = layout.shape_size();
    let mask = shape::rounded_rect_mask(size, size, layout.corner_radius());

    let mut content = fit_cover(source, size);
    apply_mask(&mut content, &mask);
    debug!("Content layer {}x{}", content.width(), content.height());

    let shadow = render_shadow(layout);
    debug!("Shadow blurred with sigma {}", layout.shadow_blur_sigma());

    let side = layout.canvas_size();
    let mut canvas = RgbaImage::from_pixel(side, side, TRANSPARENT);
    imageops::overlay(&mut canvas, &shadow, 0, 0);
    let content_rect = layout.content_rect();
    imageops::overlay(
        &mut canvas,
        &content,
        content_rect.x as i64,
        content_rect.y as i64,
    );

    canvas
}

/// Scales `source` to cover a `size`×`size` square and crops the overflow
/// evenly from both ends of the longer axis.
pub fn fit_cover(source: &DynamicImage, size: u32) -> RgbaImage {
    source
        .resize_to_fill(size, size, FilterType::CatmullRom)
        .into_rgba8()
}

/// Replaces the alpha channel of `image` with `mask`. Colour is left as is.
pub fn apply_mask(image: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(image.dimensions(), mask.dimensions());

    for (pixel, coverage) in image.pixels_mut().zip(mask.pixels()) {
        pixel[3] = coverage[0];
    }
}

/// Full-canvas shadow layer: a semi-transparent black rounded rect, blurred.
pub fn render_shadow(layout: &IconLayout) -> RgbaImage {
    let side = layout.canvas_size();
    let mut shadow = RgbaImage::from_pixel(side, side, TRANSPARENT);
    shape::fill_rounded_rect(
        &mut shadow,
        layout.shadow_rect(),
        layout.corner_radius(),
        Rgba([0, 0, 0, layout.shadow_alpha()]),
    );

    imageops::blur(&shadow, layout.shadow_blur_sigma())
}
