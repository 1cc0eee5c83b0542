//! Fixed geometry of a macOS app icon.
//!
//! Every buffer size and offset used by the compositor is derived here from
//! the canvas size, the shape size and the corner-radius fraction.

pub const CANVAS_SIZE: u32 = 1024;
pub const SHAPE_SIZE: u32 = 824;
pub const CORNER_RADIUS_FRACTION: f32 = 0.22;

/// Downward shift of the shadow relative to the content, in pixels.
pub const SHADOW_OFFSET_Y: u32 = 10;
pub const SHADOW_ALPHA: u8 = 160;
pub const SHADOW_BLUR_SIGMA: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Icon geometry. Only [`IconLayout::macos`] builds one, so the sizes always
/// satisfy `shape_size <= canvas_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    canvas_size: u32,
    shape_size: u32,
    corner_radius_fraction: f32,
    shadow_offset_y: u32,
    shadow_alpha: u8,
    shadow_blur_sigma: f32,
}

impl IconLayout {
    /// The geometry Apple's icon template uses for a 1024px master.
    pub fn macos() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            shape_size: SHAPE_SIZE,
            corner_radius_fraction: CORNER_RADIUS_FRACTION,
            shadow_offset_y: SHADOW_OFFSET_Y,
            shadow_alpha: SHADOW_ALPHA,
            shadow_blur_sigma: SHADOW_BLUR_SIGMA,
        }
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    pub fn shape_size(&self) -> u32 {
        self.shape_size
    }

    pub fn shadow_alpha(&self) -> u8 {
        self.shadow_alpha
    }

    pub fn shadow_blur_sigma(&self) -> f32 {
        self.shadow_blur_sigma
    }

    pub fn padding(&self) -> u32 {
        (self.canvas_size - self.shape_size) / 2
    }

    pub fn corner_radius(&self) -> f32 {
        self.shape_size as f32 * self.corner_radius_fraction
    }

    pub fn content_rect(&self) -> Rect {
        let padding = self.padding();
        Rect::new(padding, padding, self.shape_size, self.shape_size)
    }

    /// Same square as the content, pushed down by the shadow offset.
    pub fn shadow_rect(&self) -> Rect {
        let content = self.content_rect();
        Rect::new(
            content.x,
            content.y + self.shadow_offset_y,
            content.width,
            content.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_symmetric() {
        let layout = IconLayout::macos();
        assert_eq!(layout.padding(), 100);
        let content = layout.content_rect();
        assert_eq!(content, Rect::new(100, 100, 824, 824));
        assert_eq!(layout.canvas_size() - content.right(), content.x);
        assert_eq!(layout.canvas_size() - content.bottom(), content.y);
    }

    #[test]
    fn corner_radius_is_fraction_of_shape() {
        let radius = IconLayout::macos().corner_radius();
        assert!((radius - 181.28).abs() < 1e-3);
    }

    #[test]
    fn shadow_is_content_square_shifted_down() {
        let layout = IconLayout::macos();
        let shadow = layout.shadow_rect();

        assert_eq!(shadow, Rect::new(100, 110, 824, 824));
        assert_eq!(shadow.bottom(), layout.content_rect().bottom() + SHADOW_OFFSET_Y);
    }
}
