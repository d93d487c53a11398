use std::sync::Arc;

use image::RgbaImage;

use crate::foundation::core::{Canvas, Size};
use crate::foundation::math::Fnv1a64;
use crate::render::composite::paste_over;

/// One rendered canvas-sized raster in straight-alpha RGBA8.
///
/// Frames are immutable; clones share the pixel buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pixels: Arc<RgbaImage>,
}

impl Frame {
    /// Wrap a finished raster.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(image),
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Frame dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Borrow the underlying raster.
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Tightly packed row-major RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Return `true` when both frames share one pixel buffer.
    pub fn shares_pixels_with(&self, other: &Frame) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }

    /// Deterministic 64-bit digest of dimensions and pixels.
    pub fn digest(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width());
        h.write_u32(self.height());
        h.write_bytes(self.as_raw());
        h.finish()
    }
}

/// A fully transparent raster covering `canvas`.
pub fn blank(canvas: Canvas) -> RgbaImage {
    RgbaImage::new(canvas.width(), canvas.height())
}

/// Centering offset of an `extent`-pixel span on a `side`-pixel axis (floor division).
pub(crate) fn center_offset(side: u32, extent: u32) -> i64 {
    (i64::from(side) - i64::from(extent)).div_euclid(2)
}

/// Composite `image` centered on a transparent canvas.
///
/// This is the base frame every effect starts from.
pub fn center(image: &RgbaImage, canvas: Canvas) -> Frame {
    let mut out = blank(canvas);
    let x = center_offset(canvas.side, image.width());
    let y = center_offset(canvas.side, image.height());
    paste_over(&mut out, image, x, y);
    Frame::from_image(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
