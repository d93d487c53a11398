use crate::foundation::error::{FlipbookError, FlipbookResult};

pub use kurbo::{Affine, Point};

/// Absolute 0-based frame index in timeline order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Width and height of a raster in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a size without validation.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a size, rejecting zero-area dimensions.
    pub fn non_empty(width: u32, height: u32) -> FlipbookResult<Self> {
        if width == 0 || height == 0 {
            return Err(FlipbookError::validation(format!(
                "size must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Return `true` when `self` fits inside `bound` on both axes.
    pub fn fits_within(self, bound: Size) -> bool {
        self.width <= bound.width && self.height <= bound.height
    }

    /// Smallest integer side length that is at least the length of the diagonal.
    pub fn diagonal_ceil(self) -> u32 {
        let w = u64::from(self.width);
        let h = u64::from(self.height);
        let sq = w * w + h * h;
        let root = sq.isqrt();
        let side = if root * root < sq { root + 1 } else { root };
        u32::try_from(side).unwrap_or(u32::MAX)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Square output canvas shared by every frame of one timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Side length in pixels.
    pub side: u32,
}

impl Canvas {
    /// Create a validated canvas with `side > 0`.
    pub fn new(side: u32) -> FlipbookResult<Self> {
        if side == 0 {
            return Err(FlipbookError::validation("canvas side must be > 0"));
        }
        Ok(Self { side })
    }

    /// Canvas width in pixels.
    pub fn width(self) -> u32 {
        self.side
    }

    /// Canvas height in pixels.
    pub fn height(self) -> u32 {
        self.side
    }

    /// Canvas dimensions as a [`Size`].
    pub fn size(self) -> Size {
        Size::new(self.side, self.side)
    }

    /// Geometric center in pixel space.
    pub fn center(self) -> Point {
        let half = f64::from(self.side) / 2.0;
        Point::new(half, half)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
