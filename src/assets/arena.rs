use std::sync::Arc;

use image::RgbaImage;

use crate::foundation::core::Size;
use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Caller-owned source raster. Never mutated by the compositor.
pub type SourceImage = Arc<RgbaImage>;

/// Stable per-request identity of a source image.
///
/// Entries that share a handle share one normalized image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageHandle(pub(crate) u32);

impl ImageHandle {
    /// Slot index inside the owning [`ImageArena`].
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-request table of distinct source images.
#[derive(Clone, Debug, Default)]
pub struct ImageArena {
    images: Vec<SourceImage>,
}

impl ImageArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a distinct image and return its handle.
    ///
    /// Zero-area images are rejected here so later stages never see them.
    pub fn add(&mut self, image: impl Into<SourceImage>) -> FlipbookResult<ImageHandle> {
        let image = image.into();
        let (w, h) = image.dimensions();
        Size::non_empty(w, h)?;
        let idx = u32::try_from(self.images.len())
            .map_err(|_| FlipbookError::validation("too many images in one request"))?;
        self.images.push(image);
        Ok(ImageHandle(idx))
    }

    /// Look up an image by handle.
    pub fn get(&self, handle: ImageHandle) -> Option<&SourceImage> {
        self.images.get(handle.index())
    }

    /// Number of registered images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Return `true` when no image has been registered.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/arena.rs"]
mod tests;
