use std::path::Path;

use image::RgbaImage;

use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Decode encoded image bytes (PNG, JPEG, GIF, ...) into straight-alpha RGBA8.
pub fn decode_source(bytes: &[u8]) -> FlipbookResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FlipbookError::decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode an image file into straight-alpha RGBA8.
pub fn open_source(path: &Path) -> FlipbookResult<RgbaImage> {
    let dyn_img = image::open(path)
        .map_err(|e| FlipbookError::decode(format!("open image '{}': {e}", path.display())))?;
    Ok(dyn_img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
