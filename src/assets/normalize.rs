use std::sync::Arc;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::assets::arena::{ImageArena, ImageHandle, SourceImage};
use crate::foundation::core::Size;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::foundation::math::{premultiply, unpremultiply};

/// Resampling filter shared by normalization and scale effects.
pub(crate) const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Resize `src` with [`RESAMPLE_FILTER`], filtering premultiplied pixels.
///
/// Transparent neighbours only lower the alpha of edge pixels; their colour is kept.
pub(crate) fn resize_premultiplied(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut premul = src.clone();
    for px in premul.pixels_mut() {
        px.0 = premultiply(px.0);
    }
    let mut out = imageops::resize(&premul, width, height, RESAMPLE_FILTER);
    for px in out.pixels_mut() {
        px.0 = unpremultiply(px.0);
    }
    out
}

/// Normalized images of one request, indexed by [`ImageHandle`].
#[derive(Clone, Debug, Default)]
pub struct NormalizedImages {
    slots: Vec<Option<SourceImage>>,
    resized: usize,
}

impl NormalizedImages {
    /// Normalized image for `handle`, if it was part of the request.
    pub fn get(&self, handle: ImageHandle) -> Option<&SourceImage> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    /// How many images actually went through the resampler.
    pub fn resize_count(&self) -> usize {
        self.resized
    }

    /// Number of normalized images.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Return `true` when nothing was normalized.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensions of every normalized image in handle order.
    pub fn sizes(&self) -> impl Iterator<Item = Size> + '_ {
        self.slots.iter().flatten().map(|img| {
            let (w, h) = img.dimensions();
            Size::new(w, h)
        })
    }
}

/// Largest size with the aspect ratio of `size` that fits inside `bound`.
///
/// Sizes already inside the bound are returned unchanged; nothing is ever enlarged.
pub fn fit_within(size: Size, bound: Size) -> Size {
    if size.fits_within(bound) || size.is_empty() {
        return size;
    }
    let scale = (f64::from(bound.width) / f64::from(size.width))
        .min(f64::from(bound.height) / f64::from(size.height));
    let axis = |v: u32, max: u32| -> u32 {
        ((f64::from(v) * scale).round() as u32).clamp(1, max.max(1))
    };
    Size::new(axis(size.width, bound.width), axis(size.height, bound.height))
}

/// Normalize every distinct image referenced by `handles` to fit within `bound`.
///
/// Each handle is resampled at most once no matter how often it appears. Images that already
/// fit are shared with the arena rather than copied.
pub fn normalize_images(
    arena: &ImageArena,
    handles: impl IntoIterator<Item = ImageHandle>,
    bound: Size,
) -> FlipbookResult<NormalizedImages> {
    if bound.is_empty() {
        return Err(FlipbookError::validation(
            "normalization bound must be non-empty",
        ));
    }

    let mut out = NormalizedImages {
        slots: vec![None; arena.len()],
        resized: 0,
    };

    for handle in handles {
        let source = arena.get(handle).ok_or_else(|| {
            FlipbookError::validation(format!("image handle {} is not registered", handle.0))
        })?;
        let slot = &mut out.slots[handle.index()];
        if slot.is_some() {
            continue;
        }

        let (w, h) = source.dimensions();
        let target = fit_within(Size::new(w, h), bound);
        let normalized = if target == Size::new(w, h) {
            Arc::clone(source)
        } else {
            out.resized += 1;
            tracing::debug!(
                handle = handle.0,
                from = %format!("{w}x{h}"),
                to = %format!("{}x{}", target.width, target.height),
                "normalizing source image"
            );
            Arc::new(resize_premultiplied(
                source.as_ref(),
                target.width,
                target.height,
            ))
        };
        *slot = Some(normalized);
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/normalize.rs"]
mod tests;
