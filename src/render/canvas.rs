use crate::foundation::core::{Canvas, Size};
use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Resolve the shared square canvas for a set of normalized image sizes.
///
/// The side is the ceiling of the largest diagonal, so any image rotated about its own center
/// stays inside the canvas. When `limit` is set the side is clamped to it afterwards; rotated
/// frames may then clip at the corners.
pub fn resolve_canvas(
    sizes: impl IntoIterator<Item = Size>,
    limit: Option<u32>,
) -> FlipbookResult<Canvas> {
    let side = sizes
        .into_iter()
        .map(Size::diagonal_ceil)
        .max()
        .ok_or_else(|| FlipbookError::validation("cannot size a canvas without images"))?;

    let side = match limit {
        Some(0) => return Err(FlipbookError::validation("canvas limit must be > 0")),
        Some(max) if side > max => {
            tracing::debug!(diagonal = side, limit = max, "clamping canvas to limit");
            max
        }
        _ => side,
    };

    Canvas::new(side.max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
