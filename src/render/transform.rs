//! Geometric per-frame transforms. Every function returns a new canvas-sized raster.

use image::RgbaImage;

use crate::assets::normalize::resize_premultiplied;
use crate::foundation::core::{Affine, Canvas, Point};
use crate::foundation::math::{premultiply, unpremultiply};
use crate::render::composite::paste_over;
use crate::render::frame::{blank, center_offset};

/// Smallest scale factor applied by the scale effects.
pub const MIN_SCALE: f64 = 0.01;

/// Keys cubic convolution parameter (bicubic resampling).
const CUBIC_A: f64 = -0.5;

/// Rotate `base` counter-clockwise by `degrees` about its center.
///
/// Output keeps the input dimensions; samples falling outside the source are transparent.
pub fn rotate(base: &RgbaImage, degrees: f64) -> RgbaImage {
    if degrees.rem_euclid(360.0) == 0.0 {
        return base.clone();
    }

    let (w, h) = base.dimensions();
    let center = Point::new(f64::from(w) / 2.0, f64::from(h) / 2.0);
    // Maps destination pixel centers back into source space.
    let dst_to_src = Affine::rotate_about(degrees.to_radians(), center);

    let mut out = RgbaImage::new(w, h);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let p = dst_to_src * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        px.0 = sample_bicubic(base, p.x - 0.5, p.y - 0.5);
    }
    out
}

/// Scale `base` by `scale` about the canvas center onto a fresh transparent canvas.
///
/// Scales below [`MIN_SCALE`] are raised to it and every axis keeps at least one pixel.
/// Results larger than the canvas are cropped evenly.
pub fn scale_centered(base: &RgbaImage, scale: f64, canvas: Canvas) -> RgbaImage {
    let scale = if scale.is_finite() {
        scale.max(MIN_SCALE)
    } else {
        1.0
    };
    let (w, h) = base.dimensions();
    let nw = scaled_extent(w, scale);
    let nh = scaled_extent(h, scale);

    let mut out = blank(canvas);
    if (nw, nh) == (w, h) {
        paste_over(
            &mut out,
            base,
            center_offset(canvas.side, w),
            center_offset(canvas.side, h),
        );
        return out;
    }

    let resized = resize_premultiplied(base, nw, nh);
    paste_over(
        &mut out,
        &resized,
        center_offset(canvas.side, nw),
        center_offset(canvas.side, nh),
    );
    out
}

/// Paste `base` unscaled at `(x, y)` onto a fresh transparent canvas.
pub fn translate(base: &RgbaImage, x: i64, y: i64, canvas: Canvas) -> RgbaImage {
    let mut out = blank(canvas);
    paste_over(&mut out, base, x, y);
    out
}

fn scaled_extent(extent: u32, scale: f64) -> u32 {
    let v = (f64::from(extent) * scale).trunc();
    if v < 1.0 {
        1
    } else if v >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        v as u32
    }
}

fn cubic_weight(t: f64) -> f64 {
    let t = t.abs();
    if t <= 1.0 {
        ((CUBIC_A + 2.0) * t - (CUBIC_A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        ((CUBIC_A * t - 5.0 * CUBIC_A) * t + 8.0 * CUBIC_A) * t - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

/// Bicubic sample at pixel-index coordinates `(u, v)` in premultiplied space.
fn sample_bicubic(src: &RgbaImage, u: f64, v: f64) -> [u8; 4] {
    let (w, h) = (i64::from(src.width()), i64::from(src.height()));
    if u <= -2.0 || v <= -2.0 || u >= (w + 1) as f64 || v >= (h + 1) as f64 {
        return [0, 0, 0, 0];
    }

    let x0 = u.floor();
    let y0 = v.floor();
    let fx = u - x0;
    let fy = v - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let wx = [
        cubic_weight(1.0 + fx),
        cubic_weight(fx),
        cubic_weight(1.0 - fx),
        cubic_weight(2.0 - fx),
    ];
    let wy = [
        cubic_weight(1.0 + fy),
        cubic_weight(fy),
        cubic_weight(1.0 - fy),
        cubic_weight(2.0 - fy),
    ];

    let mut acc = [0.0f64; 4];
    for (j, wyj) in wy.iter().enumerate() {
        let sy = y0 - 1 + j as i64;
        if sy < 0 || sy >= h {
            continue;
        }
        for (i, wxi) in wx.iter().enumerate() {
            let sx = x0 - 1 + i as i64;
            if sx < 0 || sx >= w {
                continue;
            }
            let px = premultiply(src.get_pixel(sx as u32, sy as u32).0);
            let weight = wxi * wyj;
            for c in 0..4 {
                acc[c] += f64::from(px[c]) * weight;
            }
        }
    }

    let alpha = acc[3].round().clamp(0.0, 255.0) as u8;
    let mut out = [0u8; 4];
    for c in 0..3 {
        out[c] = acc[c].round().clamp(0.0, f64::from(alpha)) as u8;
    }
    out[3] = alpha;
    unpremultiply(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/transform.rs"]
mod tests;
