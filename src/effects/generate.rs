//! Effect generators: each maps a centered base frame to an ordered frame set with one
//! duration per frame. All generators are pure; output frames match the base dimensions.

use crate::animation::ramp;
use crate::effects::kind::EffectKind;
use crate::foundation::core::Canvas;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::foundation::math::trunc_i64;
use crate::render::frame::Frame;
use crate::render::transform::{rotate, scale_centered, translate};

/// Steps in one full rotation.
pub const ROTATE_STEPS: usize = 24;
/// Steps in the rising half of `zoom_in_bounce`.
pub const BOUNCE_STEPS: usize = 30;
/// Steps in the rising half of `pulse`.
pub const PULSE_STEPS: usize = 10;
/// Steps in `shrink_in` / `shrink_out`.
pub const SHRINK_STEPS: usize = 20;
/// Steps in `move_from_left` / `move_from_right`.
pub const MOVE_STEPS: usize = 30;
/// Peak scale of `zoom_in_bounce`.
pub const BOUNCE_PEAK: f64 = 1.5;
/// Largest repeat count honored for one clip; larger values are clamped.
pub const MAX_REPEAT: u32 = 1_000;

/// Closed scale interval used by `pulse`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleRange {
    /// Scale at the start and end of the pulse.
    pub min: f64,
    /// Scale at the peak of the pulse.
    pub max: f64,
}

impl ScaleRange {
    /// Reject non-finite, non-positive, or inverted ranges.
    pub fn validate(self) -> FlipbookResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(FlipbookError::validation("scale range must be finite"));
        }
        if self.min <= 0.0 {
            return Err(FlipbookError::validation("scale range min must be > 0"));
        }
        if self.min > self.max {
            return Err(FlipbookError::validation("scale range min must be <= max"));
        }
        Ok(())
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self { min: 1.0, max: 1.3 }
    }
}

/// Effect-specific parameters that are not part of an entry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectParams {
    /// Range swept by `pulse`.
    pub pulse: ScaleRange,
}

/// Frames of one effect run with matching per-frame durations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectClip {
    frames: Vec<Frame>,
    durations: Vec<u32>,
}

impl EffectClip {
    fn uniform(frames: Vec<Frame>, duration_ms: u32) -> Self {
        let durations = vec![duration_ms; frames.len()];
        Self { frames, durations }
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Display duration of each frame in milliseconds.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when the clip has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The clip played back `times` times in a row, clamped to `1..=MAX_REPEAT`.
    ///
    /// Repeated frames share pixel buffers with the first run.
    pub fn repeated(self, times: u32) -> Self {
        let times = times.clamp(1, MAX_REPEAT) as usize;
        if times == 1 {
            return self;
        }
        let mut frames = Vec::with_capacity(self.frames.len() * times);
        for _ in 0..times {
            frames.extend_from_slice(&self.frames);
        }
        Self {
            frames,
            durations: self.durations.repeat(times),
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<Frame>, Vec<u32>) {
        (self.frames, self.durations)
    }
}

/// Run the generator for `kind` on `base`.
pub fn generate(
    kind: EffectKind,
    base: &Frame,
    duration_ms: u32,
    params: &EffectParams,
) -> EffectClip {
    match kind {
        EffectKind::Still => still(base, duration_ms),
        EffectKind::RotateLeft => rotate_left(base, duration_ms),
        EffectKind::RotateRight => rotate_right(base, duration_ms),
        EffectKind::ZoomInBounce => zoom_in_bounce(base, duration_ms),
        EffectKind::Pulse => pulse(base, duration_ms, params.pulse),
        EffectKind::ShrinkOut => shrink_out(base, duration_ms),
        EffectKind::ShrinkIn => shrink_in(base, duration_ms),
        EffectKind::MoveFromLeft => move_from_left(base, duration_ms),
        EffectKind::MoveFromRight => move_from_right(base, duration_ms),
    }
}

/// The base frame, once.
pub fn still(base: &Frame, duration_ms: u32) -> EffectClip {
    EffectClip::uniform(vec![base.clone()], duration_ms)
}

/// Full counter-clockwise turn in [`ROTATE_STEPS`] steps.
pub fn rotate_left(base: &Frame, duration_ms: u32) -> EffectClip {
    rotation(base, duration_ms, false)
}

/// Full clockwise turn, expressed as counter-clockwise angles from 360 down.
pub fn rotate_right(base: &Frame, duration_ms: u32) -> EffectClip {
    rotation(base, duration_ms, true)
}

/// Scale 1.0 -> [`BOUNCE_PEAK`] -> 1.0.
pub fn zoom_in_bounce(base: &Frame, duration_ms: u32) -> EffectClip {
    let scales = ramp::mirrored(ramp::linear(1.0, BOUNCE_PEAK, BOUNCE_STEPS));
    scaled(base, duration_ms, &scales)
}

/// Scale `range.min` -> `range.max` -> `range.min`.
pub fn pulse(base: &Frame, duration_ms: u32, range: ScaleRange) -> EffectClip {
    let scales = ramp::mirrored(ramp::linear(range.min, range.max, PULSE_STEPS));
    scaled(base, duration_ms, &scales)
}

/// Scale 1.0 -> 0.0 (floored at the minimum scale).
pub fn shrink_out(base: &Frame, duration_ms: u32) -> EffectClip {
    scaled(base, duration_ms, &ramp::linear(1.0, 0.0, SHRINK_STEPS))
}

/// Scale 0.0 (floored at the minimum scale) -> 1.0.
pub fn shrink_in(base: &Frame, duration_ms: u32) -> EffectClip {
    scaled(base, duration_ms, &ramp::linear(0.0, 1.0, SHRINK_STEPS))
}

/// Slide from fully off-canvas left to fully off-canvas right.
pub fn move_from_left(base: &Frame, duration_ms: u32) -> EffectClip {
    let start = -f64::from(base.width());
    let end = f64::from(base.width());
    slide(base, duration_ms, start, end)
}

/// Slide from fully off-canvas right to fully off-canvas left.
pub fn move_from_right(base: &Frame, duration_ms: u32) -> EffectClip {
    let start = f64::from(base.width());
    let end = -f64::from(base.width());
    slide(base, duration_ms, start, end)
}

fn canvas_of(base: &Frame) -> Canvas {
    Canvas { side: base.width() }
}

fn rotation(base: &Frame, duration_ms: u32, reverse: bool) -> EffectClip {
    let frames = ramp::turn_degrees(ROTATE_STEPS, reverse)
        .into_iter()
        .map(|deg| Frame::from_image(rotate(base.image(), deg)))
        .collect();
    EffectClip::uniform(frames, duration_ms)
}

fn scaled(base: &Frame, duration_ms: u32, scales: &[f64]) -> EffectClip {
    let canvas = canvas_of(base);
    let frames = scales
        .iter()
        .map(|&s| Frame::from_image(scale_centered(base.image(), s, canvas)))
        .collect();
    EffectClip::uniform(frames, duration_ms)
}

fn slide(base: &Frame, duration_ms: u32, start: f64, end: f64) -> EffectClip {
    let canvas = canvas_of(base);
    let frames = ramp::linear(start, end, MOVE_STEPS)
        .into_iter()
        .map(|x| Frame::from_image(translate(base.image(), trunc_i64(x), 0, canvas)))
        .collect();
    EffectClip::uniform(frames, duration_ms)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/generate.rs"]
mod tests;
