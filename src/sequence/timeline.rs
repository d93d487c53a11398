use crate::effects::generate::EffectClip;
use crate::foundation::core::Canvas;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::foundation::math::Fnv1a64;
use crate::render::frame::Frame;

/// What a player does with a frame before drawing the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposal {
    /// Leave the previous frame in place.
    Keep,
    /// Clear the frame area to the background first.
    ClearToBackground,
}

/// Final ordered flipbook: frames, per-frame durations, and playback hints.
///
/// A timeline always holds at least one frame and every frame covers the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    canvas: Canvas,
    frames: Vec<Frame>,
    durations: Vec<u32>,
    loop_forever: bool,
    disposal: Disposal,
}

impl Timeline {
    /// Concatenate clips in order.
    ///
    /// Fails with [`FlipbookError::EmptyTimeline`] when no clip contributes a frame.
    pub fn from_clips(
        canvas: Canvas,
        clips: impl IntoIterator<Item = EffectClip>,
    ) -> FlipbookResult<Self> {
        let (frames, durations) = clips.into_iter().fold(
            (Vec::new(), Vec::new()),
            |(mut frames, mut durations), clip| {
                let (f, d) = clip.into_parts();
                frames.extend(f);
                durations.extend(d);
                (frames, durations)
            },
        );

        if frames.is_empty() {
            return Err(FlipbookError::EmptyTimeline);
        }
        if frames.len() != durations.len() {
            return Err(FlipbookError::validation(
                "frame and duration counts diverged",
            ));
        }
        if let Some(bad) = frames.iter().find(|f| f.size() != canvas.size()) {
            return Err(FlipbookError::validation(format!(
                "frame is {}x{} but canvas side is {}",
                bad.width(),
                bad.height(),
                canvas.side
            )));
        }

        Ok(Self {
            canvas,
            frames,
            durations,
            loop_forever: true,
            disposal: Disposal::ClearToBackground,
        })
    }

    /// Replace the disposal hint applied to every frame.
    pub fn with_disposal(mut self, disposal: Disposal) -> Self {
        self.disposal = disposal;
        self
    }

    /// Shared canvas of every frame.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Per-frame display durations in milliseconds.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    /// Number of frames (always >= 1).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sum of all durations.
    pub fn total_duration_ms(&self) -> u64 {
        self.durations.iter().map(|&d| u64::from(d)).sum()
    }

    /// Whether playback loops forever.
    pub fn loops_forever(&self) -> bool {
        self.loop_forever
    }

    /// Disposal hint applied to every frame.
    pub fn disposal(&self) -> Disposal {
        self.disposal
    }

    /// `(frame, duration_ms)` pairs in playback order.
    pub fn iter(&self) -> impl Iterator<Item = (&Frame, u32)> + '_ {
        self.frames.iter().zip(self.durations.iter().copied())
    }

    /// Deterministic digest over frames and durations.
    pub fn digest(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.canvas.side);
        h.write_u64(self.frames.len() as u64);
        for (frame, duration) in self.iter() {
            h.write_u64(frame.digest());
            h.write_u32(duration);
        }
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/timeline.rs"]
mod tests;
