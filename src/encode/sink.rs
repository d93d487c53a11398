use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::render::frame::Frame;
use crate::sequence::timeline::{Disposal, Timeline};

/// Configuration provided to a [`TimelineSink`] before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Number of frames that will be pushed.
    pub frame_count: usize,
    /// Whether playback loops forever.
    pub loop_forever: bool,
    /// Disposal applied after each frame.
    pub disposal: Disposal,
}

impl SinkConfig {
    /// Sink configuration describing `timeline`.
    pub fn for_timeline(timeline: &Timeline) -> Self {
        let canvas = timeline.canvas();
        Self {
            width: canvas.width(),
            height: canvas.height(),
            frame_count: timeline.len(),
            loop_forever: timeline.loops_forever(),
            disposal: timeline.disposal(),
        }
    }
}

/// Sink contract for consuming timeline frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order.
pub trait TimelineSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FlipbookResult<()>;
    /// Push one frame and its display duration in milliseconds.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame, duration_ms: u32)
    -> FlipbookResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FlipbookResult<()>;
}

/// Stream every frame of `timeline` into `sink`.
pub fn write_timeline(timeline: &Timeline, sink: &mut dyn TimelineSink) -> FlipbookResult<()> {
    sink.begin(SinkConfig::for_timeline(timeline))?;
    for (i, (frame, duration_ms)) in timeline.iter().enumerate() {
        sink.push_frame(FrameIndex(i as u64), frame, duration_ms)?;
    }
    sink.end()
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Frame, u32)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames with their durations.
    pub fn frames(&self) -> &[(FrameIndex, Frame, u32)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.ended
    }
}

impl TimelineSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FlipbookResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: FrameIndex,
        frame: &Frame,
        duration_ms: u32,
    ) -> FlipbookResult<()> {
        if self.cfg.is_none() {
            return Err(FlipbookError::encode("in-memory sink not started"));
        }
        self.frames.push((idx, frame.clone(), duration_ms));
        Ok(())
    }

    fn end(&mut self) -> FlipbookResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
