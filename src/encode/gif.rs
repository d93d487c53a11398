use std::io::Write;

use gif::{DisposalMethod, Encoder, Repeat};

use crate::encode::sink::{SinkConfig, TimelineSink, write_timeline};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::render::frame::Frame;
use crate::sequence::timeline::{Disposal, Timeline};

/// NeuQuant sampling speed passed to the quantizer (1 = best, 30 = fastest).
pub const QUANTIZE_SPEED: i32 = 10;

/// Convert a millisecond duration to a GIF delay in centiseconds, rounded to nearest.
pub fn delay_centis(duration_ms: u32) -> u16 {
    let cs = (u64::from(duration_ms) + 5) / 10;
    u16::try_from(cs).unwrap_or(u16::MAX)
}

/// Sink that writes an animated GIF89a into `W`.
///
/// Every frame is quantized independently to its own palette; fully transparent pixels map to
/// the frame's transparent index.
pub struct GifSink<W: Write + Send> {
    writer: Option<W>,
    encoder: Option<Encoder<W>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    scratch: Vec<u8>,
    speed: i32,
}

impl<W: Write + Send> GifSink<W> {
    /// Create a sink that encodes into `writer` once started.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            encoder: None,
            cfg: None,
            last_idx: None,
            scratch: Vec::new(),
            speed: QUANTIZE_SPEED,
        }
    }

    /// Override the quantizer speed (clamped to 1..=30).
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed.clamp(1, 30);
        self
    }

    /// Write the trailer and hand back the underlying writer.
    pub fn into_inner(mut self) -> FlipbookResult<W> {
        if let Some(encoder) = self.encoder.take() {
            return encoder
                .into_inner()
                .map_err(|e| FlipbookError::encode(format!("failed to finish gif stream: {e}")));
        }
        self.writer
            .take()
            .ok_or_else(|| FlipbookError::encode("gif sink has no writer"))
    }
}

impl<W: Write + Send> TimelineSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> FlipbookResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(FlipbookError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.frame_count == 0 {
            return Err(FlipbookError::EmptyTimeline);
        }
        let (Ok(width), Ok(height)) = (u16::try_from(cfg.width), u16::try_from(cfg.height)) else {
            return Err(FlipbookError::encode(format!(
                "canvas {}x{} exceeds the gif limit of {}",
                cfg.width,
                cfg.height,
                u16::MAX
            )));
        };
        let writer = self
            .writer
            .take()
            .ok_or_else(|| FlipbookError::encode("gif sink already started"))?;

        let mut encoder = Encoder::new(writer, width, height, &[])
            .map_err(|e| FlipbookError::encode(format!("failed to start gif stream: {e}")))?;
        if cfg.loop_forever {
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|e| FlipbookError::encode(format!("failed to set gif repeat: {e}")))?;
        }

        self.scratch = vec![0u8; cfg.width as usize * cfg.height as usize * 4];
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: FrameIndex,
        frame: &Frame,
        duration_ms: u32,
    ) -> FlipbookResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| FlipbookError::encode("gif sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(FlipbookError::encode(
                "gif sink received out-of-order frame index",
            ));
        }
        self.last_idx = Some(idx);

        if frame.width() != cfg.width || frame.height() != cfg.height {
            return Err(FlipbookError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                cfg.width,
                cfg.height
            )));
        }
        if frame.as_raw().len() != self.scratch.len() {
            return Err(FlipbookError::validation(
                "frame data size mismatch with width*height*4",
            ));
        }

        // Quantization rewrites the buffer in place.
        self.scratch.copy_from_slice(frame.as_raw());
        let mut out = gif::Frame::from_rgba_speed(
            cfg.width as u16,
            cfg.height as u16,
            &mut self.scratch,
            self.speed,
        );
        out.delay = delay_centis(duration_ms);
        out.dispose = match cfg.disposal {
            Disposal::Keep => DisposalMethod::Keep,
            Disposal::ClearToBackground => DisposalMethod::Background,
        };

        let Some(encoder) = self.encoder.as_mut() else {
            return Err(FlipbookError::encode("gif sink is already finalized"));
        };
        encoder
            .write_frame(&out)
            .map_err(|e| FlipbookError::encode(format!("failed to write gif frame: {e}")))
    }

    fn end(&mut self) -> FlipbookResult<()> {
        if self.cfg.is_none() {
            return Err(FlipbookError::encode("gif sink not started"));
        }
        if self.encoder.is_none() {
            return Err(FlipbookError::encode("gif sink is already finalized"));
        }
        Ok(())
    }
}

/// Encode `timeline` as an in-memory animated GIF.
pub fn encode_gif(timeline: &Timeline) -> FlipbookResult<Vec<u8>> {
    let mut sink = GifSink::new(Vec::new());
    write_timeline(timeline, &mut sink)?;
    let bytes = sink.into_inner()?;
    tracing::debug!(
        frames = timeline.len(),
        bytes = bytes.len(),
        "encoded gif"
    );
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
