//! Flipbook turns still images into a looping animated sequence.
//!
//! Each entry of a [`SequenceRequest`] names a source image, an effect, a per-frame duration and a
//! repeat count. The assembler normalizes the images, sizes one square canvas that fits every
//! image rotated about its center, expands each effect into canvas-sized frames, and concatenates
//! them into a [`Timeline`]. A [`TimelineSink`] (for example [`GifSink`]) then serializes it.
//!
//! - Build a [`SequenceRequest`] (or load a [`Manifest`])
//! - Call [`assemble`] with a [`CompositorConfig`]
//! - Stream the result with [`write_timeline`] or [`encode_gif`]
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod animation;
pub(crate) mod effects;
/// Timeline sinks.
pub mod encode;
pub(crate) mod render;
pub(crate) mod sequence;

/// Compositor configuration and value coercion.
pub mod config;
/// Manifest files for the command-line driver.
pub mod manifest;

pub use crate::foundation::core::{Canvas, FrameIndex, Size};
pub use crate::foundation::error::{FlipbookError, FlipbookResult};

pub use crate::assets::arena::{ImageArena, ImageHandle, SourceImage};
pub use crate::assets::decode::{decode_source, open_source};
pub use crate::assets::normalize::{NormalizedImages, fit_within, normalize_images};
pub use crate::config::{CompositorConfig, Threading};
pub use crate::effects::generate::{
    BOUNCE_PEAK, BOUNCE_STEPS, EffectClip, EffectParams, MAX_REPEAT, MOVE_STEPS, PULSE_STEPS,
    ROTATE_STEPS, SHRINK_STEPS, ScaleRange, generate,
};
pub use crate::effects::kind::EffectKind;
pub use crate::encode::gif::{GifSink, encode_gif};
pub use crate::encode::sink::{InMemorySink, SinkConfig, TimelineSink, write_timeline};
pub use crate::manifest::{Manifest, ManifestEntry};
pub use crate::render::canvas::resolve_canvas;
pub use crate::render::frame::{Frame, center};
pub use crate::render::transform::{MIN_SCALE, rotate, scale_centered, translate};
pub use crate::sequence::assembler::assemble;
pub use crate::sequence::entry::{SequenceEntry, SequenceRequest};
pub use crate::sequence::timeline::{Disposal, Timeline};

/// Assemble `request` and encode the timeline as an animated GIF.
///
/// Fails with [`FlipbookError::EmptyTimeline`] rather than returning zero bytes.
pub fn render_gif(request: &SequenceRequest, config: &CompositorConfig) -> FlipbookResult<Vec<u8>> {
    let timeline = assemble(request, config)?;
    encode_gif(&timeline)
}
