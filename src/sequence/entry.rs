use crate::assets::arena::{ImageArena, ImageHandle, SourceImage};
use crate::effects::generate::MAX_REPEAT;
use crate::effects::kind::EffectKind;
use crate::foundation::error::{FlipbookError, FlipbookResult};

/// One step of the requested animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceEntry {
    /// Source image identity.
    pub image: ImageHandle,
    /// Effect wire name; unknown names are dropped during assembly.
    pub effect: String,
    /// Display time of every frame this entry produces.
    pub duration_ms: u32,
    /// How many times the effect plays, clamped to `1..=MAX_REPEAT`.
    pub repeat: u32,
}

impl SequenceEntry {
    /// Create an entry.
    pub fn new(image: ImageHandle, effect: impl Into<String>, duration_ms: u32, repeat: u32) -> Self {
        Self {
            image,
            effect: effect.into(),
            duration_ms,
            repeat,
        }
    }

    /// Parsed effect, or `None` when the name is not recognized.
    pub fn effect_kind(&self) -> Option<EffectKind> {
        EffectKind::parse(&self.effect)
    }

    /// Repeat count clamped to `1..=MAX_REPEAT`.
    pub fn effective_repeat(&self) -> u32 {
        self.repeat.clamp(1, MAX_REPEAT)
    }
}

/// Ordered entries plus the per-request arena of source images they reference.
#[derive(Clone, Debug, Default)]
pub struct SequenceRequest {
    arena: ImageArena,
    entries: Vec<SequenceEntry>,
}

impl SequenceRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a distinct source image. Reuse the returned handle for entries sharing it.
    pub fn add_image(&mut self, image: impl Into<SourceImage>) -> FlipbookResult<ImageHandle> {
        self.arena.add(image)
    }

    /// Append an entry; its handle must come from this request.
    pub fn push(&mut self, entry: SequenceEntry) -> FlipbookResult<()> {
        if self.arena.get(entry.image).is_none() {
            return Err(FlipbookError::validation(format!(
                "entry references unknown image handle {}",
                entry.image.0
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Convenience wrapper around [`SequenceRequest::push`].
    pub fn push_entry(
        &mut self,
        image: ImageHandle,
        effect: impl Into<String>,
        duration_ms: u32,
        repeat: u32,
    ) -> FlipbookResult<()> {
        self.push(SequenceEntry::new(image, effect, duration_ms, repeat))
    }

    /// Entries in playback order.
    pub fn entries(&self) -> &[SequenceEntry] {
        &self.entries
    }

    /// Source images of this request.
    pub fn arena(&self) -> &ImageArena {
        &self.arena
    }

    /// Return `true` when the request holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct handles referenced by entries, in first-use order.
    pub fn referenced_handles(&self) -> Vec<ImageHandle> {
        let mut seen = vec![false; self.arena.len()];
        let mut out = Vec::new();
        for entry in &self.entries {
            let idx = entry.image.index();
            if !seen[idx] {
                seen[idx] = true;
                out.push(entry.image);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/entry.rs"]
mod tests;
