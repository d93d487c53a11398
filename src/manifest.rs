//! JSON manifest describing a sequence of image files for the command-line driver.
//!
//! ```json
//! {
//!   "entries": [
//!     { "image": "a.png", "effect": "pulse", "duration": 40, "repeat": 2 },
//!     { "image": "b.png", "effect": "still", "duration": "500" }
//!   ],
//!   "max_width": 120
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::assets::arena::ImageHandle;
use crate::assets::decode::open_source;
use crate::config::{CompositorConfig, coerce_dimension, coerce_duration, coerce_repeat};
use crate::foundation::core::Size;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::sequence::entry::SequenceRequest;

/// One manifest row; numeric fields stay untyped until coerced.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ManifestEntry {
    /// Image path, relative to the manifest's directory unless absolute.
    pub image: PathBuf,
    /// Effect name; missing or unknown names drop the entry.
    #[serde(default)]
    pub effect: String,
    /// Per-frame duration in milliseconds (number or numeric string).
    #[serde(default)]
    pub duration: serde_json::Value,
    /// Repeat count (number or numeric string).
    #[serde(default)]
    pub repeat: serde_json::Value,
}

/// Parsed manifest document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    /// Entries in playback order.
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,
    /// Optional normalization width override.
    #[serde(default)]
    pub max_width: serde_json::Value,
    /// Optional normalization height override.
    #[serde(default)]
    pub max_height: serde_json::Value,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json_str(s: &str) -> FlipbookResult<Self> {
        serde_json::from_str(s).map_err(|e| FlipbookError::serde(format!("parse manifest: {e}")))
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> FlipbookResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FlipbookError::Other(
                anyhow::Error::new(e).context(format!("read manifest '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&text)
    }

    /// `config` with the manifest's size overrides applied.
    ///
    /// Overrides that are absent or not positive integers keep the configured bound.
    pub fn apply_to(&self, config: &CompositorConfig) -> CompositorConfig {
        let mut out = config.clone();
        out.max_size = Size::new(
            coerce_dimension(&self.max_width, config.max_size.width),
            coerce_dimension(&self.max_height, config.max_size.height),
        );
        out
    }

    /// Decode every referenced image and build the request.
    ///
    /// Relative paths resolve against `base_dir`. Each distinct path is decoded once and its
    /// entries share one handle.
    pub fn load_request(
        &self,
        base_dir: &Path,
        config: &CompositorConfig,
    ) -> FlipbookResult<SequenceRequest> {
        let mut request = SequenceRequest::new();
        let mut handles = HashMap::<PathBuf, ImageHandle>::new();

        for entry in &self.entries {
            let path = if entry.image.is_absolute() {
                entry.image.clone()
            } else {
                base_dir.join(&entry.image)
            };
            let handle = match handles.get(&path) {
                Some(&h) => h,
                None => {
                    let h = request.add_image(open_source(&path)?)?;
                    tracing::debug!(path = %path.display(), handle = h.index(), "loaded image");
                    handles.insert(path, h);
                    h
                }
            };

            request.push_entry(
                handle,
                entry.effect.clone(),
                coerce_duration(&entry.duration, config.default_duration_ms),
                coerce_repeat(&entry.repeat),
            )?;
        }

        Ok(request)
    }
}

#[cfg(test)]
#[path = "../tests/unit/manifest.rs"]
mod tests;
