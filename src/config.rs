//! Compositor configuration and coercion of untyped front-end values.

use std::path::Path;

use crate::effects::generate::{EffectParams, MAX_REPEAT, ScaleRange};
use crate::foundation::core::Size;
use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Default normalization bound.
pub const DEFAULT_MAX_SIZE: Size = Size::new(80, 80);
/// Normalization bound of the legacy profile.
pub const LEGACY_MAX_SIZE: Size = Size::new(64, 64);
/// Duration used when an entry's duration is missing or unparseable.
pub const DEFAULT_DURATION_MS: u32 = 100;

/// Parallel execution controls for per-entry generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Threading {
    /// Generate entries on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Everything the assembler needs besides the request itself.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Bounding box every source image is downsized into.
    pub max_size: Size,
    /// Optional hard cap on the canvas side, applied after diagonal sizing.
    pub canvas_limit: Option<u32>,
    /// Scale range swept by `pulse`.
    pub pulse_range: ScaleRange,
    /// Fallback for missing or malformed durations.
    pub default_duration_ms: u32,
    /// Parallelism controls.
    pub threading: Threading,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            canvas_limit: None,
            pulse_range: ScaleRange::default(),
            default_duration_ms: DEFAULT_DURATION_MS,
            threading: Threading::default(),
        }
    }
}

impl CompositorConfig {
    /// Profile with the older 64x64 normalization bound.
    pub fn legacy() -> Self {
        Self {
            max_size: LEGACY_MAX_SIZE,
            ..Self::default()
        }
    }

    /// Parse a JSON document; absent fields take their defaults.
    pub fn from_json_str(s: &str) -> FlipbookResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| FlipbookError::serde(format!("parse compositor config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> FlipbookResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FlipbookError::Other(anyhow::Error::new(e).context(format!(
                "read compositor config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&text)
    }

    /// Reject configurations the pipeline cannot honor.
    pub fn validate(&self) -> FlipbookResult<()> {
        if self.max_size.is_empty() {
            return Err(FlipbookError::validation("max_size must be non-empty"));
        }
        if self.canvas_limit == Some(0) {
            return Err(FlipbookError::validation("canvas_limit must be > 0 when set"));
        }
        if self.threading.threads == Some(0) {
            return Err(FlipbookError::validation(
                "threading.threads must be >= 1 when set",
            ));
        }
        self.pulse_range.validate()
    }

    /// Effect parameters derived from this configuration.
    pub fn effect_params(&self) -> EffectParams {
        EffectParams {
            pulse: self.pulse_range,
        }
    }
}

/// Integer view of a loosely typed value: integers, integral floats, and numeric strings.
pub fn coerce_int(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Duration in milliseconds, falling back to `default` when missing or malformed.
///
/// Negative values clamp to zero.
pub fn coerce_duration(value: &serde_json::Value, default: u32) -> u32 {
    match coerce_int(value) {
        Some(v) => u32::try_from(v.max(0)).unwrap_or(u32::MAX),
        None => {
            if !value.is_null() {
                tracing::warn!(%value, default, "duration is not an integer; using default");
            }
            default
        }
    }
}

/// Repeat count in `1..=MAX_REPEAT`.
pub fn coerce_repeat(value: &serde_json::Value) -> u32 {
    match coerce_int(value) {
        Some(v) if v > i64::from(MAX_REPEAT) => {
            tracing::warn!(repeat = v, max = MAX_REPEAT, "repeat too large; clamping");
            MAX_REPEAT
        }
        Some(v) => u32::try_from(v.max(1)).unwrap_or(MAX_REPEAT),
        None => {
            if !value.is_null() {
                tracing::warn!(%value, "repeat is not an integer; using 1");
            }
            1
        }
    }
}

/// Positive pixel dimension, falling back to `default` when missing, malformed, or < 1.
pub fn coerce_dimension(value: &serde_json::Value, default: u32) -> u32 {
    match coerce_int(value).and_then(|v| u32::try_from(v).ok()) {
        Some(v) if v > 0 => v,
        _ => {
            if !value.is_null() {
                tracing::warn!(%value, default, "dimension is not a positive integer; using default");
            }
            default
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
