use std::fmt;

use crate::effects::generate::{BOUNCE_STEPS, MOVE_STEPS, PULSE_STEPS, ROTATE_STEPS, SHRINK_STEPS};

/// Closed set of animation effects an entry can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Single unchanged frame.
    Still,
    /// Full counter-clockwise turn.
    RotateLeft,
    /// Full clockwise turn.
    RotateRight,
    /// Grow to 1.5x and back.
    ZoomInBounce,
    /// Grow within the configured pulse range and back.
    Pulse,
    /// Shrink to a point.
    ShrinkOut,
    /// Grow from a point.
    ShrinkIn,
    /// Slide across from the left edge.
    MoveFromLeft,
    /// Slide across from the right edge.
    MoveFromRight,
}

impl EffectKind {
    /// Every effect, in documentation order.
    pub const ALL: [EffectKind; 9] = [
        Self::Still,
        Self::RotateLeft,
        Self::RotateRight,
        Self::ZoomInBounce,
        Self::Pulse,
        Self::ShrinkOut,
        Self::ShrinkIn,
        Self::MoveFromLeft,
        Self::MoveFromRight,
    ];

    /// Resolve a wire name such as `"rotate_left"`.
    ///
    /// Returns `None` for names outside the closed set; callers drop such entries.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Wire name of this effect.
    pub fn name(self) -> &'static str {
        match self {
            Self::Still => "still",
            Self::RotateLeft => "rotate_left",
            Self::RotateRight => "rotate_right",
            Self::ZoomInBounce => "zoom_in_bounce",
            Self::Pulse => "pulse",
            Self::ShrinkOut => "shrink_out",
            Self::ShrinkIn => "shrink_in",
            Self::MoveFromLeft => "move_from_left",
            Self::MoveFromRight => "move_from_right",
        }
    }

    /// Number of frames one run of this effect produces.
    pub fn frame_count(self) -> usize {
        match self {
            Self::Still => 1,
            Self::RotateLeft | Self::RotateRight => ROTATE_STEPS,
            Self::ZoomInBounce => 2 * BOUNCE_STEPS - 1,
            Self::Pulse => 2 * PULSE_STEPS - 1,
            Self::ShrinkOut | Self::ShrinkIn => SHRINK_STEPS,
            Self::MoveFromLeft | Self::MoveFromRight => MOVE_STEPS,
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/kind.rs"]
mod tests;
