//! Encoding sinks.
//!
//! Sinks consume a finished [`Timeline`](crate::Timeline) frame by frame in playback order.

/// GIF89a output via the `gif` crate.
pub mod gif;
/// Generic timeline sink trait and built-in sinks.
pub mod sink;
