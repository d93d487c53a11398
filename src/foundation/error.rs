/// Convenience result alias used across the crate.
pub type FlipbookResult<T> = Result<T, FlipbookError>;

/// Errors produced while assembling or encoding a flipbook.
#[derive(thiserror::Error, Debug)]
pub enum FlipbookError {
    /// Invalid configuration or request shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// Source bytes could not be decoded into an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// The timeline could not be serialized by a sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// No entry in the request contributed frames.
    #[error("no frames generated: the sequence has no entry with a recognized effect")]
    EmptyTimeline,

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlipbookError {
    /// Build a [`FlipbookError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlipbookError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`FlipbookError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`FlipbookError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
