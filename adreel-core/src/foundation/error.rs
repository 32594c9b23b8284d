/// Convenience result type used across the crate.
pub type AdreelResult<T> = Result<T, AdreelError>;

/// Top-level error taxonomy for the ad pipeline.
///
/// Every variant is fatal to the request that raised it; nothing here is
/// retried. Scratch and output namespaces of other jobs are never touched by
/// a failing request.
#[derive(thiserror::Error, Debug)]
pub enum AdreelError {
    /// Invalid brief data or malformed pipeline configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Storyboard generation failure (the defensive zero-scene case).
    #[error("storyboard error: {0}")]
    Storyboard(String),

    /// Frame rendering failure (font resolution, rasterization).
    #[error("render error: {0}")]
    Render(String),

    /// Voice-over synthesis or audio probing failure.
    #[error("voice error: {0}")]
    Voice(String),

    /// Video/audio encoding failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdreelError {
    /// Build an [`AdreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AdreelError::Storyboard`] value.
    pub fn storyboard(msg: impl Into<String>) -> Self {
        Self::Storyboard(msg.into())
    }

    /// Build an [`AdreelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`AdreelError::Voice`] value.
    pub fn voice(msg: impl Into<String>) -> Self {
        Self::Voice(msg.into())
    }

    /// Build an [`AdreelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
