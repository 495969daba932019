/// Crate-wide result alias.
pub type StagecraftResult<T> = Result<T, StagecraftError>;

/// Errors raised while constructing or configuring timelines, bindings and sections.
///
/// Runtime degradations (missing targets, dropped slide requests, unavailable renderers) are not
/// errors; they are logged and the affected piece falls back to static presentation.
#[derive(thiserror::Error, Debug)]
pub enum StagecraftError {
    /// Invalid input at a construction boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// Timeline resolution or playback failure.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Scroll binding failure.
    #[error("scroll error: {0}")]
    Scroll(String),

    /// Scene renderer could not acquire its graphics context.
    #[error("renderer error: {0}")]
    Renderer(String),

    /// Configuration loading or parsing failure.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StagecraftError {
    /// Build a [`StagecraftError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StagecraftError::Timeline`].
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`StagecraftError::Scroll`].
    pub fn scroll(msg: impl Into<String>) -> Self {
        Self::Scroll(msg.into())
    }

    /// Build a [`StagecraftError::Renderer`].
    pub fn renderer(msg: impl Into<String>) -> Self {
        Self::Renderer(msg.into())
    }

    /// Build a [`StagecraftError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
