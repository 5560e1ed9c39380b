//! Error types for document rendering

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a card document
#[derive(Error, Debug)]
pub enum Error {
    /// The markdown collaborator failed to render the heading
    #[error("Markdown rendering failed: {0}")]
    Markdown(String),

    /// The emoji collaborator failed to substitute emoji images
    #[error("Emoji substitution failed: {0}")]
    Emoji(String),

    /// A font payload or font set could not be built
    #[error("Font error: {0}")]
    Font(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Other(format!("formatting failed: {}", err))
    }
}
