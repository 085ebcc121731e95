/// Core error types for Groovy
use crate::types::SongId;
use thiserror::Error;

/// Result type alias using `GroovyError`
pub type Result<T> = std::result::Result<T, GroovyError>;

/// Core error type for Groovy
///
/// The `Display` output of the validation and duplicate variants doubles as
/// the message shown to the user by the presentation layer.
#[derive(Error, Debug)]
pub enum GroovyError {
    /// Invalid input (blank name, unparseable year, ...)
    #[error("{0}")]
    InvalidInput(String),

    /// Song already present in the library
    #[error("{0}")]
    Duplicate(String),

    /// Song not found in the library
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Errors reported by the external playback engine
    #[error("Playback error: {0}")]
    Playback(String),
}

impl GroovyError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a duplicate error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }
}
