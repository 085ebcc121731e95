/// ID types for Groovy entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Song identifier
///
/// Positive integer assigned by the catalog store when a song is added.
/// Serialized as a bare JSON number in both persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(u64);

impl SongId {
    /// Create a song ID from its raw value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for SongId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
