/// Browsing context and display direction used by navigation
use serde::{Deserialize, Serialize};

/// Name of the playlist every catalog starts with, also used for the
/// legacy single-playlist document
pub const DEFAULT_PLAYLIST: &str = "My Playlist";

/// Which catalog the user is currently browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowseMode {
    /// The whole song library
    #[default]
    Library,
    /// A single named playlist
    Playlist,
}

impl BrowseMode {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Playlist => "playlist",
        }
    }
}

impl std::fmt::Display for BrowseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display direction applied to a catalog's insertion order
///
/// This is not a sort by any song attribute: `Desc` simply reverses
/// whatever order the underlying catalog holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Insertion order, oldest first
    #[default]
    Asc,
    /// Reversed insertion order, newest first
    Desc,
}

impl ListOrder {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Apply this direction to an insertion-ordered sequence
    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == Self::Desc {
            items.reverse();
        }
        items
    }
}

impl std::fmt::Display for ListOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
