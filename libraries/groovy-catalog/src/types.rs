//! Core types for the catalog store

use crate::history::HISTORY_CAPACITY;
use groovy_core::{BrowseMode, ListOrder, Song, SongId, DEFAULT_PLAYLIST};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the catalog store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Maximum history size (default: 20)
    pub history_size: usize,

    /// Playlist created when none exist, and the target of "add to default
    /// playlist" (default: "My Playlist")
    pub default_playlist: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            history_size: HISTORY_CAPACITY,
            default_playlist: DEFAULT_PLAYLIST.to_string(),
        }
    }
}

/// Navigation state mutated by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Song currently loaded in the player
    pub current: Option<SongId>,

    /// Whether the current song is playing (vs paused/stopped)
    pub is_playing: bool,

    /// Catalog being browsed
    pub mode: BrowseMode,

    /// Playlist being browsed; only meaningful in playlist mode
    pub current_playlist: String,

    /// Display direction of the active catalog
    pub order: ListOrder,
}

impl NavigationState {
    pub(crate) fn new(current_playlist: impl Into<String>) -> Self {
        Self {
            current: None,
            is_playing: false,
            mode: BrowseMode::Library,
            current_playlist: current_playlist.into(),
            order: ListOrder::Asc,
        }
    }
}

/// Direction of a next/previous request, relative to the displayed order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// What a progress tick decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Song still playing (or paused); keep polling
    Continue,

    /// Song ended and the next one was started
    Advanced(Song),

    /// Song ended with nothing to advance to; playback stopped
    Stopped,
}

/// Result of one progress poll from the playback collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTick {
    /// Time played so far
    pub elapsed: Duration,

    /// Length of the current song (zero when unknown)
    pub total: Duration,

    /// `elapsed / total`, clamped to 0..=1 (0 when length is unknown)
    pub fraction: f64,

    pub outcome: TickOutcome,
}
