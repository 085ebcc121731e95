//! Next / previous / similar song resolution
//!
//! Navigation follows what the presentation layer is showing top to bottom:
//! the active catalog (library or current playlist) in insertion order,
//! reversed as a whole when the order is `Desc`.

use super::CatalogStore;
use crate::types::Direction;
use groovy_core::{BrowseMode, ListOrder, Song, DEFAULT_PLAYLIST};
use rand::seq::SliceRandom;

impl CatalogStore {
    /// Songs of a catalog in the given display order
    ///
    /// Playlist mode uses the current playlist, falling back to the playlist
    /// named `My Playlist` and then to nothing. Navigation state is not changed.
    pub fn list(&self, mode: BrowseMode, order: ListOrder) -> Vec<&Song> {
        let base = match mode {
            BrowseMode::Library => self.library.get_all(),
            BrowseMode::Playlist => self
                .playlist(&self.nav.current_playlist)
                .or_else(|| self.playlist(DEFAULT_PLAYLIST))
                .map(|playlist| self.resolve_ids(&playlist.songs))
                .unwrap_or_default(),
        };
        order.apply(base)
    }

    /// The active catalog in the active order
    pub fn ordered_view(&self) -> Vec<&Song> {
        self.list(self.nav.mode, self.nav.order)
    }

    /// A catalog in the active order, without switching modes
    pub fn ordered_view_for(&self, mode: BrowseMode) -> Vec<&Song> {
        self.list(mode, self.nav.order)
    }

    /// Song after the current one in the displayed order
    pub fn next_song(&self) -> Option<&Song> {
        self.advance(Direction::Next)
    }

    /// Song before the current one in the displayed order
    pub fn prev_song(&self) -> Option<&Song> {
        self.advance(Direction::Previous)
    }

    /// Resolve the neighbour of the current song
    ///
    /// Returns `None` when nothing is current or the active catalog is
    /// empty. When the current song has no neighbour in that direction (or
    /// is not part of the active catalog), falls back to
    /// [`CatalogStore::find_similar_song`].
    pub fn advance(&self, direction: Direction) -> Option<&Song> {
        let current = self.current_song()?;
        let songs = self.ordered_view();
        if songs.is_empty() {
            return None;
        }

        if let Some(index) = songs.iter().position(|song| song.id == current.id) {
            let neighbour = match direction {
                Direction::Next => songs.get(index + 1),
                Direction::Previous => index.checked_sub(1).and_then(|i| songs.get(i)),
            };
            if let Some(song) = neighbour {
                return Some(*song);
            }
        }

        self.find_similar_song(current)
    }

    /// Pick another library song related to `current`
    ///
    /// The first other song (library order) by the same artist wins, then
    /// the first with the same genre, then a uniformly random other song.
    /// `None` only when the library has no other song.
    pub fn find_similar_song(&self, current: &Song) -> Option<&Song> {
        let candidates: Vec<&Song> = self
            .library
            .iter()
            .filter(|song| song.id != current.id)
            .collect();

        let similar = candidates
            .iter()
            .find(|song| song.artist == current.artist)
            .or_else(|| candidates.iter().find(|song| song.genre == current.genre))
            .or_else(|| candidates.choose(&mut rand::thread_rng()))
            .copied();
        similar
    }
}
