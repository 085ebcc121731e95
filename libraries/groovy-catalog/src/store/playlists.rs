//! Playlist operations
//!
//! Playlists hold song ids only; songs are resolved against the library on
//! read, so a library deletion only has to unlink ids.

use super::{CatalogStore, Playlist};
use crate::list::SongList;
use groovy_core::{Song, SongId};
use tracing::debug;

impl CatalogStore {
    pub(super) fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|playlist| playlist.name == name)
    }

    fn playlist_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|playlist| playlist.name == name)
    }

    pub(super) fn resolve_ids(&self, ids: &SongList<SongId>) -> Vec<&Song> {
        ids.iter()
            .filter_map(|id| self.library.find_by_id(*id))
            .collect()
    }

    /// Playlist names in creation order
    pub fn playlist_names(&self) -> Vec<&str> {
        self.playlists
            .iter()
            .map(|playlist| playlist.name.as_str())
            .collect()
    }

    pub fn has_playlist(&self, name: &str) -> bool {
        self.playlist(name).is_some()
    }

    /// Songs of a playlist in playlist order, or `None` if it does not exist
    pub fn playlist_songs(&self, name: &str) -> Option<Vec<&Song>> {
        self.playlist(name)
            .map(|playlist| self.resolve_ids(&playlist.songs))
    }

    /// Create an empty playlist
    ///
    /// The name is trimmed; a blank name fails. An existing name is left
    /// untouched and still counts as success.
    pub fn create_playlist(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if self.has_playlist(name) {
            return true;
        }

        debug!(playlist = %name, "Creating playlist");
        self.playlists.push(Playlist::new(name));
        self.save_playlists();
        true
    }

    /// Append a library song to a playlist, creating the playlist if needed
    ///
    /// Fails for unknown songs and for songs already in the playlist.
    pub fn add_to_playlist(&mut self, name: &str, id: SongId) -> bool {
        let name = name.trim();
        if !self.create_playlist(name) {
            return false;
        }
        if !self.library.contains(id) {
            return false;
        }

        let Some(playlist) = self.playlist_mut(name) else {
            return false;
        };
        if playlist.songs.contains(id) {
            return false;
        }

        playlist.songs.add(id);
        debug!(playlist = %name, song_id = %id, "Added song to playlist");
        self.save_playlists();
        true
    }

    /// Remove a song from one playlist; persists only when something changed
    pub fn remove_from_playlist(&mut self, name: &str, id: SongId) -> bool {
        let removed = self
            .playlist_mut(name)
            .is_some_and(|playlist| playlist.songs.delete(id));

        if removed {
            debug!(playlist = %name, song_id = %id, "Removed song from playlist");
            self.save_playlists();
        }
        removed
    }

    /// Remove a song from every playlist; persists only when something changed
    pub fn remove_song_from_all_playlists(&mut self, id: SongId) -> bool {
        let mut changed = false;
        for playlist in &mut self.playlists {
            changed |= playlist.songs.delete(id);
        }

        if changed {
            self.save_playlists();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::MemoryPersistence;
    use crate::{CatalogConfig, CatalogStore};
    use groovy_core::{PlaylistOrigin, Song, SongId};

    fn library() -> Vec<Song> {
        (1..=3)
            .map(|id| {
                Song::new(
                    SongId::new(id),
                    format!("Song {}", id),
                    format!("Artist {}", id),
                    "Pop",
                    "Album",
                )
            })
            .collect()
    }

    fn ids(songs: &[&Song]) -> Vec<u64> {
        songs.iter().map(|s| s.id.get()).collect()
    }

    fn open(backend: &MemoryPersistence) -> CatalogStore {
        CatalogStore::open(Box::new(backend.clone()), CatalogConfig::default())
    }

    #[test]
    fn default_playlist_created_when_none_exist() {
        let backend = MemoryPersistence::with_library(library());
        let store = open(&backend);

        assert_eq!(store.playlist_names(), vec!["My Playlist"]);
        let saved = backend.saved_playlists().unwrap();
        assert_eq!(saved.playlists, vec![("My Playlist".to_string(), vec![])]);
    }

    #[test]
    fn create_playlist_trims_and_rejects_blank() {
        let backend = MemoryPersistence::with_library(library());
        let mut store = open(&backend);
        let saves = backend.playlist_saves();

        assert!(!store.create_playlist("   "));
        assert!(store.create_playlist("  Road Trip "));
        assert!(store.has_playlist("Road Trip"));
        assert_eq!(backend.playlist_saves(), saves + 1);

        // Existing name is a successful no-op
        assert!(store.create_playlist("Road Trip"));
        assert_eq!(backend.playlist_saves(), saves + 1);

        // Names are case-sensitive
        assert!(store.create_playlist("road trip"));
        assert_eq!(store.playlist_names(), vec!["My Playlist", "Road Trip", "road trip"]);
    }

    #[test]
    fn add_to_playlist_auto_creates_and_rejects_duplicates() {
        let backend = MemoryPersistence::with_library(library());
        let mut store = open(&backend);

        assert!(store.add_to_playlist("Gym", SongId::new(2)));
        assert!(store.add_to_playlist("Gym", SongId::new(1)));
        assert!(!store.add_to_playlist("Gym", SongId::new(2)));
        assert!(!store.add_to_playlist("Gym", SongId::new(99)));

        assert_eq!(ids(&store.playlist_songs("Gym").unwrap()), vec![2, 1]);
        assert!(store.playlist_songs("Nope").is_none());
    }

    #[test]
    fn remove_from_playlist_persists_only_on_change() {
        let backend = MemoryPersistence::with_library(library());
        let mut store = open(&backend);
        store.add_to_playlist("Mix", SongId::new(1));
        let saves = backend.playlist_saves();

        assert!(!store.remove_from_playlist("Mix", SongId::new(3)));
        assert!(!store.remove_from_playlist("Missing", SongId::new(1)));
        assert_eq!(backend.playlist_saves(), saves);

        assert!(store.remove_from_playlist("Mix", SongId::new(1)));
        assert_eq!(backend.playlist_saves(), saves + 1);
        assert!(store.playlist_songs("Mix").unwrap().is_empty());
    }

    #[test]
    fn library_delete_cascades_to_playlists() {
        let backend = MemoryPersistence::with_library(library());
        let mut store = open(&backend);
        store.add_to_playlist("A", SongId::new(1));
        store.add_to_playlist("A", SongId::new(2));
        store.add_to_playlist("B", SongId::new(2));

        assert!(store.delete_song(SongId::new(2)));
        assert_eq!(ids(&store.playlist_songs("A").unwrap()), vec![1]);
        assert!(store.playlist_songs("B").unwrap().is_empty());

        let saved = backend.saved_playlists().unwrap();
        let b = saved.playlists.iter().find(|(name, _)| name == "B").unwrap();
        assert!(b.1.is_empty());
    }

    #[test]
    fn remove_from_all_without_matches_does_not_save() {
        let backend = MemoryPersistence::with_library(library());
        let mut store = open(&backend);
        let saves = backend.playlist_saves();

        assert!(!store.remove_song_from_all_playlists(SongId::new(1)));
        assert_eq!(backend.playlist_saves(), saves);
    }

    #[test]
    fn load_drops_unknown_and_repeated_ids() {
        let backend = MemoryPersistence::with_library(library()).with_playlists(
            vec![
                ("A".to_string(), vec![SongId::new(3), SongId::new(7), SongId::new(3), SongId::new(1)]),
                ("B".to_string(), vec![SongId::new(2)]),
            ],
            PlaylistOrigin::Current,
        );
        let store = open(&backend);

        assert_eq!(store.playlist_names(), vec!["A", "B"]);
        assert_eq!(ids(&store.playlist_songs("A").unwrap()), vec![3, 1]);
        assert_eq!(ids(&store.playlist_songs("B").unwrap()), vec![2]);
        // Loading a current-format document does not rewrite it
        assert_eq!(backend.playlist_saves(), 0);
    }

    #[test]
    fn legacy_document_is_rewritten_after_load() {
        let backend = MemoryPersistence::with_library(library()).with_playlists(
            vec![("My Playlist".to_string(), vec![SongId::new(2), SongId::new(2), SongId::new(1)])],
            PlaylistOrigin::Legacy,
        );
        let store = open(&backend);

        assert_eq!(ids(&store.playlist_songs("My Playlist").unwrap()), vec![2, 1]);
        let saved = backend.saved_playlists().unwrap();
        assert_eq!(saved.origin, PlaylistOrigin::Current);
        assert_eq!(
            saved.playlists,
            vec![("My Playlist".to_string(), vec![SongId::new(2), SongId::new(1)])]
        );
    }
}
