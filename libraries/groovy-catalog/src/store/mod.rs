//! Catalog store - core orchestration
//!
//! Owns the library, playlists, favorites, history, queue and navigation
//! state, and is the only component that writes to persistence. Every
//! mutation flushes the affected document immediately; persistence
//! failures are logged and never unwind past the store.

mod navigation;
mod playlists;

use crate::{
    history::History,
    list::SongList,
    queue::PlayQueue,
    types::{CatalogConfig, NavigationState},
};
use groovy_core::{
    normalize_path, BrowseMode, CatalogPersistence, GroovyError, ListOrder, PlaylistOrigin,
    Result, Song, SongId,
};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// A named playlist: song ids in playlist order
#[derive(Debug, Clone)]
struct Playlist {
    name: String,
    songs: SongList<SongId>,
}

impl Playlist {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: SongList::new(),
        }
    }
}

/// The in-memory music catalog
pub struct CatalogStore {
    /// Master library; the only owner of `Song` values
    library: SongList<Song>,

    /// Playlists in creation order
    playlists: Vec<Playlist>,

    /// Favorite song ids (not pruned when a song is deleted)
    favorites: HashSet<SongId>,

    history: History,
    queue: PlayQueue,
    nav: NavigationState,
    config: CatalogConfig,
    persistence: Box<dyn CatalogPersistence>,
}

impl CatalogStore {
    /// Build the store and populate it from persistence
    ///
    /// The library is loaded first so playlist ids can be resolved against
    /// it. Load failures leave the affected collection empty. When no
    /// playlist exists afterwards, the default playlist is created.
    pub fn open(persistence: Box<dyn CatalogPersistence>, config: CatalogConfig) -> Self {
        let mut store = Self {
            library: SongList::new(),
            playlists: Vec::new(),
            favorites: HashSet::new(),
            history: History::new(config.history_size),
            queue: PlayQueue::new(),
            nav: NavigationState::new(config.default_playlist.clone()),
            config,
            persistence,
        };

        store.load_library();
        store.load_playlists();

        if store.playlists.is_empty() {
            let name = store.config.default_playlist.clone();
            info!(playlist = %name, "No playlists found, creating default playlist");
            store.playlists.push(Playlist::new(name));
            store.save_playlists();
        }

        store
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ===== Loading & Saving =====

    fn load_library(&mut self) {
        let records = match self.persistence.load_library() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Failed to load library, starting empty");
                return;
            }
        };

        let total = records.len();
        for song in records {
            if self.library.contains(song.id)
                || self.library_has_duplicate(&song.title, &song.artist, song.file_path.as_deref())
            {
                debug!(song_id = %song.id, title = %song.title, "Skipping duplicate library record");
                continue;
            }
            self.library.add(song);
        }

        info!(
            songs = self.library.len(),
            skipped = total - self.library.len(),
            "Library loaded"
        );
    }

    fn load_playlists(&mut self) {
        let document = match self.persistence.load_playlists() {
            Ok(Some(document)) => document,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "Failed to load playlists");
                return;
            }
        };

        for (name, ids) in document.playlists {
            let mut playlist = Playlist::new(name);
            for id in ids {
                // Repeated ids and ids without a library song are dropped
                if playlist.songs.contains(id) || !self.library.contains(id) {
                    continue;
                }
                playlist.songs.add(id);
            }

            match self.playlists.iter_mut().find(|p| p.name == playlist.name) {
                Some(existing) => *existing = playlist,
                None => self.playlists.push(playlist),
            }
        }

        info!(playlists = self.playlists.len(), "Playlists loaded");

        if document.origin == PlaylistOrigin::Legacy {
            info!("Migrating legacy playlist document to the multi-playlist format");
            self.save_playlists();
        }
    }

    fn save_library(&self) {
        let songs = self.library.get_all();
        if let Err(e) = self.persistence.save_library(&songs) {
            warn!(error = %e, songs = songs.len(), "Failed to save library");
        }
    }

    fn save_playlists(&self) {
        let snapshot: Vec<(String, Vec<SongId>)> = self
            .playlists
            .iter()
            .map(|playlist| (playlist.name.clone(), playlist.songs.ids()))
            .collect();

        if let Err(e) = self.persistence.save_playlists(&snapshot) {
            warn!(error = %e, playlists = snapshot.len(), "Failed to save playlists");
        }
    }

    // ===== Library =====

    /// Look up a library song by id
    pub fn resolve(&self, id: SongId) -> Option<&Song> {
        self.library.find_by_id(id)
    }

    /// All library songs in insertion order
    pub fn library_songs(&self) -> Vec<&Song> {
        self.library.get_all()
    }

    pub fn library_len(&self) -> usize {
        self.library.len()
    }

    /// Search the library by title, artist or genre
    pub fn search(&self, keyword: &str) -> Vec<&Song> {
        self.library.search(keyword)
    }

    /// One more than the highest id in the library, or 1 when empty
    ///
    /// Computed from the songs currently present, so deleting the song with
    /// the highest id makes that id available again.
    pub fn get_next_id(&self) -> SongId {
        self.library
            .iter()
            .map(|song| song.id)
            .max()
            .map_or(SongId::new(1), SongId::next)
    }

    /// Check whether a song with this path or title+artist already exists
    ///
    /// A non-empty path matches when both paths normalize to the same text.
    /// Title and artist match when both are non-empty and equal to an
    /// existing song's after trimming and lower-casing.
    pub fn library_has_duplicate(&self, title: &str, artist: &str, file_path: Option<&str>) -> bool {
        let title = fold(title);
        let artist = fold(artist);
        let path = file_path.and_then(normalize_path);

        self.library.iter().any(|song| {
            let same_path = match (&path, song.file_path.as_deref().and_then(normalize_path)) {
                (Some(wanted), Some(existing)) => *wanted == existing,
                _ => false,
            };

            same_path
                || (!title.is_empty()
                    && !artist.is_empty()
                    && fold(&song.title) == title
                    && fold(&song.artist) == artist)
        })
    }

    /// Append a fully built song to the library and persist
    ///
    /// Only id uniqueness is enforced here; content duplicates are the
    /// caller's check (see [`CatalogStore::library_has_duplicate`]).
    pub fn add_song(&mut self, song: Song) -> Result<()> {
        if self.library.contains(song.id) {
            return Err(GroovyError::duplicate(format!(
                "Song id {} already exists in Library.",
                song.id
            )));
        }

        debug!(song_id = %song.id, title = %song.title, "Adding song to library");
        self.library.add(song);
        self.save_library();
        Ok(())
    }

    /// Remove a song from the library and from every playlist
    ///
    /// If the song is the current one, navigation is reset to "nothing
    /// playing". Favorites keep the id. Returns whether the library held it.
    pub fn delete_song(&mut self, id: SongId) -> bool {
        let removed = self.library.delete(id);
        self.remove_song_from_all_playlists(id);

        if self.nav.current == Some(id) {
            self.nav.current = None;
            self.nav.is_playing = false;
        }

        debug!(song_id = %id, removed, "Deleting song from library");
        self.save_library();
        removed
    }

    // ===== Favorites =====

    /// Flip favorite status; returns `true` if the song is now a favorite
    pub fn toggle_favorite(&mut self, id: SongId) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    pub fn is_favorite(&self, id: SongId) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorite songs in library order
    pub fn favorites(&self) -> Vec<&Song> {
        self.library
            .iter()
            .filter(|song| self.favorites.contains(&song.id))
            .collect()
    }

    // ===== History & Queue =====

    /// Push a library song onto the play history
    pub fn record_play(&mut self, id: SongId) -> bool {
        match self.library.find_by_id(id) {
            Some(song) => {
                self.history.push(song.clone());
                true
            }
            None => false,
        }
    }

    /// History, oldest first
    pub fn history(&self) -> Vec<&Song> {
        self.history.get_all()
    }

    /// History, most recent first
    pub fn history_recent_first(&self) -> Vec<&Song> {
        self.history.recent_first()
    }

    /// Queue a library song
    pub fn enqueue(&mut self, id: SongId) -> bool {
        match self.library.find_by_id(id) {
            Some(song) => {
                self.queue.enqueue(song.clone());
                true
            }
            None => false,
        }
    }

    pub fn dequeue(&mut self) -> Option<Song> {
        self.queue.dequeue()
    }

    pub fn queued(&self) -> Vec<&Song> {
        self.queue.get_all()
    }

    // ===== Navigation State =====

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    /// The current song, if it is still in the library
    pub fn current_song(&self) -> Option<&Song> {
        self.nav.current.and_then(|id| self.library.find_by_id(id))
    }

    pub fn set_current(&mut self, id: Option<SongId>) {
        self.nav.current = id;
    }

    pub fn is_playing(&self) -> bool {
        self.nav.is_playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.nav.is_playing = playing;
    }

    pub fn mode(&self) -> BrowseMode {
        self.nav.mode
    }

    pub fn set_mode(&mut self, mode: BrowseMode) {
        self.nav.mode = mode;
    }

    pub fn order(&self) -> ListOrder {
        self.nav.order
    }

    pub fn set_order(&mut self, order: ListOrder) {
        debug!(order = %order, "Display order changed");
        self.nav.order = order;
    }

    pub fn current_playlist(&self) -> &str {
        &self.nav.current_playlist
    }

    pub fn set_current_playlist(&mut self, name: impl Into<String>) {
        self.nav.current_playlist = name.into();
    }
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}
