//! Admin and user façades
//!
//! Translate catalog operations into what the presentation layer needs.
//! Both controllers share one injected store; results are owned copies so
//! callers never hold a borrow of the store.

use crate::store::CatalogStore;
use groovy_core::{GroovyError, NewSong, Result, Song, SongId};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// Store handle shared by every controller on the UI thread
pub type SharedStore = Rc<RefCell<CatalogStore>>;

/// Wrap a store for sharing between controllers
pub fn share(store: CatalogStore) -> SharedStore {
    Rc::new(RefCell::new(store))
}

/// Message returned when an added song already exists
pub const DUPLICATE_SONG_MESSAGE: &str = "Duplicate song detected (already exists in Library).";

fn owned(songs: Vec<&Song>) -> Vec<Song> {
    songs.into_iter().cloned().collect()
}

/// Library administration: add, delete and list songs
#[derive(Clone)]
pub struct AdminController {
    store: SharedStore,
}

impl AdminController {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All library songs in insertion order
    pub fn list_songs(&self) -> Vec<Song> {
        owned(self.store.borrow().library_songs())
    }

    /// Validate the form, reject duplicates, assign an id and persist
    ///
    /// The returned error's `Display` is the message to show the admin.
    pub fn add_song(&self, form: NewSong) -> Result<Song> {
        let mut store = self.store.borrow_mut();

        let file_path = form.file_path();
        if store.library_has_duplicate(&form.title(), &form.artist(), file_path.as_deref()) {
            debug!(title = %form.title(), "Rejected duplicate song");
            return Err(GroovyError::duplicate(DUPLICATE_SONG_MESSAGE));
        }

        let song = form.into_song(store.get_next_id())?;
        store.add_song(song.clone())?;

        info!(song_id = %song.id, title = %song.title, artist = %song.artist, "Song added");
        Ok(song)
    }

    /// Delete a song from the library and every playlist
    pub fn delete_song(&self, id: SongId) -> bool {
        self.store.borrow_mut().delete_song(id)
    }
}

/// Listener features: search, playlists, favorites, history
#[derive(Clone)]
pub struct UserController {
    store: SharedStore,
}

impl UserController {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Search the library; a blank keyword returns nothing
    pub fn search(&self, keyword: &str) -> Vec<Song> {
        if keyword.trim().is_empty() {
            return Vec::new();
        }
        owned(self.store.borrow().search(keyword.trim()))
    }

    pub fn create_playlist(&self, name: &str) -> bool {
        self.store.borrow_mut().create_playlist(name)
    }

    /// Playlist names in creation order
    pub fn playlists(&self) -> Vec<String> {
        self.store
            .borrow()
            .playlist_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Songs of a playlist; empty when the playlist does not exist
    pub fn playlist_songs(&self, name: &str) -> Vec<Song> {
        self.store
            .borrow()
            .playlist_songs(name)
            .map(owned)
            .unwrap_or_default()
    }

    pub fn add_to_playlist(&self, id: SongId, name: &str) -> bool {
        self.store.borrow_mut().add_to_playlist(name, id)
    }

    /// Add to the configured default playlist
    pub fn add_to_default_playlist(&self, id: SongId) -> bool {
        let name = self.store.borrow().config().default_playlist.clone();
        self.add_to_playlist(id, &name)
    }

    pub fn remove_from_playlist(&self, id: SongId, name: &str) -> bool {
        self.store.borrow_mut().remove_from_playlist(name, id)
    }

    /// Returns `true` if the song is now a favorite
    pub fn toggle_favorite(&self, id: SongId) -> bool {
        self.store.borrow_mut().toggle_favorite(id)
    }

    /// Favorite songs in library order
    pub fn favorites(&self) -> Vec<Song> {
        owned(self.store.borrow().favorites())
    }

    /// Recently played songs, most recent first
    pub fn history(&self) -> Vec<Song> {
        owned(self.store.borrow().history_recent_first())
    }
}
