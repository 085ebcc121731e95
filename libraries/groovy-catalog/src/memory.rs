//! In-memory persistence backend
//!
//! Keeps the last saved library and playlists in memory instead of on disk.
//! Clones share the same state, so a caller can hand one clone to the store
//! and inspect what was saved through another.

use groovy_core::{
    CatalogPersistence, GroovyError, PlaylistDocument, PlaylistOrigin, Result, Song, SongId,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MemoryState {
    library: Vec<Song>,
    playlists: Option<PlaylistDocument>,
    library_saves: usize,
    playlist_saves: usize,
    unavailable: bool,
}

/// Shared in-memory `CatalogPersistence`
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryPersistence {
    /// Empty backend: no library, no playlists document
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with library records
    pub fn with_library(songs: Vec<Song>) -> Self {
        let backend = Self::new();
        backend.state.borrow_mut().library = songs;
        backend
    }

    /// Seed the playlists document
    #[must_use]
    pub fn with_playlists(self, playlists: Vec<(String, Vec<SongId>)>, origin: PlaylistOrigin) -> Self {
        self.state.borrow_mut().playlists = Some(PlaylistDocument { playlists, origin });
        self
    }

    /// Make every load and save fail, as if the storage went away
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.borrow_mut().unavailable = unavailable;
    }

    /// Library as last saved
    pub fn saved_library(&self) -> Vec<Song> {
        self.state.borrow().library.clone()
    }

    /// Playlists as last saved (or seeded)
    pub fn saved_playlists(&self) -> Option<PlaylistDocument> {
        self.state.borrow().playlists.clone()
    }

    /// Number of library saves so far
    pub fn library_saves(&self) -> usize {
        self.state.borrow().library_saves
    }

    /// Number of playlist saves so far
    pub fn playlist_saves(&self) -> usize {
        self.state.borrow().playlist_saves
    }

    fn check_available(&self) -> Result<()> {
        if self.state.borrow().unavailable {
            return Err(GroovyError::storage("in-memory storage unavailable"));
        }
        Ok(())
    }
}

impl CatalogPersistence for MemoryPersistence {
    fn load_library(&self) -> Result<Vec<Song>> {
        self.check_available()?;
        Ok(self.state.borrow().library.clone())
    }

    fn save_library(&self, songs: &[&Song]) -> Result<()> {
        self.check_available()?;
        let mut state = self.state.borrow_mut();
        state.library = songs.iter().map(|song| (*song).clone()).collect();
        state.library_saves += 1;
        Ok(())
    }

    fn load_playlists(&self) -> Result<Option<PlaylistDocument>> {
        self.check_available()?;
        Ok(self.state.borrow().playlists.clone())
    }

    fn save_playlists(&self, playlists: &[(String, Vec<SongId>)]) -> Result<()> {
        self.check_available()?;
        let mut state = self.state.borrow_mut();
        state.playlists = Some(PlaylistDocument {
            playlists: playlists.to_vec(),
            origin: PlaylistOrigin::Current,
        });
        state.playlist_saves += 1;
        Ok(())
    }
}
