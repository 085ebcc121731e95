/// Integration seams between the catalog and its collaborators
use crate::error::Result;
use crate::types::{Song, SongId};
use std::time::Duration;

/// Where a loaded playlists document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistOrigin {
    /// The multi-playlist document (name → ids)
    Current,
    /// The legacy single-playlist document (bare id array)
    ///
    /// The catalog re-saves these in the current format right after loading.
    Legacy,
}

/// Playlists as persisted: names in document order, each with its song ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDocument {
    pub playlists: Vec<(String, Vec<SongId>)>,
    pub origin: PlaylistOrigin,
}

/// Persistence gateway used by the catalog store
///
/// Implementations own the on-disk format. Every save is a full overwrite.
/// The store treats every error returned here as non-fatal.
pub trait CatalogPersistence {
    /// Load every library record, in stored order
    ///
    /// A missing document is not an error: return an empty list.
    fn load_library(&self) -> Result<Vec<Song>>;

    /// Overwrite the library document
    fn save_library(&self, songs: &[&Song]) -> Result<()>;

    /// Load all playlists
    ///
    /// Returns `None` when neither the current nor the legacy document exists.
    fn load_playlists(&self) -> Result<Option<PlaylistDocument>>;

    /// Overwrite the playlists document in the current format
    fn save_playlists(&self, playlists: &[(String, Vec<SongId>)]) -> Result<()>;
}

/// Audio engine driven by the playback controller
///
/// Implemented by the host application (decoder + output device). The
/// catalog only asks it to start, pause, resume or stop a song.
pub trait PlaybackOutput {
    /// Load and start playing the song's audio file
    ///
    /// # Errors
    /// Returns an error if the song has no playable file
    fn play(&mut self, song: &Song) -> Result<()>;

    /// Pause output, keeping the position
    fn pause(&mut self);

    /// Resume a paused song
    fn resume(&mut self);

    /// Stop output entirely
    fn stop(&mut self);

    /// Measured length of the song's audio, if the engine can tell
    ///
    /// When `None`, the song's `m:ss` duration text is used instead.
    fn track_length(&self, song: &Song) -> Option<Duration> {
        let _ = song;
        None
    }
}
