//! JSON document persistence
//!
//! Three documents under the data directory:
//! - library: array of song records
//! - playlists: object of playlist name to song id array, in playlist order
//! - legacy playlist: bare id array from the single-playlist era, read only
//!   when the playlists document is absent

use crate::config::StorageConfig;
use crate::error::{Result, StorageError};
use groovy_core::{
    CatalogPersistence, PlaylistDocument, PlaylistOrigin, Song, SongId, DEFAULT_PLAYLIST,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// `CatalogPersistence` over JSON files
#[derive(Debug, Clone)]
pub struct JsonStorage {
    config: StorageConfig,
}

impl JsonStorage {
    /// Validate the configuration and make sure the data directory exists
    pub fn open(config: StorageConfig) -> Result<Self> {
        config.validate()?;
        fs::create_dir_all(&config.data_dir)?;

        debug!(data_dir = ?config.data_dir, "Opened JSON storage");
        Ok(Self { config })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    // ===== Library =====

    /// Read library records
    ///
    /// A record that is not a valid song is skipped with a warning; a
    /// document that is not an array is an error.
    pub fn read_library(&self) -> Result<Vec<Song>> {
        let path = self.config.library_path();
        let Some(document) = read_json(&path)? else {
            debug!(path = ?path, "No library document");
            return Ok(Vec::new());
        };

        let Value::Array(records) = document else {
            return Err(StorageError::malformed(path, "expected an array of songs"));
        };

        let mut songs = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Song>(record) {
                Ok(song) => songs.push(song),
                Err(e) => warn!(path = ?path, index, error = %e, "Skipping invalid song record"),
            }
        }

        info!(songs = songs.len(), "Read library document");
        Ok(songs)
    }

    pub fn write_library(&self, songs: &[&Song]) -> Result<()> {
        write_json(&self.config.library_path(), songs)?;
        debug!(songs = songs.len(), "Wrote library document");
        Ok(())
    }

    // ===== Playlists =====

    /// Read playlists, falling back to the legacy document
    pub fn read_playlists(&self) -> Result<Option<PlaylistDocument>> {
        let path = self.config.playlists_path();
        if let Some(document) = read_json(&path)? {
            let Value::Object(entries) = document else {
                return Err(StorageError::malformed(path, "expected an object of playlists"));
            };
            return Ok(Some(PlaylistDocument {
                playlists: playlists_from_map(&path, entries),
                origin: PlaylistOrigin::Current,
            }));
        }

        let legacy_path = self.config.legacy_playlist_path();
        let Some(document) = read_json(&legacy_path)? else {
            debug!("No playlist documents");
            return Ok(None);
        };

        let ids = song_ids(&legacy_path, DEFAULT_PLAYLIST, document).ok_or_else(|| {
            StorageError::malformed(&legacy_path, "expected an array of song ids")
        })?;

        info!(path = ?legacy_path, songs = ids.len(), "Found legacy playlist document");
        Ok(Some(PlaylistDocument {
            playlists: vec![(DEFAULT_PLAYLIST.to_string(), ids)],
            origin: PlaylistOrigin::Legacy,
        }))
    }

    pub fn write_playlists(&self, playlists: &[(String, Vec<SongId>)]) -> Result<()> {
        let document: Map<String, Value> = playlists
            .iter()
            .map(|(name, ids)| {
                let ids = ids.iter().map(|id| Value::from(id.get())).collect();
                (name.clone(), Value::Array(ids))
            })
            .collect();

        write_json(&self.config.playlists_path(), &document)?;
        debug!(playlists = playlists.len(), "Wrote playlists document");
        Ok(())
    }
}

impl CatalogPersistence for JsonStorage {
    fn load_library(&self) -> groovy_core::Result<Vec<Song>> {
        Ok(self.read_library()?)
    }

    fn save_library(&self, songs: &[&Song]) -> groovy_core::Result<()> {
        Ok(self.write_library(songs)?)
    }

    fn load_playlists(&self) -> groovy_core::Result<Option<PlaylistDocument>> {
        Ok(self.read_playlists()?)
    }

    fn save_playlists(&self, playlists: &[(String, Vec<SongId>)]) -> groovy_core::Result<()> {
        Ok(self.write_playlists(playlists)?)
    }
}

fn playlists_from_map(path: &Path, entries: Map<String, Value>) -> Vec<(String, Vec<SongId>)> {
    entries
        .into_iter()
        .map(|(name, value)| {
            let ids = song_ids(path, &name, value).unwrap_or_else(|| {
                warn!(path = ?path, playlist = %name, "Playlist is not an id array, loading it empty");
                Vec::new()
            });
            (name, ids)
        })
        .collect()
}

/// Ids of a JSON array; entries that are not ids are skipped
fn song_ids(path: &Path, playlist: &str, value: Value) -> Option<Vec<SongId>> {
    let Value::Array(items) = value else {
        return None;
    };

    let ids = items
        .into_iter()
        .filter_map(|item| {
            let id = item.as_u64().map(SongId::new);
            if id.is_none() {
                warn!(path = ?path, playlist = %playlist, entry = %item, "Skipping invalid song id");
            }
            id
        })
        .collect();
    Some(ids)
}

/// Parse a JSON document; `None` when the file does not exist
fn read_json(path: &Path) -> Result<Option<Value>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Pretty-print with four-space indent, via a temp file and rename
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let tmp = temp_path(path);
    let mut file = fs::File::create(&tmp)?;
    file.write_all(&buffer)?;
    file.sync_all()?;
    drop(file);

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
