//! Groovy - Storage Layer
//!
//! JSON document persistence for the Groovy catalog.
//!
//! [`JsonStorage`] implements [`groovy_core::CatalogPersistence`] over three
//! documents in a data directory:
//! - `songs.json`: the library, one record per song
//! - `playlists.json`: playlist name to song ids, in playlist order
//! - `playlist.json`: the legacy single playlist, read when `playlists.json`
//!   is absent so the catalog can migrate it
//!
//! Every write replaces the whole document through a temp file and rename.
//! Locations come from [`StorageConfig`], loaded from `groovy.toml` and
//! `GROOVY__*` environment variables.
//!
//! # Example
//!
//! ```rust,no_run
//! use groovy_storage::{JsonStorage, StorageConfig};
//!
//! let config = StorageConfig::load()?;
//! let storage = JsonStorage::open(config)?;
//! let songs = storage.read_library()?;
//! println!("{} songs", songs.len());
//! # Ok::<(), groovy_storage::StorageError>(())
//! ```

mod config;
mod error;
mod json;

pub use config::{StorageConfig, CONFIG_FILE, ENV_PREFIX};
pub use error::{Result, StorageError};
pub use json::JsonStorage;
