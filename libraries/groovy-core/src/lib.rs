//! Groovy Core
//!
//! Shared domain types, traits, and error handling for the Groovy music
//! library manager.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `NewSong`, `SongId`, `BrowseMode`, `ListOrder`
//! - **Core Traits**: `CatalogPersistence` (implemented by `groovy-storage`)
//!   and `PlaybackOutput` (implemented by whatever audio engine hosts the
//!   catalog)
//! - **Error Handling**: Unified `GroovyError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use groovy_core::types::{NewSong, SongId};
//!
//! let form = NewSong {
//!     title: "Blue in Green".into(),
//!     artist: "Miles Davis".into(),
//!     year: "1959".into(),
//!     duration: "5:37".into(),
//!     ..NewSong::default()
//! };
//!
//! let song = form.into_song(SongId::new(1)).unwrap();
//! assert_eq!(song.year, Some(1959));
//! assert_eq!(song.genre, "Unknown Genre");
//! assert_eq!(song.duration_secs(), Some(337));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{GroovyError, Result};
pub use traits::{CatalogPersistence, PlaybackOutput, PlaylistDocument, PlaylistOrigin};
pub use types::{
    normalize_path, parse_duration, BrowseMode, ListOrder, NewSong, Song, SongId, DEFAULT_PLAYLIST,
};
