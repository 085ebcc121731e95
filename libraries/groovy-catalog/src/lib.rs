//! Groovy - Catalog Management
//!
//! In-memory music catalog for Groovy.
//!
//! This crate provides:
//! - Song library with id lookup and keyword search
//! - Named playlists holding library song ids
//! - Favorites, play history (bounded) and a FIFO play queue
//! - Next / previous / similar-song navigation over the displayed order
//! - Admin and user controllers for the presentation layer
//! - Playback control with end-of-track auto-advance
//!
//! # Architecture
//!
//! `groovy-catalog` knows nothing about files or audio devices:
//! - Persistence is injected through [`groovy_core::CatalogPersistence`]
//! - Audio output is injected through [`groovy_core::PlaybackOutput`]
//!
//! [`MemoryPersistence`] keeps everything in memory, for tests and for
//! hosts that do not persist.
//!
//! # Example: Library and Playlists
//!
//! ```rust
//! use groovy_catalog::{share, AdminController, CatalogConfig, CatalogStore, MemoryPersistence, UserController};
//! use groovy_core::NewSong;
//!
//! let store = share(CatalogStore::open(
//!     Box::new(MemoryPersistence::new()),
//!     CatalogConfig::default(),
//! ));
//! let admin = AdminController::new(store.clone());
//! let user = UserController::new(store);
//!
//! let song = admin
//!     .add_song(NewSong {
//!         title: "So What".into(),
//!         artist: "Miles Davis".into(),
//!         genre: "Jazz".into(),
//!         ..NewSong::default()
//!     })
//!     .unwrap();
//!
//! assert!(user.add_to_playlist(song.id, "Evening"));
//! assert_eq!(user.playlists(), vec!["My Playlist", "Evening"]);
//! assert_eq!(user.search("miles").len(), 1);
//! ```
//!
//! # Example: Navigation
//!
//! ```rust
//! use groovy_catalog::{CatalogConfig, CatalogStore, MemoryPersistence};
//! use groovy_core::{ListOrder, Song, SongId};
//!
//! let songs = (1..=3)
//!     .map(|id| Song::new(SongId::new(id), format!("Song {}", id), "Artist", "Pop", "Album"))
//!     .collect();
//! let mut store = CatalogStore::open(
//!     Box::new(MemoryPersistence::with_library(songs)),
//!     CatalogConfig::default(),
//! );
//!
//! store.set_current(Some(SongId::new(2)));
//! assert_eq!(store.next_song().unwrap().id, SongId::new(3));
//!
//! // Descending order reverses what "next" means
//! store.set_order(ListOrder::Desc);
//! assert_eq!(store.next_song().unwrap().id, SongId::new(1));
//! ```

mod controllers;
mod history;
mod list;
mod memory;
mod playback;
mod queue;
mod store;
pub mod types;

// Public exports
pub use controllers::{share, AdminController, SharedStore, UserController, DUPLICATE_SONG_MESSAGE};
pub use history::{History, HISTORY_CAPACITY};
pub use list::{CatalogEntry, Iter, SongList};
pub use memory::MemoryPersistence;
pub use playback::{PlaybackController, END_OF_TRACK_FRACTION};
pub use queue::PlayQueue;
pub use store::CatalogStore;
pub use types::{CatalogConfig, Direction, NavigationState, ProgressTick, TickOutcome};
