//! Integration tests for the admin and user controllers
//!
//! Each test drives the public controller API over a shared store backed by
//! in-memory persistence, and checks both the returned values and what was
//! persisted.

use groovy_catalog::{
    share, AdminController, CatalogConfig, CatalogStore, MemoryPersistence, SharedStore,
    UserController, DUPLICATE_SONG_MESSAGE,
};
use groovy_core::{GroovyError, NewSong, Song, SongId};

// ===== Test Helpers =====

fn form(title: &str, artist: &str, file_path: &str) -> NewSong {
    NewSong {
        title: title.into(),
        artist: artist.into(),
        genre: "Rock".into(),
        album: "Album".into(),
        file_path: file_path.into(),
        ..NewSong::default()
    }
}

struct Fixture {
    backend: MemoryPersistence,
    store: SharedStore,
    admin: AdminController,
    user: UserController,
}

fn fixture() -> Fixture {
    let backend = MemoryPersistence::new();
    let store = share(CatalogStore::open(
        Box::new(backend.clone()),
        CatalogConfig::default(),
    ));
    Fixture {
        admin: AdminController::new(store.clone()),
        user: UserController::new(store.clone()),
        backend,
        store,
    }
}

fn ids(songs: &[Song]) -> Vec<u64> {
    songs.iter().map(|s| s.id.get()).collect()
}

// ===== Admin =====

#[test]
fn add_song_assigns_sequential_ids_and_persists() {
    let f = fixture();

    let a = f.admin.add_song(form("One", "A", "/m/one.mp3")).unwrap();
    let b = f.admin.add_song(form("Two", "B", "/m/two.mp3")).unwrap();

    assert_eq!(a.id, SongId::new(1));
    assert_eq!(b.id, SongId::new(2));
    assert_eq!(ids(&f.admin.list_songs()), vec![1, 2]);
    assert_eq!(ids(&f.backend.saved_library()), vec![1, 2]);
}

#[test]
fn add_song_normalizes_blank_fields() {
    let f = fixture();

    let song = f
        .admin
        .add_song(NewSong {
            title: "  Spaced  ".into(),
            year: " 1999 ".into(),
            duration: "  ".into(),
            ..NewSong::default()
        })
        .unwrap();

    assert_eq!(song.title, "Spaced");
    assert_eq!(song.artist, "Unknown Artist");
    assert_eq!(song.genre, "Unknown Genre");
    assert_eq!(song.album, "Unknown Album");
    assert_eq!(song.year, Some(1999));
    assert_eq!(song.duration, None);
    assert_eq!(song.file_path, None);
}

#[test]
fn add_song_rejects_non_numeric_year() {
    let f = fixture();

    let err = f
        .admin
        .add_song(NewSong {
            title: "Song".into(),
            year: "nineteen".into(),
            ..NewSong::default()
        })
        .unwrap_err();

    assert!(matches!(err, GroovyError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Year must be a number");
    assert!(f.admin.list_songs().is_empty());
    assert_eq!(f.backend.library_saves(), 0);
}

#[test]
fn add_song_rejects_same_path() {
    let f = fixture();
    f.admin.add_song(form("One", "A", "/music/rock/one.mp3")).unwrap();

    let err = f
        .admin
        .add_song(form("Different", "Other", "/music/rock/../rock/./one.mp3"))
        .unwrap_err();

    assert!(matches!(err, GroovyError::Duplicate(_)));
    assert_eq!(err.to_string(), DUPLICATE_SONG_MESSAGE);
    assert_eq!(f.admin.list_songs().len(), 1);
}

#[test]
fn add_song_rejects_same_title_and_artist() {
    let f = fixture();
    f.admin.add_song(form("Yesterday", "The Beatles", "")).unwrap();

    let err = f
        .admin
        .add_song(form(" YESTERDAY ", "the beatles", "/other.mp3"))
        .unwrap_err();
    assert_eq!(err.to_string(), DUPLICATE_SONG_MESSAGE);

    // Same title by a different artist is fine
    assert!(f.admin.add_song(form("Yesterday", "Boyz II Men", "")).is_ok());
}

#[test]
fn delete_song_cascades_everywhere() {
    let f = fixture();
    let one = f.admin.add_song(form("One", "A", "")).unwrap();
    let two = f.admin.add_song(form("Two", "B", "")).unwrap();

    assert!(f.user.add_to_playlist(one.id, "Mix"));
    assert!(f.user.add_to_playlist(two.id, "Mix"));
    assert!(f.user.add_to_default_playlist(one.id));
    f.store.borrow_mut().set_current(Some(one.id));

    assert!(f.admin.delete_song(one.id));

    assert_eq!(ids(&f.admin.list_songs()), vec![2]);
    assert_eq!(ids(&f.user.playlist_songs("Mix")), vec![2]);
    assert!(f.user.playlist_songs("My Playlist").is_empty());
    assert!(f.store.borrow().current_song().is_none());

    let saved = f.backend.saved_playlists().unwrap();
    assert!(saved.playlists.iter().all(|(_, ids)| !ids.contains(&one.id)));

    // Deleting again reports nothing removed
    assert!(!f.admin.delete_song(one.id));
}

#[test]
fn deleted_highest_id_is_reused() {
    let f = fixture();
    f.admin.add_song(form("One", "A", "")).unwrap();
    let two = f.admin.add_song(form("Two", "B", "")).unwrap();
    f.admin.delete_song(two.id);

    let three = f.admin.add_song(form("Three", "C", "")).unwrap();
    assert_eq!(three.id, SongId::new(2));
}

// ===== User =====

#[test]
fn search_matches_title_artist_and_genre() {
    let f = fixture();
    f.admin.add_song(form("Hotel California", "Eagles", "")).unwrap();
    f.admin
        .add_song(NewSong {
            title: "Take Five".into(),
            artist: "Dave Brubeck".into(),
            genre: "Jazz".into(),
            ..NewSong::default()
        })
        .unwrap();

    assert_eq!(ids(&f.user.search("hotel")), vec![1]);
    assert_eq!(ids(&f.user.search("BRUBECK")), vec![2]);
    assert_eq!(ids(&f.user.search("jazz")), vec![2]);
    assert!(f.user.search("polka").is_empty());
}

#[test]
fn blank_search_returns_nothing() {
    let f = fixture();
    f.admin.add_song(form("One", "A", "")).unwrap();

    assert!(f.user.search("").is_empty());
    assert!(f.user.search("   ").is_empty());
}

#[test]
fn playlists_keep_creation_order() {
    let f = fixture();

    assert!(f.user.create_playlist("Workout"));
    assert!(f.user.create_playlist("Chill"));
    assert!(!f.user.create_playlist(""));

    assert_eq!(f.user.playlists(), vec!["My Playlist", "Workout", "Chill"]);
    let saved = f.backend.saved_playlists().unwrap();
    let names: Vec<&str> = saved.playlists.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["My Playlist", "Workout", "Chill"]);
}

#[test]
fn playlist_membership_round_trip() {
    let f = fixture();
    let one = f.admin.add_song(form("One", "A", "")).unwrap();

    assert!(f.user.add_to_playlist(one.id, "Mix"));
    assert!(!f.user.add_to_playlist(one.id, "Mix"));
    assert!(!f.user.add_to_playlist(SongId::new(42), "Mix"));

    assert!(f.user.remove_from_playlist(one.id, "Mix"));
    assert!(!f.user.remove_from_playlist(one.id, "Mix"));
    assert!(f.user.playlist_songs("Mix").is_empty());
    assert!(f.user.playlist_songs("Unknown").is_empty());
}

#[test]
fn favorites_follow_library_order() {
    let f = fixture();
    let one = f.admin.add_song(form("One", "A", "")).unwrap();
    let two = f.admin.add_song(form("Two", "B", "")).unwrap();

    assert!(f.user.toggle_favorite(two.id));
    assert!(f.user.toggle_favorite(one.id));
    assert_eq!(ids(&f.user.favorites()), vec![1, 2]);

    assert!(!f.user.toggle_favorite(two.id));
    assert_eq!(ids(&f.user.favorites()), vec![1]);
}

#[test]
fn history_is_most_recent_first_and_bounded() {
    let f = fixture();
    for i in 1..=25 {
        f.admin.add_song(form(&format!("Song {}", i), "A", "")).unwrap();
    }
    for i in 1..=25 {
        f.store.borrow_mut().record_play(SongId::new(i));
    }

    let history = f.user.history();
    assert_eq!(history.len(), 20);
    assert_eq!(history[0].id, SongId::new(25));
    assert_eq!(history[19].id, SongId::new(6));
}

// ===== Reopen =====

#[test]
fn reopening_restores_library_and_playlists() {
    let f = fixture();
    let one = f.admin.add_song(form("One", "A", "")).unwrap();
    let two = f.admin.add_song(form("Two", "B", "")).unwrap();
    f.user.add_to_playlist(two.id, "Mix");
    f.user.add_to_playlist(one.id, "Mix");

    let reopened = share(CatalogStore::open(
        Box::new(f.backend.clone()),
        CatalogConfig::default(),
    ));
    let user = UserController::new(reopened.clone());

    assert_eq!(reopened.borrow().library_len(), 2);
    assert_eq!(user.playlists(), vec!["My Playlist", "Mix"]);
    assert_eq!(ids(&user.playlist_songs("Mix")), vec![2, 1]);
}
