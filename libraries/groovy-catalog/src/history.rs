//! Play history tracking
//!
//! Maintains a bounded, most-recently-played record of songs

use groovy_core::Song;
use std::collections::VecDeque;

/// Default number of songs remembered
pub const HISTORY_CAPACITY: usize = 20;

/// Play history with bounded size
///
/// Songs are pushed at the back. When full, the oldest entry (front) is
/// evicted before the new one is appended. Playing the same song twice
/// keeps two entries.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = back)
    songs: VecDeque<Song>,

    /// Maximum history size
    capacity: usize,
}

impl History {
    /// Create new history with specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            songs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a played song
    ///
    /// If history is full, the oldest song is discarded
    pub fn push(&mut self, song: Song) {
        if self.capacity == 0 {
            return;
        }
        if self.songs.len() >= self.capacity {
            self.songs.pop_front(); // Remove oldest
        }
        self.songs.push_back(song);
    }

    /// Most recently played song
    pub fn peek(&self) -> Option<&Song> {
        self.songs.back()
    }

    /// All entries, oldest first
    pub fn get_all(&self) -> Vec<&Song> {
        self.songs.iter().collect()
    }

    /// All entries, most recent first (the order the history screen shows)
    pub fn recent_first(&self) -> Vec<&Song> {
        self.songs.iter().rev().collect()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groovy_core::SongId;
    use proptest::prelude::*;

    fn create_test_song(id: u64) -> Song {
        Song::new(
            SongId::new(id),
            format!("Song {}", id),
            "Test Artist",
            "Test Genre",
            "Test Album",
        )
    }

    fn ids(songs: &[&Song]) -> Vec<u64> {
        songs.iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn default_capacity_is_twenty() {
        let history = History::default();
        assert_eq!(history.capacity(), 20);
        assert!(history.is_empty());
    }

    #[test]
    fn push_keeps_order() {
        let mut history = History::new(10);
        history.push(create_test_song(1));
        history.push(create_test_song(2));
        history.push(create_test_song(3));

        assert_eq!(ids(&history.get_all()), vec![1, 2, 3]);
        assert_eq!(ids(&history.recent_first()), vec![3, 2, 1]);
        assert_eq!(history.peek().unwrap().id.get(), 3);
    }

    #[test]
    fn twenty_five_pushes_keep_last_twenty() {
        let mut history = History::default();
        for id in 1..=25 {
            history.push(create_test_song(id));
        }

        assert_eq!(history.len(), 20);
        assert_eq!(ids(&history.get_all()), (6..=25).collect::<Vec<_>>());
    }

    #[test]
    fn repeated_plays_are_separate_entries() {
        let mut history = History::new(5);
        history.push(create_test_song(7));
        history.push(create_test_song(7));

        assert_eq!(ids(&history.get_all()), vec![7, 7]);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut history = History::new(0);
        history.push(create_test_song(1));
        assert!(history.is_empty());
    }

    proptest! {
        /// Property: history never exceeds capacity and always holds the
        /// most recent pushes, oldest first
        #[test]
        fn bounded_and_holds_latest(capacity in 1usize..30, pushes in 0u64..80) {
            let mut history = History::new(capacity);
            for id in 0..pushes {
                history.push(create_test_song(id));
            }

            let expected_len = (pushes as usize).min(capacity);
            prop_assert_eq!(history.len(), expected_len);

            let first = pushes - expected_len as u64;
            prop_assert_eq!(ids(&history.get_all()), (first..pushes).collect::<Vec<_>>());
        }
    }
}
