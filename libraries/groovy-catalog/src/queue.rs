//! Play queue
//!
//! Plain FIFO of songs queued for playback. Navigation does not consult it;
//! it is kept for "play next" style features on top of the catalog.

use groovy_core::Song;
use std::collections::VecDeque;

/// FIFO queue of songs
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    songs: VecDeque<Song>,
}

impl PlayQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add song to the back of the queue
    pub fn enqueue(&mut self, song: Song) {
        self.songs.push_back(song);
    }

    /// Remove and return the front song
    pub fn dequeue(&mut self) -> Option<Song> {
        self.songs.pop_front()
    }

    /// Peek at the front song without removing it
    pub fn peek(&self) -> Option<&Song> {
        self.songs.front()
    }

    /// All queued songs in FIFO order
    pub fn get_all(&self) -> Vec<&Song> {
        self.songs.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn clear(&mut self) {
        self.songs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groovy_core::SongId;

    fn create_test_song(id: u64) -> Song {
        Song::new(SongId::new(id), format!("Song {}", id), "Artist", "Genre", "Album")
    }

    #[test]
    fn fifo_order() {
        let mut queue = PlayQueue::new();
        queue.enqueue(create_test_song(1));
        queue.enqueue(create_test_song(2));
        queue.enqueue(create_test_song(3));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek().unwrap().id, SongId::new(1));
        assert_eq!(queue.dequeue().unwrap().id, SongId::new(1));
        assert_eq!(queue.dequeue().unwrap().id, SongId::new(2));

        let rest: Vec<_> = queue.get_all().iter().map(|s| s.id.get()).collect();
        assert_eq!(rest, vec![3]);
    }

    #[test]
    fn dequeue_empty_returns_none() {
        let mut queue = PlayQueue::new();
        assert!(queue.dequeue().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_queue() {
        let mut queue = PlayQueue::new();
        queue.enqueue(create_test_song(1));
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.get_all().is_empty());
    }
}
