//! Doubly linked catalog
//!
//! Ordered, mutable sequence of catalog entries backed by an arena of
//! nodes. Links are slot handles into the same arena rather than owning
//! pointers, so unlinking a node never moves its neighbours. Freed slots
//! are recycled by later insertions.

use groovy_core::{Song, SongId};

/// Anything that can sit in a catalog list and be looked up by song id
pub trait CatalogEntry {
    fn song_id(&self) -> SongId;
}

impl CatalogEntry for Song {
    fn song_id(&self) -> SongId {
        self.id
    }
}

impl CatalogEntry for SongId {
    fn song_id(&self) -> SongId {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeHandle(usize);

#[derive(Debug, Clone)]
struct Node<E> {
    entry: E,
    prev: Option<NodeHandle>,
    next: Option<NodeHandle>,
}

/// Doubly linked list of catalog entries
///
/// The library holds `SongList<Song>` (it owns the songs); playlists hold
/// `SongList<SongId>` and resolve against the library on read.
///
/// Invariants:
/// - `head.prev` and `tail.next` are always `None`
/// - `len()` equals the number of nodes reachable from either end
/// - an empty list has neither head nor tail
#[derive(Debug, Clone)]
pub struct SongList<E> {
    slots: Vec<Option<Node<E>>>,
    free: Vec<usize>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    size: usize,
}

impl<E> Default for SongList<E> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }
}

impl<E> SongList<E> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of linked entries
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterate head to tail
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            list: self,
            cursor: self.head,
            forward: true,
        }
    }

    /// Iterate tail to head
    pub fn iter_rev(&self) -> Iter<'_, E> {
        Iter {
            list: self,
            cursor: self.tail,
            forward: false,
        }
    }

    /// Snapshot of all entries, head to tail
    pub fn get_all(&self) -> Vec<&E> {
        self.iter().collect()
    }

    fn node(&self, handle: NodeHandle) -> Option<&Node<E>> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node<E>> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: Node<E>) -> NodeHandle {
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(node);
            NodeHandle(index)
        } else {
            self.slots.push(Some(node));
            NodeHandle(self.slots.len() - 1)
        }
    }
}

impl<E: CatalogEntry> SongList<E> {
    /// Append an entry at the tail
    ///
    /// Always succeeds. Insertion order is the list's ascending order.
    pub fn add(&mut self, entry: E) -> bool {
        let handle = self.alloc(Node {
            entry,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(handle);
                }
            }
            None => self.head = Some(handle),
        }

        self.tail = Some(handle);
        self.size += 1;
        true
    }

    /// Unlink the first entry with the given id
    ///
    /// Returns `false` and leaves the list untouched when no entry matches.
    pub fn delete(&mut self, id: SongId) -> bool {
        let Some(handle) = self.position(id) else {
            return false;
        };
        let Some(node) = self.slots.get_mut(handle.0).and_then(Option::take) else {
            return false;
        };

        match node.prev {
            Some(prev) => {
                if let Some(prev_node) = self.node_mut(prev) {
                    prev_node.next = node.next;
                }
            }
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => {
                if let Some(next_node) = self.node_mut(next) {
                    next_node.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(handle.0);
        self.size -= 1;
        true
    }

    /// Linear lookup by id
    pub fn find_by_id(&self, id: SongId) -> Option<&E> {
        self.iter().find(|entry| entry.song_id() == id)
    }

    /// Check whether an entry with the id is linked
    pub fn contains(&self, id: SongId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Ids of all entries, head to tail
    pub fn ids(&self) -> Vec<SongId> {
        self.iter().map(CatalogEntry::song_id).collect()
    }

    fn position(&self, id: SongId) -> Option<NodeHandle> {
        let mut cursor = self.head;
        while let Some(handle) = cursor {
            let node = self.node(handle)?;
            if node.entry.song_id() == id {
                return Some(handle);
            }
            cursor = node.next;
        }
        None
    }
}

impl SongList<Song> {
    /// Case-insensitive substring search over title, artist and genre
    ///
    /// Results keep list order. An empty keyword matches every song.
    pub fn search(&self, keyword: &str) -> Vec<&Song> {
        let keyword = keyword.to_lowercase();
        self.iter()
            .filter(|song| song.matches_keyword(&keyword))
            .collect()
    }
}

/// Traversal over a [`SongList`] in either direction
pub struct Iter<'a, E> {
    list: &'a SongList<E>,
    cursor: Option<NodeHandle>,
    forward: bool,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = if self.forward { node.next } else { node.prev };
        Some(&node.entry)
    }
}

impl<'a, E> IntoIterator for &'a SongList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
