//! LRU Map Module
//!
//! Bounded key/value map with Least Recently Used ordering.

use std::collections::HashMap;
use std::hash::Hash;

/// Null link in the access-order list.
const NIL: usize = usize::MAX;

// == Node ==
/// A slot in the arena-backed doubly-linked list.
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

// == LRU Map ==
/// Bounded map that tracks access order for LRU eviction.
///
/// Keys index into an arena of nodes linked in access order:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Lookups, inserts and evictions are O(1). Freed slots are recycled
/// so the arena never grows past `capacity`.
#[derive(Debug)]
pub struct LruMap<K, V> {
    /// Key -> arena slot
    index: HashMap<K, usize>,
    /// Node arena, `None` for free slots
    slots: Vec<Option<Node<K, V>>>,
    /// Free slot indices
    free: Vec<usize>,
    /// Most recently used slot
    head: usize,
    /// Least recently used slot
    tail: usize,
    /// Maximum number of entries
    capacity: usize,
}

impl<K: Hash + Eq + Clone, V> LruMap<K, V> {
    // == Constructor ==
    /// Creates an empty map holding at most `capacity` entries.
    ///
    /// `capacity` is clamped to a minimum of 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            index: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            capacity,
        }
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.move_to_front(idx);
        self.slots[idx].as_ref().map(|node| &node.value)
    }

    // == Peek ==
    /// Returns the value for `key` without changing its recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.slots[idx].as_ref().map(|node| &node.value)
    }

    // == Insert ==
    /// Inserts or overwrites `key` and marks it most recently used.
    ///
    /// When a new key arrives at capacity, the least recently used entry is
    /// evicted first and returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(node) = self.slots[idx].as_mut() {
                node.value = value;
            }
            self.move_to_front(idx);
            return None;
        }

        let evicted = if self.index.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let idx = self.alloc(Node {
            key: key.clone(),
            value,
            prev: NIL,
            next: NIL,
        });
        self.index.insert(key, idx);
        self.push_front(idx);

        evicted
    }

    // == Remove ==
    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index.remove(key)?;
        self.take(idx).map(|node| node.value)
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the map is empty.
    pub fn evict_oldest(&mut self) -> Option<(K, V)> {
        if self.tail == NIL {
            return None;
        }
        let node = self.take(self.tail)?;
        self.index.remove(&node.key);
        Some((node.key, node.value))
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.slots
            .get(self.tail)
            .and_then(Option::as_ref)
            .map(|node| &node.key)
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    // == Length ==
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Contains ==
    /// Checks if a key is present, without touching it.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            map: self,
            cursor: self.head,
        }
    }

    // == List Plumbing ==
    fn alloc(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn take(&mut self, idx: usize) -> Option<Node<K, V>> {
        self.unlink(idx);
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.push_front(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.slots.get(idx).and_then(Option::as_ref) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        if prev == NIL {
            self.head = next;
        } else if let Some(node) = self.slots[prev].as_mut() {
            node.next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else if let Some(node) = self.slots[next].as_mut() {
            node.prev = prev;
        }
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.slots[idx].as_mut() {
            node.prev = NIL;
            node.next = old_head;
        }

        if old_head == NIL {
            self.tail = idx;
        } else if let Some(node) = self.slots[old_head].as_mut() {
            node.prev = idx;
        }
        self.head = idx;
    }
}

// == Iterator ==
/// Borrowing iterator over an [`LruMap`], most recent first.
pub struct Iter<'a, K, V> {
    map: &'a LruMap<K, V>,
    cursor: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.map.slots.get(self.cursor)?.as_ref()?;
        self.cursor = node.next;
        Some((&node.key, &node.value))
    }
}
