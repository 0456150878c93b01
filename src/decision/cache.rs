//! Bounded memoization for decision lookahead

use std::hash::Hash;

use ahash::AHashMap;

/// Map that flushes itself once it grows past `capacity`
///
/// Entries are only valid for the snapshot they were computed on; owners
/// call `clear` whenever the board changes.
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    capacity: usize,
    entries: AHashMap<K, V>,
}

impl<K: Eq + Hash, V: Copy> BoundedCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: AHashMap::new(),
        }
    }

    /// Cached value for `key`, computing and storing it on a miss
    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.entries.get(&key) {
            return *value;
        }

        let value = compute();
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.insert(key, value);
        value
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
