//! Bounded memoization for parse results
//!
//! Parse inputs repeat heavily in practice (the same expression string
//! arrives on every request), so successful results are kept in a small
//! LRU map. The cache is advisory: lookups that would contend on the
//! lock simply fall through to a fresh parse.

use std::hash::Hash;
use std::sync::Mutex;

use indexmap::IndexMap;

/// Default number of entries retained per cache
pub const DEFAULT_CAPACITY: usize = 128;

/// A least-recently-used map with a fixed capacity.
///
/// Backed by an [`IndexMap`] kept in recency order: the entry at index 0
/// is the coldest and the last entry is the hottest. Lookups promote,
/// inserts evict from the front when full.
#[derive(Debug)]
pub struct LruCache<K, V> {
    entries: IndexMap<K, V>,
    capacity: usize,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        LruCache {
            entries: IndexMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key, marking it most recently used on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let index = self.entries.get_index_of(key)?;
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        self.entries.get_index(last).map(|(_, value)| value)
    }

    /// Insert a key, evicting the least recently used entry when full.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(index) = self.entries.get_index_of(&key) {
            let last = self.entries.len() - 1;
            self.entries.move_index(index, last);
            if let Some((_, slot)) = self.entries.get_index_mut(last) {
                *slot = value;
            }
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, value);
    }
}

/// A shared, non-blocking memo table.
///
/// Wraps an [`LruCache`] in a mutex with `try_lock` access only. A miss
/// under contention is indistinguishable from a cache miss, which is
/// always safe because callers recompute on `None`.
#[derive(Debug)]
pub struct Memo<K, V> {
    inner: Mutex<LruCache<K, V>>,
}

impl<K: Hash + Eq, V: Clone> Memo<K, V> {
    pub fn new(capacity: usize) -> Self {
        Memo {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.try_lock().ok()?;
        cache.get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        if let Ok(mut cache) = self.inner.try_lock() {
            cache.insert(key, value);
        }
    }
}
