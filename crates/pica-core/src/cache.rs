//! Bounded FIFO cache
//!
//! Both memoization layers (per-font laid-out strings, per-text
//! transformed positions) share this one structure: a map with a
//! maximum entry count and strict insertion-order eviction. It is
//! deliberately not an LRU: lookups never refresh an entry's
//! position, so eviction order is fully determined by insertion order
//! and stays predictable for callers.
//!
//! A capacity of 0 disables caching entirely: inserts become no-ops
//! and lookups always miss.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// A map bounded to `capacity` entries with FIFO eviction.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V> BoundedCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry. Never changes eviction order.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, evicting the single oldest one if the cache is
    /// over capacity afterwards.
    ///
    /// Re-inserting an existing key replaces the value in place and
    /// keeps the key's original age. With capacity 0 this is a no-op.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push_back(key);
            if self.order.len() > self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    log::trace!("cache full, evicting oldest entry");
                    self.entries.remove(&oldest);
                }
            }
        }
    }

    /// Change the capacity, evicting oldest entries if shrinking below
    /// the current length.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.order.len() > capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        if capacity == 0 {
            self.entries.clear();
            self.order.clear();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
