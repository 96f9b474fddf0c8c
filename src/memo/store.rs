// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Suffix stores.
//!
//! A store maps a value `v` to its full remaining trajectory `v, ..., 1`.
//! [`UnboundedStore`] never forgets anything. [`BoundedStore`] holds at most
//! `capacity` suffixes and drops the oldest insertion first.

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;

/// Storage policy for cached suffixes.
pub trait SuffixStore: Debug {
    /// The suffix starting at `value`, if cached.
    fn get(&self, value: u64) -> Option<&[u64]>;

    /// Record the suffix starting at `value`.
    ///
    /// `suffix[0]` must be `value`. Writing a key twice is harmless since both
    /// writes carry the same trajectory.
    fn insert(&mut self, value: u64, suffix: Vec<u64>);

    /// Number of cached suffixes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, value: u64) -> bool {
        self.get(value).is_some()
    }
}

/// Grows monotonically; a key once written is never removed.
#[derive(Debug, Default, Clone)]
pub struct UnboundedStore {
    suffixes: HashMap<u64, Vec<u64>>,
}

impl UnboundedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SuffixStore for UnboundedStore {
    fn get(&self, value: u64) -> Option<&[u64]> {
        self.suffixes.get(&value).map(Vec::as_slice)
    }

    fn insert(&mut self, value: u64, suffix: Vec<u64>) {
        debug_assert_eq!(suffix.first(), Some(&value));
        self.suffixes.insert(value, suffix);
    }

    fn len(&self) -> usize {
        self.suffixes.len()
    }
}

/// Holds at most `capacity` suffixes, evicting in insertion order.
#[derive(Debug, Clone)]
pub struct BoundedStore {
    capacity: usize,
    suffixes: HashMap<u64, Vec<u64>>,
    order: VecDeque<u64>,
}

impl BoundedStore {
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "BoundedStore capacity must be positive");
        Self {
            capacity,
            suffixes: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl SuffixStore for BoundedStore {
    fn get(&self, value: u64) -> Option<&[u64]> {
        self.suffixes.get(&value).map(Vec::as_slice)
    }

    fn insert(&mut self, value: u64, suffix: Vec<u64>) {
        debug_assert_eq!(suffix.first(), Some(&value));
        if self.suffixes.insert(value, suffix).is_some() {
            return;
        }
        self.order.push_back(value);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.suffixes.remove(&oldest);
            }
        }
    }

    fn len(&self) -> usize {
        self.suffixes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_insert_get() {
        let mut store = UnboundedStore::new();
        assert!(store.is_empty());
        store.insert(2, vec![2, 1]);
        store.insert(1, vec![1]);
        assert_eq!(store.get(2), Some(&[2u64, 1][..]));
        assert!(store.contains(1));
        assert!(!store.contains(3));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_bounded_evicts_oldest() {
        let mut store = BoundedStore::new(2);
        store.insert(1, vec![1]);
        store.insert(2, vec![2, 1]);
        store.insert(4, vec![4, 2, 1]);
        assert_eq!(store.len(), 2);
        assert!(!store.contains(1));
        assert!(store.contains(2));
        assert!(store.contains(4));
    }

    #[test]
    fn test_bounded_rewrite_keeps_order() {
        let mut store = BoundedStore::new(2);
        store.insert(1, vec![1]);
        store.insert(2, vec![2, 1]);
        store.insert(1, vec![1]);
        store.insert(4, vec![4, 2, 1]);
        // 1 was inserted first; the rewrite does not refresh it
        assert!(!store.contains(1));
        assert!(store.contains(2));
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_bounded_zero_capacity() {
        BoundedStore::new(0);
    }
}
