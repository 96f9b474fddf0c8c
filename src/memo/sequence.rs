// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compacted sequences and the generator that produces them.

use std::fmt;

use tracing::debug;

use super::store::{BoundedStore, SuffixStore, UnboundedStore};
use crate::collatz::step;
use crate::error::{CollatzError, Result};

/// One element of a compacted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// A value actually visited.
    Value(u64),
    /// The rest of the sequence is the cached suffix starting at this value.
    BackRef(u64),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Value(v) => write!(f, "{}", v),
            Element::BackRef(v) => write!(f, "@{}", v),
        }
    }
}

/// A trajectory, possibly cut short by a backreference.
///
/// Ends with `Value(1)` unless the last element is a `BackRef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactSequence {
    elements: Vec<Element>,
}

impl CompactSequence {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The value referenced by the final backreference, if there is one.
    pub fn back_reference(&self) -> Option<u64> {
        match self.elements.last() {
            Some(Element::BackRef(v)) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for CompactSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}

/// Suffix cache plus the compacting generator.
///
/// Owned by whoever explores a batch of starting integers; two caches never
/// share state.
#[derive(Debug)]
pub struct SequenceCache {
    store: Box<dyn SuffixStore>,
}

impl SequenceCache {
    /// A cache that never evicts.
    pub fn new() -> Self {
        Self::with_store(Box::new(UnboundedStore::new()))
    }

    /// A cache holding at most `capacity` suffixes.
    pub fn bounded(capacity: usize) -> Self {
        Self::with_store(Box::new(BoundedStore::new(capacity)))
    }

    pub fn with_store(store: Box<dyn SuffixStore>) -> Self {
        Self { store }
    }

    pub fn get(&self, value: u64) -> Option<&[u64]> {
        self.store.get(value)
    }

    pub fn contains(&self, value: u64) -> bool {
        self.store.contains(value)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Generate the compacted sequence for `x0`.
    ///
    /// Walks the trajectory until it reaches 1 or a cached value. With
    /// `restrict_cache` only cached values below `x0` count, and nothing is
    /// written back; this gives the same answer whatever larger starts were
    /// explored earlier. Without it every suffix of the newly walked prefix is
    /// cached.
    ///
    /// # Errors
    ///
    /// - [`CollatzError::InvalidInput`] if `x0 == 0`
    /// - [`CollatzError::Overflow`] if the trajectory leaves `u64`; the cache is
    ///   left untouched
    pub fn compact_sequence(&mut self, x0: u64, restrict_cache: bool) -> Result<CompactSequence> {
        if x0 == 0 {
            return Err(CollatzError::InvalidInput { value: x0 });
        }

        let mut elements = Vec::new();
        let mut walked = Vec::new();
        let mut tail: Option<Vec<u64>> = None;
        let mut x = x0;

        while x != 1 {
            let usable = !restrict_cache || x < x0;
            if let Some(suffix) = self.store.get(x).filter(|_| usable) {
                elements.push(Element::BackRef(x));
                if !restrict_cache {
                    tail = Some(suffix.to_vec());
                }
                break;
            }
            elements.push(Element::Value(x));
            walked.push(x);
            x = step(x)?.0;
        }

        let backref = matches!(elements.last(), Some(Element::BackRef(_)));
        if !backref {
            elements.push(Element::Value(1));
            walked.push(1);
        }

        if !restrict_cache {
            self.record(walked, tail.unwrap_or_default());
        }

        let sequence = CompactSequence { elements };
        debug!(x0, restrict_cache, %sequence, "compacted sequence");
        Ok(sequence)
    }

    /// Cache every suffix of `walked ++ tail`, one per walked value.
    fn record(&mut self, walked: Vec<u64>, tail: Vec<u64>) {
        let count = walked.len();
        let mut full = walked;
        full.extend(tail);
        for (i, &value) in full.iter().take(count).enumerate() {
            self.store.insert(value, full[i..].to_vec());
        }
    }

    /// Follow the backreference (if any) back to the full trajectory.
    ///
    /// Returns `None` if the referenced suffix is no longer cached.
    pub fn expand(&self, sequence: &CompactSequence) -> Option<Vec<u64>> {
        let mut values = Vec::with_capacity(sequence.len());
        for element in sequence.elements() {
            match *element {
                Element::Value(v) => values.push(v),
                Element::BackRef(v) => values.extend_from_slice(self.store.get(v)?),
            }
        }
        Some(values)
    }
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collatz::trajectory;

    fn values(seq: &CompactSequence) -> Vec<Element> {
        seq.elements().to_vec()
    }

    #[test]
    fn test_one() {
        let mut cache = SequenceCache::new();
        let seq = cache.compact_sequence(1, false).unwrap();
        assert_eq!(values(&seq), vec![Element::Value(1)]);
        assert_eq!(cache.get(1), Some(&[1u64][..]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero() {
        let mut cache = SequenceCache::new();
        assert_eq!(
            cache.compact_sequence(0, false),
            Err(CollatzError::InvalidInput { value: 0 })
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn test_empty_cache_gives_full_trajectory() {
        let mut cache = SequenceCache::new();
        let seq = cache.compact_sequence(6, false).unwrap();
        assert_eq!(seq.to_string(), "[6, 3, 10, 5, 16, 8, 4, 2, 1]");
        assert_eq!(seq.back_reference(), None);
        for v in [6u64, 3, 10, 5, 16, 8, 4, 2, 1] {
            assert_eq!(cache.get(v).unwrap()[0], v);
        }
        assert_eq!(cache.get(10), Some(&[10u64, 5, 16, 8, 4, 2, 1][..]));
    }

    #[test]
    fn test_backreference() {
        let mut cache = SequenceCache::new();
        cache.compact_sequence(2, false).unwrap();
        let seq = cache.compact_sequence(3, false).unwrap();
        assert_eq!(seq.to_string(), "[3, 10, 5, 16, 8, 4, @2]");
        assert_eq!(seq.back_reference(), Some(2));
        // the suffix written for 3 is expanded through the cached 2
        assert_eq!(cache.get(3), Some(&[3u64, 10, 5, 16, 8, 4, 2, 1][..]));
        assert_eq!(cache.expand(&seq).unwrap(), trajectory(3).unwrap());
    }

    #[test]
    fn test_one_never_backreferenced() {
        let mut cache = SequenceCache::new();
        cache.compact_sequence(1, false).unwrap();
        let seq = cache.compact_sequence(2, false).unwrap();
        assert_eq!(seq.to_string(), "[2, 1]");
    }

    #[test]
    fn test_restricted_ignores_larger() {
        let mut cache = SequenceCache::new();
        cache.compact_sequence(10, false).unwrap();
        cache.compact_sequence(2, false).unwrap();
        // 10 is cached but larger than 3; 2 is cached and smaller
        let restricted = cache.compact_sequence(3, true).unwrap();
        assert_eq!(restricted.to_string(), "[3, 10, 5, 16, 8, 4, @2]");
        let unrestricted = cache.compact_sequence(3, false).unwrap();
        assert_eq!(unrestricted.to_string(), "[3, @10]");
    }

    #[test]
    fn test_restricted_does_not_write() {
        let mut cache = SequenceCache::new();
        let seq = cache.compact_sequence(6, true).unwrap();
        assert_eq!(seq.to_string(), "[6, 3, 10, 5, 16, 8, 4, 2, 1]");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_restricted_ignores_self() {
        let mut cache = SequenceCache::new();
        cache.compact_sequence(4, false).unwrap();
        let seq = cache.compact_sequence(4, true).unwrap();
        assert_eq!(seq.to_string(), "[4, @2]");
        let seq = cache.compact_sequence(4, false).unwrap();
        assert_eq!(seq.to_string(), "[@4]");
    }

    #[test]
    fn test_overflow_leaves_cache_untouched() {
        let mut cache = SequenceCache::new();
        let result = cache.compact_sequence(u64::MAX, false);
        assert!(matches!(result, Err(CollatzError::Overflow { .. })));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expand_after_eviction() {
        let mut cache = SequenceCache::bounded(2);
        cache.compact_sequence(2, false).unwrap(); // caches 2, 1
        let seq = cache.compact_sequence(8, false).unwrap(); // [8, 4, @2], caches 8, 4
        assert_eq!(seq.to_string(), "[8, 4, @2]");
        assert!(!cache.contains(2));
        assert_eq!(cache.expand(&seq), None);
    }
}
