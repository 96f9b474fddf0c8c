// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data, the suffix cache.
//!
//! Unlike the per-start state, the cache is never undone on backtracking: a
//! cached suffix is a fact about the Collatz map, not about the current start.
//!
//! - `store`: where suffixes live, and when (if ever) they are evicted
//! - `sequence`: the compacting sequence generator that reads and fills the store

pub mod sequence;
pub mod store;

pub use sequence::{CompactSequence, Element, SequenceCache};
pub use store::{BoundedStore, SuffixStore, UnboundedStore};
