// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Explorer context combining MEMO and DYNAMIC state.
//!
//! The ExplorerContext is the core data structure that combines:
//! - Tier 1 (MEMO): the suffix cache, which only ever learns more
//! - Tier 2 (DYNAMIC): the state of the current starting integer
//!
//! The cache is owned here and handed to every predicate through the context,
//! so two contexts never see each other's suffixes.

pub mod dynamic;

pub use dynamic::DynamicState;

use tracing::debug;

use crate::config::ExplorerConfig;
use crate::memo::SequenceCache;
use crate::report::TableRow;
use crate::state::Statistics;

/// Explorer context passed through the predicate pipeline.
///
/// # Memory Model
///
/// ```text
/// ExplorerContext {
///     cache: SequenceCache,      // Tier 1: grows across starts
///     state: DynamicState,       // Tier 2: reset per start
///     statistics: Statistics,    // counters for the whole batch
///     rows: Vec<TableRow>,       // output, one per start
/// }
/// ```
#[derive(Debug)]
pub struct ExplorerContext {
    /// Batch settings.
    pub config: ExplorerConfig,
    /// Suffix cache (Tier 1)
    pub cache: SequenceCache,
    /// Current start (Tier 2)
    pub state: DynamicState,
    pub statistics: Statistics,
    pub rows: Vec<TableRow>,
}

impl ExplorerContext {
    /// Create a context with an empty cache shaped by `config`.
    pub fn new(config: ExplorerConfig) -> Self {
        let cache = match config.cache_capacity {
            Some(capacity) => SequenceCache::bounded(capacity),
            None => SequenceCache::new(),
        };
        debug!(capacity = ?config.cache_capacity, "initialized suffix cache");
        Self::with_cache(config, cache)
    }

    /// Create a context around an existing cache.
    ///
    /// Useful to carry what one batch learned into the next.
    pub fn with_cache(config: ExplorerConfig, cache: SequenceCache) -> Self {
        Self {
            rows: Vec::new(),
            config,
            cache,
            state: DynamicState::new(),
            statistics: Statistics::new(),
        }
    }

    /// Hand back the cache, dropping everything else.
    pub fn into_cache(self) -> SequenceCache {
        self.cache
    }
}

impl Default for ExplorerContext {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}
