// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Batch configuration.

use thiserror::Error;

use crate::solver::DEFAULT_SAMPLE_COUNT;

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("starting integers must be positive")]
    ZeroStart,
    #[error("empty range {start}..={end}")]
    EmptyRange { start: u64, end: u64 },
    #[error("sample count must be positive")]
    ZeroSamples,
    #[error("cache capacity must be positive")]
    ZeroCapacity,
}

/// Which starting integers to explore, and how to present them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// First starting integer (inclusive).
    pub start: u64,
    /// Last starting integer (inclusive).
    pub end: u64,
    /// Lattice points shown per row.
    pub sample_count: usize,
    /// Only show lattice points with `x > 0` and `y > 0`.
    pub positive_only: bool,
    /// Bound on cached suffixes; `None` keeps everything.
    pub cache_capacity: Option<usize>,
}

impl ExplorerConfig {
    /// Explore `start..=end` with the default presentation.
    pub fn range(start: u64, end: u64) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start == 0 {
            return Err(ConfigError::ZeroStart);
        }
        if self.end < self.start {
            return Err(ConfigError::EmptyRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.cache_capacity == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// Number of starting integers in the range.
    ///
    /// `None` when the range does not fit in a `usize`; an empty range counts 0.
    pub fn count(&self) -> Option<usize> {
        range_count(self.start, self.end)
    }
}

/// Size of `start..=end`, if it fits in a `usize`.
pub(crate) fn range_count(start: u64, end: u64) -> Option<usize> {
    if end < start {
        return Some(0);
    }
    (end - start)
        .checked_add(1)
        .and_then(|n| usize::try_from(n).ok())
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            start: 1,
            end: 19,
            sample_count: DEFAULT_SAMPLE_COUNT,
            positive_only: false,
            cache_capacity: None,
        }
    }
}
