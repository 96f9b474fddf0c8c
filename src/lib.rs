// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compact Collatz trajectories, their affine transforms, and the integer
//! lattice points on those transforms.
//!
//! For each starting integer `x0` the crate produces:
//! - the trajectory `x0, ..., 1`, compacted against a cache of suffixes already seen
//! - the parity of every step as a binary string
//! - the affine map `value -> a*value + b` that the whole trajectory applies to `x0`
//! - the integer points `(x, y)` with `y = a*x + b`, as samples and as a general solution
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data
//!
//! The suffix cache ([`memo::SequenceCache`]). It maps each value seen to its
//! full remaining trajectory and only ever grows (unless a bounded store is
//! chosen). It is owned by an [`ExplorerContext`], never global.
//!
//! ## Tier 2: DYNAMIC Data
//!
//! The state of the starting integer currently being explored
//! ([`context::DynamicState`]), reset whenever a new start is chosen.
//!
//! # Batch Algorithm
//!
//! A batch is a predicate program run by the backtracking [`SearchEngine`]:
//!
//! 1. **StartRangePredicate**: choose the next starting integer
//! 2. **CompactPredicate**: unrestricted and restricted compaction, parity digits
//! 3. **TransformPredicate**: accumulate the affine map
//! 4. **SolvePredicate**: lattice points on the map's line, counted when found
//! 5. **RowPredicate**: assemble the display row, counted
//! 6. **FailPredicate**: backtrack to step 1
//!
//! All rational arithmetic is exact (`num-rational`); trajectory values are
//! `u64` and overflow is reported rather than wrapped.

pub mod collatz;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod explorer;
pub mod memo;
pub mod predicates;
pub mod report;
pub mod solver;
pub mod state;

// Re-export commonly used types
pub use collatz::AffineTransform;
pub use config::ExplorerConfig;
pub use context::ExplorerContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{CollatzError, ErrorKind};
pub use explorer::explore;
pub use memo::{CompactSequence, Element, SequenceCache};
pub use solver::{solve, LatticeSolution};
