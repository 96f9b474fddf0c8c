// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-start state (Tier 2: DYNAMIC).

use num_bigint::BigInt;

use crate::collatz::AffineTransform;
use crate::error::Result;
use crate::memo::CompactSequence;
use crate::solver::LatticeSolution;

/// What the pipeline has worked out so far for the current starting integer.
///
/// Each predicate fills in one part. Choosing a new start clears everything,
/// so nothing leaks from one start into the next.
#[derive(Debug, Default)]
pub struct DynamicState {
    /// The starting integer being explored.
    pub start: Option<u64>,

    /// Parity digits of the trajectory.
    pub binary: String,

    /// Compacted against every cached suffix.
    pub compact: Option<CompactSequence>,

    /// Compacted against cached values below `start` only.
    pub restricted: Option<CompactSequence>,

    /// Affine map of the whole trajectory.
    pub transform: Option<AffineTransform>,

    /// Lattice on the transform's line, or why there is none.
    pub solution: Option<Result<LatticeSolution>>,

    /// Sample lattice points chosen for display.
    pub samples: Vec<(BigInt, BigInt)>,
}

impl DynamicState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous start and begin on `start`.
    pub fn begin(&mut self, start: u64) {
        *self = Self {
            start: Some(start),
            ..Self::default()
        };
    }
}
