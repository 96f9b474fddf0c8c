// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by the pipeline predicates as they go.

use crate::context::ExplorerContext;
use crate::engine::{Predicate, PredicateResult};
use crate::error::{CollatzError, ErrorKind};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Starting integers chosen.
    Starts,
    /// Rows produced.
    Rows,
    /// Rows with a lattice solution.
    Solved,
}

const COUNT: usize = Counters::COUNT + ErrorKind::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }
    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&ExplorerContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }
    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one failure of the error's kind.
    pub(crate) fn record_failure(&mut self, error: &CollatzError) {
        self.stats[Counters::COUNT + error.kind() as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of failures of the given kind.
    pub fn failures(&self, kind: ErrorKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    /// Number of failures of any kind.
    pub fn total_failures(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&ExplorerContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut ExplorerContext) -> PredicateResult {
        if (self.filter)(ctx) {
            let statistics = &mut ctx.statistics;
            statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }
}
