// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! StartRangePredicate - chooses the starting integer.

use tracing::{debug, warn};

use crate::config::range_count;
use crate::context::ExplorerContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// Choice point over the starting integers `start..=end`.
///
/// Choice `i` selects `start + i` and resets the per-start state. Every start
/// is tried in increasing order, which is what makes the restricted compaction
/// of each start depend only on the starts below it.
#[derive(Debug)]
pub struct StartRangePredicate {
    start: u64,
    end: u64,
}

impl StartRangePredicate {
    /// Choose each integer in `[start, end]`.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of starts, or `None` if there are more than the engine can index.
    pub fn count(&self) -> Option<usize> {
        range_count(self.start, self.end)
    }
}

impl Predicate for StartRangePredicate {
    fn try_pred(&mut self, _ctx: &mut ExplorerContext) -> PredicateResult {
        match self.count() {
            None => {
                warn!(start = self.start, end = self.end, "start range too large to enumerate");
                PredicateResult::Failure
            }
            Some(0) => PredicateResult::Failure,
            Some(n) => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(&mut self, ctx: &mut ExplorerContext, choice: usize) -> PredicateResult {
        if self.count().map_or(true, |n| choice >= n) {
            return PredicateResult::Failure;
        }
        let value = self.start + choice as u64;
        debug!(start = value, "choosing start");
        ctx.state.begin(value);
        ctx.statistics.increment_counter(Counters::Starts);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "StartRange"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_range_choices() {
        let mut ctx = ExplorerContext::default();
        let mut pred = StartRangePredicate::new(3, 5);

        assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Choices(3));
        assert_eq!(pred.retry_pred(&mut ctx, 2), PredicateResult::Success);
        assert_eq!(ctx.state.start, Some(5));
        assert_eq!(pred.retry_pred(&mut ctx, 3), PredicateResult::Failure);
        assert_eq!(ctx.statistics.get(Counters::Starts), 1);
    }

    #[test]
    fn test_empty_start_range() {
        let mut ctx = ExplorerContext::default();
        let mut pred = StartRangePredicate::new(5, 4);
        assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Failure);
    }

    #[test]
    fn test_unenumerable_range_fails() {
        let mut ctx = ExplorerContext::default();
        let mut pred = StartRangePredicate::new(0, u64::MAX);
        assert_eq!(pred.count(), None);
        assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Failure);
        assert_eq!(pred.retry_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(ctx.state.start, None);
    }

    #[test]
    fn test_last_start_of_widest_range() {
        let mut ctx = ExplorerContext::default();
        let mut pred = StartRangePredicate::new(1, u64::MAX);
        let Some(n) = pred.count() else {
            return; // narrower usize targets cannot index this range
        };
        assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Choices(n));
        assert_eq!(pred.retry_pred(&mut ctx, n - 1), PredicateResult::Success);
        assert_eq!(ctx.state.start, Some(u64::MAX));
    }
}
