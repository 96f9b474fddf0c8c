// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The deterministic per-start stages.
//!
//! Each stage reads what the previous ones left in [`crate::context::DynamicState`]
//! and adds its own part. A stage that cannot continue with the current start
//! fails, which sends the engine back to the range predicate for the next one.

use tracing::{debug, warn};

use crate::collatz::{parity_string, AffineTransform};
use crate::context::ExplorerContext;
use crate::engine::{Predicate, PredicateResult};
use crate::error::{CollatzError, Result};
use crate::report::TableRow;
use crate::solver::LatticeSolution;

fn current_start(ctx: &ExplorerContext, stage: &str) -> u64 {
    ctx.state
        .start
        .unwrap_or_else(|| panic!("{} runs after StartRangePredicate has chosen a start", stage))
}

/// Record a failure for the current start and give up on it.
fn abandon(ctx: &mut ExplorerContext, start: u64, error: CollatzError) -> PredicateResult {
    warn!(start, %error, "skipping start");
    ctx.statistics.record_failure(&error);
    PredicateResult::Failure
}

/// Both compactions and the parity digits.
///
/// The unrestricted pass runs first and fills the cache; the restricted pass
/// only reads it. A backreference in the restricted sequence is therefore below
/// the start, but may have been cached by this same start's unrestricted pass
/// rather than by an earlier start: alone, `6` gives `[6, @3]`.
#[derive(Debug)]
pub struct CompactPredicate;

impl CompactPredicate {
    fn compact(ctx: &mut ExplorerContext, start: u64) -> Result<()> {
        let compact = ctx.cache.compact_sequence(start, false)?;
        let restricted = ctx.cache.compact_sequence(start, true)?;
        ctx.state.binary = parity_string(start)?;
        ctx.state.compact = Some(compact);
        ctx.state.restricted = Some(restricted);
        Ok(())
    }
}

impl Predicate for CompactPredicate {
    fn try_pred(&mut self, ctx: &mut ExplorerContext) -> PredicateResult {
        let start = current_start(ctx, self.name());
        match Self::compact(ctx, start) {
            Ok(()) => PredicateResult::Success,
            Err(e) => abandon(ctx, start, e),
        }
    }

    fn name(&self) -> &str {
        "Compact"
    }
}

/// The affine map of the trajectory.
#[derive(Debug)]
pub struct TransformPredicate;

impl Predicate for TransformPredicate {
    fn try_pred(&mut self, ctx: &mut ExplorerContext) -> PredicateResult {
        let start = current_start(ctx, self.name());
        match AffineTransform::accumulate(start) {
            Ok(transform) => {
                ctx.state.transform = Some(transform);
                PredicateResult::Success
            }
            Err(e) => abandon(ctx, start, e),
        }
    }

    fn name(&self) -> &str {
        "Transform"
    }
}

/// Whether the current start's line has lattice points.
///
/// Filter for a [`crate::state::Statistics::counting_predicate`] on
/// [`crate::state::Counters::Solved`].
pub fn has_solution(ctx: &ExplorerContext) -> bool {
    matches!(ctx.state.solution, Some(Ok(_)))
}

/// Lattice points on the transform's line.
///
/// A line without lattice points is still reported, so this stage never fails.
#[derive(Debug)]
pub struct SolvePredicate;

impl Predicate for SolvePredicate {
    fn try_pred(&mut self, ctx: &mut ExplorerContext) -> PredicateResult {
        let start = current_start(ctx, self.name());
        let Some(transform) = ctx.state.transform.as_ref() else {
            panic!("Solve runs after Transform");
        };

        let solution = LatticeSolution::for_transform(transform);
        match &solution {
            Ok(lattice) => {
                let count = ctx.config.sample_count;
                ctx.state.samples = if ctx.config.positive_only {
                    lattice.positive_samples(count)
                } else {
                    lattice.samples(count)
                };
            }
            Err(e) => {
                debug!(start, error = %e, "no lattice solution");
                ctx.statistics.record_failure(e);
            }
        }
        ctx.state.solution = Some(solution);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Solve"
    }
}

/// Turns the finished per-start state into a [`TableRow`].
#[derive(Debug)]
pub struct RowPredicate;

impl Predicate for RowPredicate {
    fn try_pred(&mut self, ctx: &mut ExplorerContext) -> PredicateResult {
        let start = current_start(ctx, self.name());
        let state = &ctx.state;
        let (Some(compact), Some(restricted), Some(transform), Some(solution)) = (
            state.compact.as_ref(),
            state.restricted.as_ref(),
            state.transform.as_ref(),
            state.solution.as_ref(),
        ) else {
            panic!("Row runs after Compact, Transform and Solve");
        };

        let row = TableRow::new(
            start,
            state.binary.clone(),
            compact,
            restricted,
            transform,
            solution,
            state.samples.clone(),
        );
        debug!(start, solved = row.solved, "row complete");
        ctx.rows.push(row);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Row"
    }
}
