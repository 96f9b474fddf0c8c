// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pipeline predicates.
//!
//! # Organization
//!
//! - `range`: StartRangePredicate, the choice point over starting integers
//! - `pipeline`: the deterministic stages that build one row
//! - `test`: Simple test predicates for validating the engine
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod pipeline;
pub mod range;

pub use pipeline::{
    has_solution, CompactPredicate, RowPredicate, SolvePredicate, TransformPredicate,
};
pub use range::StartRangePredicate;

use crate::context::ExplorerContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. At the end of the batch
/// pipeline it sends control back to [`StartRangePredicate`] for the next start.
///
/// # Example
///
/// ```
/// use collatz_lattice::engine::EngineBuilder;
/// use collatz_lattice::predicates::{FailPredicate, StartRangePredicate};
/// use collatz_lattice::context::ExplorerContext;
///
/// let mut ctx = ExplorerContext::default();
/// let engine = EngineBuilder::new()
///     .add(Box::new(StartRangePredicate::new(1, 3)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all starts then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut ExplorerContext) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(&mut self, _ctx: &mut ExplorerContext, _choice: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution.
///
/// Ending the pipeline with this instead of [`FailPredicate`] hands control
/// back after every row, so a caller can step through the batch.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut ExplorerContext) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(&mut self, _ctx: &mut ExplorerContext, _choice: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
