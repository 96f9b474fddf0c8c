// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the backtracking pipeline.
//!
//! The engine works by trying predicates in sequence. Each predicate is one
//! stage of the per-start pipeline, or a choice point (which start to explore
//! next). Predicates can succeed, fail, or offer choices.
//!
//! # Example
//!
//! ```
//! use collatz_lattice::engine::{Predicate, PredicateResult};
//! use collatz_lattice::context::ExplorerContext;
//!
//! #[derive(Debug)]
//! struct EvenStartsOnly;
//!
//! impl Predicate for EvenStartsOnly {
//!     fn try_pred(&mut self, ctx: &mut ExplorerContext) -> PredicateResult {
//!         match ctx.state.start {
//!             Some(start) if start % 2 == 0 => PredicateResult::Success,
//!             _ => PredicateResult::Failure,
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "EvenStartsOnly"
//!     }
//! }
//! ```

use crate::context::ExplorerContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution for testing/inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A terminal predicate that ends a WAM program.
///
/// Terminal predicates are FAIL or SUSPEND - they never return Success.
/// [`crate::engine::EngineBuilder::terminal`] only accepts these, so every
/// built program ends properly.
pub trait TerminalPredicate: Predicate {}

/// Trait for predicates in the backtracking engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. On backtrack into a choice point: engine calls `retry_pred` with the next choice
/// 5. On backtrack into a deterministic predicate: it fails too
///
/// There is no trail. Predicates that write per-start state overwrite it on
/// the next choice; the suffix cache is never rolled back.
pub trait Predicate: Debug {
    /// Try this predicate.
    fn try_pred(&mut self, ctx: &mut ExplorerContext) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    ///
    /// Can return:
    /// - `Success`: This choice succeeded, move to next predicate
    /// - `Failure`: This choice failed, try next choice (or backtrack if no more)
    ///
    /// retry_pred cannot return Choices or Suspend.
    #[allow(unused)]
    fn retry_pred(&mut self, ctx: &mut ExplorerContext, choice: usize) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Optional: Get a name for this predicate (for debugging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
