// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking pipeline engine.
//!
//! This module implements a backtracking engine that runs predicates in
//! sequence. A batch over many starting integers is a WAM-like program: a
//! choice point picks the start, deterministic predicates compute its row, and
//! a terminal FAIL sends control back to the choice point for the next start.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred on each predicate
//! 2. If Success: advance to next predicate
//! 3. If Choices(n): enter choice mode, call retry_pred(0..n-1)
//! 4. If Failure: backtrack to previous stack entry
//! 5. If Suspend: pause and return control to caller
//!
//! A deterministic predicate that is backtracked into fails straight away
//! rather than running again.
//!
//! # Example
//!
//! ```
//! use collatz_lattice::config::ExplorerConfig;
//! use collatz_lattice::context::ExplorerContext;
//! use collatz_lattice::engine::EngineBuilder;
//! use collatz_lattice::predicates::{
//!     CompactPredicate, FailPredicate, RowPredicate, SolvePredicate, StartRangePredicate,
//!     TransformPredicate,
//! };
//!
//! let mut ctx = ExplorerContext::new(ExplorerConfig::range(1, 5));
//! let engine = EngineBuilder::new()
//!     .add(Box::new(StartRangePredicate::new(1, 5)))
//!     .add(Box::new(CompactPredicate))
//!     .add(Box::new(TransformPredicate))
//!     .add(Box::new(SolvePredicate))
//!     .add(Box::new(RowPredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // Exhausts every start, then fails
//! assert!(engine.search(&mut ctx).is_none());
//! assert_eq!(ctx.rows.len(), 5);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::ExplorerContext;

/// Maximum depth of the predicate stack.
const MAX_STACK_SIZE: usize = 1000;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// A deterministic predicate already succeeded here; backtracking into it fails.
    exhausted: bool,
}

impl StackEntry {
    fn new(predicate_index: usize) -> Self {
        Self {
            predicate_index,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            exhausted: false,
        }
    }
}

/// Engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the stack holds a suspended run to resume.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which insists on a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(MAX_STACK_SIZE),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run until the program suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - can resume by calling search() again
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Results are side effects on `ctx` (rows, statistics, cache).
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without FAIL or SUSPEND,
    /// or if the stack grows past its limit.
    pub fn search(mut self, ctx: &mut ExplorerContext) -> Option<Self> {
        if self.predicates.is_empty() {
            return None; // Empty is exhausted
        }

        if self.suspended {
            // Resume by backtracking out of the suspending predicate
            self.suspended = false;
            self.stack.pop();
        } else {
            self.stack.clear();
            self.stack.push(StackEntry::new(0));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Search exhausted (all choices failed)
            };

            if !entry.in_choice_mode {
                if entry.exhausted {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx);

                match result {
                    PredicateResult::Success => {
                        self.mark_exhausted();
                        self.push_next_predicate();
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                        }
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                // Check if we've exhausted all choices
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    fn mark_exhausted(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.exhausted = true;
        }
    }

    fn current(&self) -> &StackEntry {
        self.stack
            .last()
            .unwrap_or_else(|| unreachable!("push from an empty stack"))
    }

    fn push(&mut self, entry: StackEntry) {
        assert!(
            self.stack.len() < MAX_STACK_SIZE,
            "Predicate stack exceeded {} entries",
            MAX_STACK_SIZE
        );
        self.stack.push(entry);
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self) {
        let next_index = self.current().predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All WAM programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.push(StackEntry::new(next_index));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a [`SearchEngine`] whose program ends in a terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

/// An [`EngineBuilder`] that has been given its terminal predicate.
#[derive(Debug)]
pub struct TerminatedEngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate. Nothing can follow it.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedEngineBuilder {
        self.predicates.push(predicate);
        TerminatedEngineBuilder {
            predicates: self.predicates,
        }
    }
}

impl TerminatedEngineBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
