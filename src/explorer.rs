// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Batch entry points: build the pipeline program and run it over a range.

use tracing::info;

use crate::config::{ConfigError, ExplorerConfig};
use crate::context::ExplorerContext;
use crate::engine::{EngineBuilder, SearchEngine, TerminalPredicate};
use crate::predicates::{
    has_solution, CompactPredicate, FailPredicate, RowPredicate, SolvePredicate,
    StartRangePredicate, TransformPredicate,
};
use crate::state::{Counters, Statistics};

/// The per-start pipeline over `config`'s range, ending in `terminal`.
///
/// With [`FailPredicate`] the engine runs the whole range in one call; with
/// [`crate::predicates::SuspendPredicate`] it stops after each row.
pub fn pipeline<T: TerminalPredicate + 'static>(config: &ExplorerConfig, terminal: T) -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(StartRangePredicate::new(config.start, config.end)))
        .add(Box::new(CompactPredicate))
        .add(Box::new(TransformPredicate))
        .add(Box::new(SolvePredicate))
        .add(Statistics::counting_predicate(Counters::Solved, Some(has_solution)))
        .add(Box::new(RowPredicate))
        .add(Statistics::counting_predicate(Counters::Rows, None))
        .terminal(Box::new(terminal))
        .build()
}

/// Explore every start in `ctx.config`'s range, appending rows to `ctx`.
pub fn run(ctx: &mut ExplorerContext) {
    let engine = pipeline(&ctx.config, FailPredicate);
    // FAIL-terminated programs never suspend
    let _exhausted = engine.search(ctx);
    info!(
        starts = ctx.statistics.get(Counters::Starts),
        rows = ctx.statistics.get(Counters::Rows),
        solved = ctx.statistics.get(Counters::Solved),
        failures = ctx.statistics.total_failures(),
        cached = ctx.cache.len(),
        "batch complete"
    );
}

/// Validate `config`, explore its range with a fresh cache, and return the context.
///
/// # Example
///
/// ```
/// use collatz_lattice::config::ExplorerConfig;
/// use collatz_lattice::explorer::explore;
///
/// let ctx = explore(ExplorerConfig::range(1, 6)).unwrap();
/// assert_eq!(ctx.rows.len(), 6);
/// assert_eq!(ctx.rows[5].binary, "01010000");
/// ```
pub fn explore(config: ExplorerConfig) -> Result<ExplorerContext, ConfigError> {
    config.validate()?;
    let mut ctx = ExplorerContext::new(config);
    run(&mut ctx);
    Ok(ctx)
}
