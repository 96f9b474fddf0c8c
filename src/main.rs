// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `collatz`: print the exploration table for a range of starting integers.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use collatz_lattice::config::ExplorerConfig;
use collatz_lattice::explorer::explore;
use collatz_lattice::report::render_table;
use collatz_lattice::solver::DEFAULT_SAMPLE_COUNT;

/// Compact Collatz trajectories and the lattice points on their affine maps.
#[derive(Debug, Parser)]
#[command(name = "collatz", version, about)]
struct Args {
    /// First starting integer
    #[arg(long, default_value_t = 1)]
    start: u64,

    /// Last starting integer (inclusive)
    #[arg(long, default_value_t = 19)]
    end: u64,

    /// Lattice points shown per row
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Only show lattice points with x > 0 and y > 0
    #[arg(long)]
    positive_only: bool,

    /// Keep at most this many cached suffixes
    #[arg(long)]
    cache_capacity: Option<usize>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> ExplorerConfig {
        ExplorerConfig {
            start: self.start,
            end: self.end,
            sample_count: self.samples,
            positive_only: self.positive_only,
            cache_capacity: self.cache_capacity,
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match explore(args.config()) {
        Ok(ctx) => {
            print!("{}", render_table(&ctx.rows));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%e, "invalid configuration");
            eprintln!("collatz: {}", e);
            ExitCode::FAILURE
        }
    }
}
