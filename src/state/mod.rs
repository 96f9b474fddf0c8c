// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counters kept across a whole batch.
//!
//! Unlike the per-start state in [`crate::context::DynamicState`], these are
//! never reset when the engine moves on to the next starting integer.

pub mod statistics;

pub use statistics::{Counters, Statistics};
