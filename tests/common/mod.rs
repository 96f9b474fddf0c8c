// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use collatz_lattice::solver::LatticeSolution;
use num_bigint::BigInt;
use num_rational::BigRational;

pub fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

pub fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(big(n), big(d))
}

/// Whether `a*x + b == y` holds exactly.
pub fn on_line(a: &BigRational, b: &BigRational, x: &BigInt, y: &BigInt) -> bool {
    a * BigRational::from_integer(x.clone()) + b == BigRational::from_integer(y.clone())
}

/// Pairs as `(i64, i64)` for readable assertions.
pub fn small_pairs(pairs: &[(BigInt, BigInt)]) -> Vec<(i64, i64)> {
    pairs
        .iter()
        .map(|(x, y)| {
            (
                i64::try_from(x).expect("x fits i64"),
                i64::try_from(y).expect("y fits i64"),
            )
        })
        .collect()
}

/// The first `count` samples of a solution, as `(i64, i64)`.
pub fn first_samples(solution: &LatticeSolution, count: usize) -> Vec<(i64, i64)> {
    small_pairs(&solution.samples(count))
}
