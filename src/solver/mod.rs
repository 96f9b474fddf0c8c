// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer lattice points on a rational line.
//!
//! Solves `y = (a_num/a_den) x + (b_num/b_den)` over the integers.
//!
//! # Method
//!
//! 1. Clear denominators with `m = lcm(a_den, b_den)`: the line becomes
//!    `m*y = p*x + r` with `p = m*a_num/a_den` and `r = m*b_num/b_den`.
//! 2. An integer `x` exists exactly when `m*y ≡ r (mod |p|)`. Invert `m`
//!    modulo `|p|` with extended Euclid; a non-unit gcd is reported as
//!    [`CollatzError::NoModularInverse`].
//! 3. The smallest non-negative `y0 = inv * (r mod |p|) mod |p|` starts the
//!    family `y = y0 + k*dy`, `x = (m*y - r) / p`, for `k = 0, 1, 2, ...`.

pub mod arith;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use tracing::debug;

use crate::collatz::AffineTransform;
use crate::error::{CollatzError, Result};
use arith::{lcm, mod_inverse};

/// Number of pairs shown per line unless configured otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 6;

/// General solution of `m*y = p*x + r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeSolution {
    /// `lcm(a_den, b_den)`
    pub m: BigInt,
    /// Cleared slope numerator.
    pub p: BigInt,
    /// Cleared intercept numerator.
    pub r: BigInt,
    /// Smallest non-negative `y` on the lattice.
    pub y0: BigInt,
    /// Step in `y` between consecutive solutions.
    pub delta_y: BigInt,
    /// Magnitude of the step in `x` between consecutive solutions.
    pub delta_x: BigInt,
}

/// Human-readable general solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParametricEquations {
    /// `y` in terms of the parameter `k`.
    pub y_of_k: String,
    /// `x` in terms of `y`.
    pub x_of_y: String,
}

/// Solve `y = (a_num/a_den) x + (b_num/b_den)` over the integers.
///
/// The fractions need not be reduced, but the denominators must be positive.
///
/// # Errors
///
/// - [`CollatzError::InvalidDenominator`] if a denominator is not positive
/// - [`CollatzError::DegenerateLine`] if the slope is zero
/// - [`CollatzError::NoModularInverse`] if `gcd(m, |p|) != 1`
///
/// # Example
///
/// ```
/// use collatz_lattice::solver::solve;
/// use num_bigint::BigInt;
///
/// let solution = solve(&BigInt::from(3), &BigInt::from(64), &BigInt::from(1), &BigInt::from(16)).unwrap();
/// assert_eq!(solution.m, BigInt::from(64));
/// assert_eq!(solution.equations().y_of_k, "y = 1 + 3k");
/// ```
pub fn solve(a_num: &BigInt, a_den: &BigInt, b_num: &BigInt, b_den: &BigInt) -> Result<LatticeSolution> {
    for den in [a_den, b_den] {
        if !den.is_positive() {
            return Err(CollatzError::InvalidDenominator {
                denominator: den.clone(),
            });
        }
    }

    let m = lcm(a_den, b_den);
    let p = &m * a_num / a_den;
    let r = &m * b_num / b_den;
    if p.is_zero() {
        return Err(CollatzError::DegenerateLine);
    }

    let modulus = p.abs();
    let inv = mod_inverse(&m, &modulus).inspect_err(|_| debug!(%m, %p, %r, "no lattice solution"))?;
    let y0 = (inv * r.mod_floor(&modulus)).mod_floor(&modulus);

    let g = m.gcd(&modulus);
    let delta_y = &modulus / &g;
    let delta_x = &m / &g;

    Ok(LatticeSolution {
        m,
        p,
        r,
        y0,
        delta_y,
        delta_x,
    })
}

/// Solve `y = a*x + b` for reduced rationals `a`, `b`.
pub fn solve_line(a: &BigRational, b: &BigRational) -> Result<LatticeSolution> {
    solve(a.numer(), a.denom(), b.numer(), b.denom())
}

impl LatticeSolution {
    /// Lattice points on the line `value -> a*value + b` of a transform.
    pub fn for_transform(transform: &AffineTransform) -> Result<Self> {
        solve_line(&transform.a, &transform.b)
    }

    /// The `y` of the `k`th solution.
    pub fn y_at(&self, k: &BigInt) -> BigInt {
        &self.y0 + k * &self.delta_y
    }

    /// `x` for a `y` on the lattice. Exact by construction.
    pub fn x_for(&self, y: &BigInt) -> BigInt {
        (&self.m * y - &self.r) / &self.p
    }

    /// The `k`th solution `(x, y)`.
    pub fn point(&self, k: &BigInt) -> (BigInt, BigInt) {
        let y = self.y_at(k);
        (self.x_for(&y), y)
    }

    /// Whether `(x, y)` lies on the line.
    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        &self.m * y == &self.p * x + &self.r
    }

    /// All solutions, in increasing `k`.
    pub fn iter(&self) -> Solutions<'_> {
        Solutions {
            solution: self,
            k: BigInt::zero(),
        }
    }

    /// The first `count` solutions.
    pub fn samples(&self, count: usize) -> Vec<(BigInt, BigInt)> {
        self.iter().take(count).collect()
    }

    /// The first `count` solutions with `x > 0` and `y > 0`.
    ///
    /// `y` grows with `k`. With a negative slope `x` shrinks, so the scan stops
    /// once `x` is no longer positive and may return fewer than `count` pairs.
    pub fn positive_samples(&self, count: usize) -> Vec<(BigInt, BigInt)> {
        let descending = self.p.is_negative();
        self.iter()
            .take_while(|(x, _)| !descending || x.is_positive())
            .filter(|(x, y)| x.is_positive() && y.is_positive())
            .take(count)
            .collect()
    }

    pub fn equations(&self) -> ParametricEquations {
        let numerator = if self.r.is_negative() {
            format!("{}y + {}", self.m, -&self.r)
        } else {
            format!("{}y - {}", self.m, self.r)
        };
        let denominator = if self.p.is_negative() {
            format!("({})", self.p)
        } else {
            self.p.to_string()
        };
        ParametricEquations {
            y_of_k: format!("y = {} + {}k", self.y0, self.delta_y),
            x_of_y: format!("x = ({}) / {}", numerator, denominator),
        }
    }
}

/// Iterator over the solutions of a [`LatticeSolution`].
#[derive(Debug, Clone)]
pub struct Solutions<'a> {
    solution: &'a LatticeSolution,
    k: BigInt,
}

impl Iterator for Solutions<'_> {
    type Item = (BigInt, BigInt);

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.solution.point(&self.k);
        self.k += BigInt::one();
        Some(point)
    }
}

/// Format pairs as `(x, y) (x, y) ...`.
pub fn format_pairs(pairs: &[(BigInt, BigInt)]) -> String {
    pairs
        .iter()
        .map(|(x, y)| format!("({}, {})", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}
