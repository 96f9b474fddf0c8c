// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The affine map a whole trajectory applies to its starting value.
//!
//! Each even step halves the running map, each odd step sends it to
//! `3 * map + 1`. After the last step the map sends the starting value to 1.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use tracing::debug;

use super::step;
use crate::collatz::Parity;
use crate::error::{CollatzError, Result};

/// `value -> a * value + b`, with `a` and `b` exact and in lowest terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineTransform {
    pub a: BigRational,
    pub b: BigRational,
}

impl AffineTransform {
    /// The identity map `(1, 0)`.
    pub fn identity() -> Self {
        Self {
            a: BigRational::one(),
            b: BigRational::zero(),
        }
    }

    /// Compose one Collatz branch onto this map.
    ///
    /// `BigRational` arithmetic reduces after every operation, so numerators and
    /// denominators stay coprime.
    pub fn apply_step(&mut self, parity: Parity) {
        match parity {
            Parity::Even => {
                let two = BigRational::from_integer(BigInt::from(2));
                self.a = &self.a / &two;
                self.b = &self.b / &two;
            }
            Parity::Odd => {
                let three = BigRational::from_integer(BigInt::from(3));
                self.a = &self.a * &three;
                self.b = &self.b * &three + BigRational::one();
            }
        }
    }

    /// Accumulate the map over the trajectory of `x0`.
    ///
    /// # Errors
    ///
    /// - [`CollatzError::InvalidInput`] if `x0 == 0`
    /// - [`CollatzError::Overflow`] if the trajectory leaves `u64`
    pub fn accumulate(x0: u64) -> Result<Self> {
        if x0 == 0 {
            return Err(CollatzError::InvalidInput { value: x0 });
        }
        let mut transform = Self::identity();
        let mut x = x0;
        let mut steps = 0usize;
        while x != 1 {
            let (next, parity) = step(x)?;
            transform.apply_step(parity);
            x = next;
            steps += 1;
        }
        debug!(x0, steps, %transform, "accumulated affine transform");
        Ok(transform)
    }

    /// Evaluate the map at an integer.
    pub fn apply(&self, value: &BigInt) -> BigRational {
        &self.a * BigRational::from_integer(value.clone()) + &self.b
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x + {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_accumulate_one() {
        let t = AffineTransform::accumulate(1).unwrap();
        assert_eq!(t, AffineTransform::identity());
        assert_eq!(t.to_string(), "1x + 0");
    }

    #[test]
    fn test_accumulate_six() {
        let t = AffineTransform::accumulate(6).unwrap();
        assert_eq!(t.a, ratio(9, 64));
        assert_eq!(t.b, ratio(5, 32));
        assert_eq!(t.to_string(), "9/64x + 5/32");
    }

    #[test]
    fn test_accumulate_power_of_two() {
        let t = AffineTransform::accumulate(16).unwrap();
        assert_eq!(t.a, ratio(1, 16));
        assert_eq!(t.b, BigRational::zero());
    }

    #[test]
    fn test_maps_start_to_one() {
        for x0 in 1..200u64 {
            let t = AffineTransform::accumulate(x0).unwrap();
            assert_eq!(t.apply(&BigInt::from(x0)), BigRational::one(), "x0 = {}", x0);
        }
    }

    #[test]
    fn test_accumulate_zero() {
        assert_eq!(
            AffineTransform::accumulate(0),
            Err(CollatzError::InvalidInput { value: 0 })
        );
    }

    #[test]
    fn test_apply_step_reduces() {
        let mut t = AffineTransform::identity();
        t.apply_step(Parity::Odd); // 3x + 1
        t.apply_step(Parity::Even); // 3/2 x + 1/2
        t.apply_step(Parity::Even); // 3/4 x + 1/4
        assert_eq!(t.a, ratio(3, 4));
        assert_eq!(t.b, ratio(1, 4));
        assert_eq!(t.a.denom(), &BigInt::from(4));
    }
}
