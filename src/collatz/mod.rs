// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Collatz step and the plain trajectory.
//!
//! Everything else in the crate is built on [`step`]: the compaction cache walks
//! it to produce values, and the affine accumulator walks it to learn which
//! branch each step took.

pub mod affine;

pub use affine::AffineTransform;

use crate::error::{CollatzError, Result};

/// Which branch of the Collatz map a value takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Parity {
    /// `x -> x / 2`
    Even = 0,
    /// `x -> 3x + 1`
    Odd = 1,
}

impl Parity {
    /// Parity of `x`.
    pub fn of(x: u64) -> Self {
        if x % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// The binary digit for this parity: '0' for even, '1' for odd.
    pub fn as_char(self) -> char {
        match self {
            Parity::Even => '0',
            Parity::Odd => '1',
        }
    }
}

/// One Collatz step.
///
/// Returns the next value together with the parity of `x`, which decides the
/// branch taken.
///
/// # Errors
///
/// - [`CollatzError::InvalidInput`] if `x == 0`
/// - [`CollatzError::Overflow`] if `3x + 1` does not fit in a `u64`
pub fn step(x: u64) -> Result<(u64, Parity)> {
    if x == 0 {
        return Err(CollatzError::InvalidInput { value: x });
    }
    match Parity::of(x) {
        Parity::Even => Ok((x / 2, Parity::Even)),
        Parity::Odd => x
            .checked_mul(3)
            .and_then(|v| v.checked_add(1))
            .map(|next| (next, Parity::Odd))
            .ok_or(CollatzError::Overflow { value: x }),
    }
}

/// Iterator over the trajectory `x0, ..., 1`.
///
/// Yields `Err` at most once (on overflow) and then stops.
///
/// # Example
///
/// ```
/// use collatz_lattice::collatz::Trajectory;
///
/// let values: Vec<u64> = Trajectory::new(6).unwrap().map(|v| v.unwrap()).collect();
/// assert_eq!(values, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Trajectory {
    next: Option<u64>,
}

impl Trajectory {
    /// Start a trajectory at `x0`.
    ///
    /// # Errors
    ///
    /// [`CollatzError::InvalidInput`] if `x0 == 0`.
    pub fn new(x0: u64) -> Result<Self> {
        if x0 == 0 {
            return Err(CollatzError::InvalidInput { value: x0 });
        }
        Ok(Self { next: Some(x0) })
    }
}

impl Iterator for Trajectory {
    type Item = Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.next.take()?;
        if x == 1 {
            return Some(Ok(1));
        }
        match step(x) {
            Ok((next, _)) => {
                self.next = Some(next);
                Some(Ok(x))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// The full trajectory from `x0` as a vector.
pub fn trajectory(x0: u64) -> Result<Vec<u64>> {
    Trajectory::new(x0)?.collect()
}

/// Binary string of the parities of each transformed value, one digit per step.
///
/// The final `1` is not transformed, so `parity_string(1)` is empty.
pub fn parity_string(x0: u64) -> Result<String> {
    if x0 == 0 {
        return Err(CollatzError::InvalidInput { value: x0 });
    }
    let mut digits = String::new();
    let mut x = x0;
    while x != 1 {
        let (next, parity) = step(x)?;
        digits.push(parity.as_char());
        x = next;
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_even() {
        assert_eq!(step(6).unwrap(), (3, Parity::Even));
        assert_eq!(step(2).unwrap(), (1, Parity::Even));
    }

    #[test]
    fn test_step_odd() {
        assert_eq!(step(3).unwrap(), (10, Parity::Odd));
        assert_eq!(step(1).unwrap(), (4, Parity::Odd));
    }

    #[test]
    fn test_step_zero() {
        assert_eq!(step(0), Err(CollatzError::InvalidInput { value: 0 }));
    }

    #[test]
    fn test_step_overflow() {
        let x = u64::MAX; // odd
        assert_eq!(step(x), Err(CollatzError::Overflow { value: x }));
    }

    #[test]
    fn test_trajectory_six() {
        assert_eq!(trajectory(6).unwrap(), vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
    }

    #[test]
    fn test_trajectory_one() {
        assert_eq!(trajectory(1).unwrap(), vec![1]);
    }

    #[test]
    fn test_trajectory_zero() {
        assert!(Trajectory::new(0).is_err());
    }

    #[test]
    fn test_trajectory_overflow_stops() {
        let mut t = Trajectory::new(u64::MAX).unwrap();
        assert!(matches!(t.next(), Some(Err(CollatzError::Overflow { .. }))));
        assert!(t.next().is_none());
    }

    #[test]
    fn test_parity_string() {
        assert_eq!(parity_string(6).unwrap(), "01010000");
        assert_eq!(parity_string(1).unwrap(), "");
        assert_eq!(parity_string(3).unwrap(), "1010000");
    }
}
