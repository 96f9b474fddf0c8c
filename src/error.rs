// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types shared by the step function, the sequence generator and the solver.

use num_bigint::BigInt;
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants};
use thiserror::Error;

/// Errors that can occur while exploring a starting integer.
///
/// None of these are transient: retrying the same input gives the same error.
/// [`ErrorKind`] names the variant without its payload, for counting.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(Hash, EnumCountMacro))]
pub enum CollatzError {
    /// Starting integer is not positive.
    #[error("{value} is not a positive integer")]
    InvalidInput { value: u64 },

    /// `gcd(value, modulus) != 1`, so `value` has no inverse modulo `modulus`.
    ///
    /// The cleared-fraction equation has no solution of the modular form the
    /// solver looks for.
    #[error("no modular inverse of {value} modulo {modulus} (gcd {gcd})")]
    NoModularInverse {
        value: BigInt,
        modulus: BigInt,
        gcd: BigInt,
    },

    /// A coefficient denominator handed to the solver is not positive.
    #[error("denominator {denominator} is not positive")]
    InvalidDenominator { denominator: BigInt },

    /// The line has slope zero, so `x` is unconstrained.
    #[error("line has zero slope")]
    DegenerateLine,

    /// `3x + 1` does not fit in a `u64`.
    #[error("trajectory overflows u64 after {value}")]
    Overflow { value: u64 },
}

impl CollatzError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from(self)
    }
}

pub type Result<T> = std::result::Result<T, CollatzError>;

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_kinds_are_distinct_indices() {
        let errors = [
            CollatzError::InvalidInput { value: 0 },
            CollatzError::NoModularInverse {
                value: BigInt::from(4),
                modulus: BigInt::from(2),
                gcd: BigInt::from(2),
            },
            CollatzError::InvalidDenominator {
                denominator: BigInt::from(0),
            },
            CollatzError::DegenerateLine,
            CollatzError::Overflow { value: u64::MAX },
        ];
        assert_eq!(errors.len(), CollatzError::COUNT);
        assert_eq!(ErrorKind::COUNT, CollatzError::COUNT);
        for (i, e) in errors.iter().enumerate() {
            assert_eq!(e.kind() as usize, i);
        }
    }

    #[test]
    fn test_display() {
        let e = CollatzError::NoModularInverse {
            value: BigInt::from(4),
            modulus: BigInt::from(2),
            gcd: BigInt::from(2),
        };
        assert_eq!(e.to_string(), "no modular inverse of 4 modulo 2 (gcd 2)");
        assert_eq!(e.kind(), ErrorKind::NoModularInverse);
        assert_eq!(
            CollatzError::InvalidInput { value: 0 }.to_string(),
            "0 is not a positive integer"
        );
    }
}
