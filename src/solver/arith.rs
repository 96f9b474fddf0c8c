// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Extended Euclid and modular inverses over `BigInt`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{CollatzError, Result};

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `a*s + b*t = g` and `g = gcd(a, b) >= 0`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        if a.is_negative() {
            (-a.clone(), -BigInt::one(), BigInt::zero())
        } else {
            (a.clone(), BigInt::one(), BigInt::zero())
        }
    } else {
        let (g, s1, t1) = extended_gcd(b, &(a % b));
        // b*s1 + (a - (a/b)*b)*t1 = g
        let t = s1 - (a / b) * &t1;
        (g, t1, t)
    }
}

/// Inverse of `value` modulo `modulus` (`modulus > 0`), in `0..modulus`.
///
/// # Errors
///
/// [`CollatzError::NoModularInverse`] if `gcd(value, modulus) != 1`.
pub fn mod_inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    debug_assert!(modulus.is_positive());
    let (g, s, _) = extended_gcd(value, modulus);
    if !g.is_one() {
        return Err(CollatzError::NoModularInverse {
            value: value.clone(),
            modulus: modulus.clone(),
            gcd: g,
        });
    }
    Ok(s.mod_floor(modulus))
}

/// Least common multiple, always non-negative.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    a.lcm(b)
}
