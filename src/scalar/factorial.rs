//! Factorial over 64-bit signed integers.
//!
//! # Overflow
//! `21!` does not fit in an `i64`. [`factorial`] wraps on overflow (two's-complement, the same value a
//! plain unchecked 64-bit product produces) and never reports it. Use [`checked_factorial`] when the
//! caller needs to know whether the result is exact.

use crate::error::{AlgoError, Result};

/// Largest `n` for which `n!` is representable as an `i64`.
pub const MAX_EXACT_FACTORIAL: i32 = 20;

fn require_non_negative(n: i32) -> Result<()> {
    if n < 0 {
        return Err(AlgoError::invalid("non-negative input only"));
    }
    Ok(())
}

/// Compute `n!` with `0! = 1` and `n! = (n-1)! × n`, wrapping past [`MAX_EXACT_FACTORIAL`].
///
/// The product is accumulated bottom-up in the same order as the recursive definition unwinds,
/// so large `n` cannot exhaust the stack.
pub fn factorial(n: i32) -> Result<i64> {
    require_non_negative(n)?;
    Ok((1..=i64::from(n)).fold(1i64, |acc, k| acc.wrapping_mul(k)))
}

/// Like [`factorial`], but `Ok(None)` when the result overflows an `i64`.
pub fn checked_factorial(n: i32) -> Result<Option<i64>> {
    require_non_negative(n)?;
    Ok((1..=i64::from(n)).try_fold(1i64, |acc, k| acc.checked_mul(k)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn negative_rejected() {
        assert!(matches!(factorial(-1), Err(AlgoError::InvalidArgument(_))));
        assert!(matches!(checked_factorial(-3), Err(AlgoError::InvalidArgument(_))));
    }

    #[test]
    fn overflow_boundary() {
        assert_eq!(checked_factorial(MAX_EXACT_FACTORIAL).unwrap(), Some(factorial(20).unwrap()));
        assert_eq!(checked_factorial(MAX_EXACT_FACTORIAL + 1).unwrap(), None);
        // 21! mod 2^64, reinterpreted as signed
        assert_eq!(factorial(21).unwrap(), -4_249_290_049_419_214_848);
    }
}
