//! Binary digit counting, ⌊log₂ n⌋ + 1, by repeated halving.
//!
//! Both variants halve with floor division and must agree for every `n ≥ 1`.
//! The recursion depth is bounded by the bit width of `T`.

use crate::error::{AlgoError, Result};
use num_traits::PrimInt;

fn require_positive<T: PrimInt>(n: T) -> Result<()> {
    if n <= T::zero() {
        return Err(AlgoError::invalid("positive input only"));
    }
    Ok(())
}

/// Recursive variant: `count(1) = 1`, `count(n) = 1 + count(n / 2)`.
pub fn count_binary_digits_recursive<T: PrimInt>(n: T) -> Result<u32> {
    require_positive(n)?;
    Ok(halvings(n))
}

fn halvings<T: PrimInt>(n: T) -> u32 {
    if n == T::one() {
        1
    } else {
        1 + halvings(n / (T::one() + T::one()))
    }
}

/// Iterative variant of [`count_binary_digits_recursive`].
pub fn count_binary_digits<T: PrimInt>(n: T) -> Result<u32> {
    require_positive(n)?;
    let two = T::one() + T::one();
    let mut n = n;
    let mut count = 1;
    while n > T::one() {
        count += 1;
        n = n / two;
    }
    Ok(count)
}
