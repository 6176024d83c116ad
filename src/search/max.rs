use crate::error::{AlgoError, Result};

/// Largest element by a single left-to-right scan.
///
/// The running maximum starts at `a[0]` and is replaced only on a strict `>`; for floats this means a
/// `NaN` in a later position is never selected.
pub fn find_max_element<T: PartialOrd + Copy>(a: &[T]) -> Result<T> {
    let (&first, rest) = a
        .split_first()
        .ok_or_else(|| AlgoError::invalid("empty list"))?;
    let mut maxval = first;
    for &x in rest {
        if x > maxval {
            maxval = x;
        }
    }
    Ok(maxval)
}
