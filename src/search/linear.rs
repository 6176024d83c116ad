//! Sequential search from index 0.

/// Sentinel index reported for an absent key.
pub const NOT_FOUND: i64 = -1;

/// Index of the first element equal to `key`, or `None` when the sequence is exhausted.
///
/// An empty sequence always yields `None`.
pub fn sequential_search<T: PartialEq>(a: &[T], key: &T) -> Option<usize> {
    let mut i = 0;
    while i < a.len() && a[i] != *key {
        i += 1;
    }
    (i < a.len()).then_some(i)
}

/// [`sequential_search`] with the not-found case mapped to [`NOT_FOUND`].
pub fn sequential_search_sentinel<T: PartialEq>(a: &[T], key: &T) -> i64 {
    sequential_search(a, key).map_or(NOT_FOUND, |i| i as i64)
}
