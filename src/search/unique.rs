/// True iff no two positions hold equal values.
///
/// Exhaustive comparison of every pair `i < j`, O(N²). Lengths 0 and 1 are trivially unique.
pub fn has_unique_elements<T: PartialEq>(a: &[T]) -> bool {
    for i in 0..a.len().saturating_sub(1) {
        for j in (i + 1)..a.len() {
            if a[i] == a[j] {
                return false;
            }
        }
    }
    true
}
