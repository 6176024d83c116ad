//! Scalar algorithms: binary digit counting and factorial.

pub mod digits;
pub use digits::{count_binary_digits, count_binary_digits_recursive};
pub mod factorial;
pub use factorial::{MAX_EXACT_FACTORIAL, checked_factorial, factorial};
