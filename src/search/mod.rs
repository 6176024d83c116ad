//! Linear scans over sequences: search, maximum, and pairwise uniqueness.
//!
//! All three borrow the sequence for the duration of the call and never reorder it.

pub mod linear;
pub use linear::{NOT_FOUND, sequential_search, sequential_search_sentinel};
pub mod max;
pub use max::find_max_element;
pub mod unique;
pub use unique::has_unique_elements;
