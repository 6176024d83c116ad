//! Core module: matrix access traits and their storage implementations.

pub mod traits;
pub mod wrappers;

pub use traits::{FromFn, MatShape, RowAccess};
pub use wrappers::RowMatrix;
