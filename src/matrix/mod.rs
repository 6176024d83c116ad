//! Matrix module: dense matrix products.

pub mod multiply;
pub use multiply::multiply;
