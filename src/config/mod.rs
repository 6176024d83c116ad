pub mod options;
pub use options::{Algorithm, BenchOptions, DEFAULT_OUTPUT};
