//! Direct elimination on dense matrices.

pub mod gauss;
pub use gauss::{Advisory, EliminationReport, gaussian_elimination};
