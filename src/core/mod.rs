//! Core traits and their implementations for standard containers.

pub mod traits;
pub mod wrappers;

pub use traits::{MatVec, Scalar, Vector};
