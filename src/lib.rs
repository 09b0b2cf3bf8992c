//! stabkit: unpreconditioned BiCGSTAB over a minimal BLAS-1 surface
//!
//! This crate solves square linear systems `A·x = b` with the BiConjugate Gradient
//! Stabilized method. The matrix is only ever touched through a matrix–vector
//! product ([`MatVec`]) and the vectors through four BLAS-1 primitives
//! ([`Vector`]), so dense `faer` matrices, CSR matrices, and matrix-free closures
//! all plug into the same solver.
//!
//! ```rust
//! use stabkit::{BiCgStabSolver, CsrMatrix, LinearSolver};
//!
//! let a = CsrMatrix::<f64>::tridiagonal(4, -1.0, 4.0, -1.0);
//! let b = vec![1.0; 4];
//! let mut x = vec![0.0; 4];
//! let solver = BiCgStabSolver::new(1e-10, 0);
//! assert!(solver.solve(&a, &b, &mut x));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
