//! Solver interface.

use crate::error::KError;
use crate::utils::convergence::SolveStats;

/// Common interface for iterative solvers of A·x = b.
pub trait LinearSolver<M, V> {
    type Scalar;

    /// Solve A·x = b, refining `x` in place from its initial value.
    ///
    /// Returns `Err` only when the inputs are rejected before any work is done;
    /// iteration caps and breakdowns come back as `Ok` with the matching outcome.
    fn solve_with_stats(&self, a: &M, b: &V, x: &mut V) -> Result<SolveStats<Self::Scalar>, KError>;

    /// Solve A·x = b and report only whether the tolerance was reached.
    fn solve(&self, a: &M, b: &V, x: &mut V) -> bool {
        self.solve_with_stats(a, b, x)
            .map(|stats| stats.converged())
            .unwrap_or(false)
    }
}

pub mod bicgstab;
pub use bicgstab::BiCgStabSolver;
