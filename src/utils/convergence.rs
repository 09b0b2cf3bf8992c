//! Convergence tracking & tolerance checks for iterative solvers.

use std::fmt;

use crate::core::traits::Scalar;

/// Stopping criteria.
///
/// `max_iters == 0` means "derive the cap from the system size".
#[derive(Clone, Debug)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

impl<T: Scalar> Convergence<T> {
    /// Squared residual norm to reach: ε²·(b·b).
    pub fn target(&self, b_dot_b: T) -> T {
        self.tol * self.tol * b_dot_b
    }

    /// Iteration cap for an `n`-dimensional system; `0` maps to `10·n`.
    pub fn effective_max_iters(&self, n: usize) -> usize {
        if self.max_iters == 0 {
            10 * n
        } else {
            self.max_iters
        }
    }

    /// Converged once ⟨r, r⟩ ≤ target.
    pub fn is_converged(&self, residual_sq: T, target: T) -> bool {
        residual_sq <= target
    }
}

/// Denominator that tripped the divide-by-zero guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakdown {
    /// ⟨rT, A·d⟩ ≈ 0
    RtAd,
    /// ω ≈ 0
    Omega,
    /// ⟨rT, h⟩ ≈ 0
    Rth,
}

/// Why the iteration stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Converged,
    MaxIterations,
    Breakdown(Breakdown),
}

#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    /// Completed iterations.
    pub iterations: usize,
    /// Effective iteration cap.
    pub max_iters: usize,
    /// Final ⟨r, r⟩.
    pub residual_sq: T,
    /// ε²·⟨b, b⟩.
    pub target: T,
    /// Last ω.
    pub omega: T,
    /// Last ⟨rT, h⟩.
    pub rth: T,
    pub outcome: Outcome,
}

impl<T> SolveStats<T> {
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }
}

// One-line summary, emitted once per solve.
impl<T: fmt::Display> fmt::Display for SolveStats<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "success={} (its={} max_iter={} rTr={} err={} omega={} rTh={})",
            self.converged(),
            self.iterations,
            self.max_iters,
            self.residual_sq,
            self.target,
            self.omega,
            self.rth
        )?;
        if let Outcome::Breakdown(kind) = self.outcome {
            write!(f, " breakdown={:?}", kind)?;
        }
        Ok(())
    }
}
