//! API options for the BiCGSTAB solver.
//!
//! This module provides the `SolverOptions` struct, which holds the two knobs the
//! solver exposes: the relative tolerance ε and the iteration cap. A cap of zero
//! is a sentinel meaning `10·n` for an `n`-dimensional system.

use crate::core::traits::Scalar;
use crate::error::KError;

/// Solver tolerance & iteration cap.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions<T> {
    /// Relative tolerance ε; convergence when ‖A·x − b‖² ≤ ε²·‖b‖²
    pub epsilon: T,

    /// Maximum iterations (0 = 10·n)
    pub max_iter: usize,
}

impl<T: Scalar> Default for SolverOptions<T> {
    fn default() -> Self {
        Self {
            epsilon: T::DEFAULT_EPSILON,
            max_iter: 0,
        }
    }
}

impl<T: Scalar> SolverOptions<T> {
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Reject tolerances that are not strictly positive and finite.
    pub fn validate(&self) -> Result<(), KError> {
        check_epsilon(self.epsilon)
    }
}

pub(crate) fn check_epsilon<T: Scalar>(epsilon: T) -> Result<(), KError> {
    if epsilon.is_finite() && epsilon > T::zero() {
        Ok(())
    } else {
        Err(KError::InvalidTolerance(format!(
            "epsilon must be positive and finite, got {}",
            epsilon
        )))
    }
}
