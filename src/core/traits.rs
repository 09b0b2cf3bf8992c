//! Core linear-algebra traits for stabkit.
//!
//! The solver only ever touches its operands through these three traits:
//! a scalar policy, a BLAS-1 vector surface, and a matrix–vector product.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// Real scalar type the solver works in.
pub trait Scalar: Float + Debug + Display + Send + Sync + 'static {
    /// Default convergence tolerance ε.
    const DEFAULT_EPSILON: Self;

    /// Divide-by-zero guard: `|a| < 10 · MIN_POSITIVE`.
    ///
    /// This is not a convergence test and must not be compared against ε.
    fn is_near_zero(self) -> bool;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const DEFAULT_EPSILON: Self = 1e-4;

            #[inline]
            fn is_near_zero(self) -> bool {
                self.abs() < 10.0 * <$t>::MIN_POSITIVE
            }
        }
    )*};
}

impl_scalar!(f32, f64);

/// BLAS-1 surface on dense vectors.
///
/// All binary operations require operands of equal dimension; a mismatch is a
/// programming error and implementations panic on it.
pub trait Vector: Sized {
    /// Element type.
    type Scalar: Scalar;

    /// Zero vector of dimension `n`.
    fn zeros(n: usize) -> Self;
    /// Number of entries.
    fn dimension(&self) -> usize;
    /// self ← src
    fn copy_from(&mut self, src: &Self);
    /// self ← α·self
    fn scal(&mut self, alpha: Self::Scalar);
    /// self ← self + α·x
    fn axpy(&mut self, alpha: Self::Scalar, x: &Self);
    /// Σᵢ selfᵢ·yᵢ
    fn dot(&self, y: &Self) -> Self::Scalar;
}

/// Square matrix surface: y ← A x.
pub trait MatVec<V> {
    /// Row count; the square dimension n.
    fn dimension(&self) -> usize;
    /// Column count. Must equal `dimension()` for the solver to accept the matrix.
    fn ncols(&self) -> usize {
        self.dimension()
    }
    /// Compute y = A · x. `y` is overwritten, never accumulated into.
    fn mult(&self, x: &V, y: &mut V);
}

impl<M: MatVec<V> + ?Sized, V> MatVec<V> for &M {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }
    fn ncols(&self) -> usize {
        (**self).ncols()
    }
    fn mult(&self, x: &V, y: &mut V) {
        (**self).mult(x, y)
    }
}
