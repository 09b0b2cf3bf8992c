//! Wrappers for faer dense matrix types and `Vec<T>` vector operations.
//!
//! This module implements the core traits for `Vec<T>` (the BLAS-1 surface) and for
//! `faer::Mat` / `faer::MatRef` (the matrix surface), so that they can be handed
//! straight to the BiCGSTAB solver.
//!
//! # Features
//! - `copy`, `scal`, `axpy` and `dot` on `Vec<T>`, with optional Rayon parallelism.
//! - Dense matrix–vector products for `faer` matrices.
//!
//! With the `rayon` feature, vectors at least [`PAR_THRESHOLD`] long are processed in
//! parallel. `dot` sums fixed-size chunks and then folds the partial sums in order,
//! so its result does not depend on how the work was scheduled.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{MatVec, Scalar, Vector};
use faer::{Mat, MatRef};

/// Vectors shorter than this are always processed serially.
pub const PAR_THRESHOLD: usize = 1 << 14;

#[cfg(feature = "rayon")]
const DOT_CHUNK: usize = 4096;

impl<T: Scalar> Vector for Vec<T> {
    type Scalar = T;

    fn zeros(n: usize) -> Self {
        vec![T::zero(); n]
    }

    fn dimension(&self) -> usize {
        self.len()
    }

    fn copy_from(&mut self, src: &Self) {
        assert_eq!(self.len(), src.len(), "Vectors must have the same length");
        self.copy_from_slice(src);
    }

    fn scal(&mut self, alpha: T) {
        #[cfg(feature = "rayon")]
        if self.len() >= PAR_THRESHOLD {
            use rayon::prelude::*;
            self.par_iter_mut().for_each(|v| *v = alpha * *v);
            return;
        }
        self.iter_mut().for_each(|v| *v = alpha * *v);
    }

    fn axpy(&mut self, alpha: T, x: &Self) {
        assert_eq!(self.len(), x.len(), "Vectors must have the same length");
        if alpha == T::zero() {
            return;
        }
        #[cfg(feature = "rayon")]
        if self.len() >= PAR_THRESHOLD {
            use rayon::prelude::*;
            self.par_iter_mut()
                .zip(x.par_iter())
                .for_each(|(yi, xi)| *yi = *yi + alpha * *xi);
            return;
        }
        for (yi, xi) in self.iter_mut().zip(x.iter()) {
            *yi = *yi + alpha * *xi;
        }
    }

    fn dot(&self, y: &Self) -> T {
        assert_eq!(self.len(), y.len(), "Vectors must have the same length");
        #[cfg(feature = "rayon")]
        if self.len() >= PAR_THRESHOLD {
            use rayon::prelude::*;
            let partial: Vec<T> = self
                .par_chunks(DOT_CHUNK)
                .zip(y.par_chunks(DOT_CHUNK))
                .map(|(xs, ys)| serial_dot(xs, ys))
                .collect();
            return partial.into_iter().fold(T::zero(), |acc, v| acc + v);
        }
        serial_dot(self, y)
    }
}

#[inline]
fn serial_dot<T: Scalar>(x: &[T], y: &[T]) -> T {
    x.iter()
        .zip(y.iter())
        .map(|(xi, yi)| *xi * *yi)
        .fold(T::zero(), |acc, v| acc + v)
}

/// Implements the matrix surface for a dense `faer::Mat`.
///
/// Computes `y = A * x`; `dimension()` is the row count. A non-square matrix
/// reports its true column count and is rejected by the solver before `mult`.
impl<T: Scalar> MatVec<Vec<T>> for Mat<T> {
    fn dimension(&self) -> usize {
        self.nrows()
    }

    fn ncols(&self) -> usize {
        Mat::ncols(self)
    }

    fn mult(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            let mut acc = T::zero();
            for j in 0..self.ncols() {
                acc = acc + self[(i, j)] * x[j];
            }
            y[i] = acc;
        }
    }
}

/// Implements the matrix surface for a dense matrix reference (`faer::MatRef`).
impl<'a, T: Scalar> MatVec<Vec<T>> for MatRef<'a, T> {
    fn dimension(&self) -> usize {
        self.nrows()
    }

    fn ncols(&self) -> usize {
        MatRef::ncols(self)
    }

    fn mult(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            let mut acc = T::zero();
            for j in 0..self.ncols() {
                acc = acc + self[(i, j)] * x[j];
            }
            y[i] = acc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn blas1_on_vec() {
        let x: Vec<f64> = vec![1.0, 2.0, 3.0];
        let mut y = vec![4.0, -5.0, 6.0];
        assert_abs_diff_eq!(x.dot(&y), 12.0, epsilon = 1e-12);

        y.axpy(2.0, &x);
        assert_eq!(y, vec![6.0, -1.0, 12.0]);

        // α = 0 is a no-op, even with non-finite entries in x
        let inf = vec![f64::INFINITY; 3];
        y.axpy(0.0, &inf);
        assert_eq!(y, vec![6.0, -1.0, 12.0]);

        y.scal(-1.0);
        assert_eq!(y, vec![-6.0, 1.0, -12.0]);
        y.scal(0.0);
        assert!(y.iter().all(|v| *v == 0.0));

        y.copy_from(&x);
        assert_eq!(y, x);
        assert_eq!(Vec::<f64>::zeros(4), vec![0.0; 4]);
        assert_eq!(y.dimension(), 3);
    }

    #[test]
    #[should_panic]
    fn axpy_rejects_mismatched_lengths() {
        let mut y = vec![0.0f64; 2];
        y.axpy(1.0, &vec![1.0; 3]);
    }

    #[test]
    fn long_dot_matches_serial() {
        let n = PAR_THRESHOLD + 123;
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin()).collect();
        let y: Vec<f64> = (0..n).map(|i| (i as f64 * 0.11).cos()).collect();
        let expected = serial_dot(&x, &y);
        assert_abs_diff_eq!(x.dot(&y), expected, epsilon = 1e-9);
        // scheduling must not change the bits
        assert_eq!(x.dot(&y).to_bits(), x.dot(&y).to_bits());
    }

    #[test]
    fn faer_mult_overwrites_output() {
        let a: Mat<f64> = Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [1.0, 3.0]][i][j]);
        let x = vec![1.0, 2.0];
        let mut y = vec![100.0, 100.0];
        a.mult(&x, &mut y);
        assert_eq!(y, vec![6.0, 7.0]);
        a.as_ref().mult(&x, &mut y);
        assert_eq!(y, vec![6.0, 7.0]);
        assert_eq!(MatVec::<Vec<f64>>::dimension(&a), 2);
    }

    #[test]
    fn faer_shape_is_reported_per_axis() {
        let tall: Mat<f64> = Mat::from_fn(3, 2, |i, j| (i + j) as f64);
        assert_eq!(MatVec::<Vec<f64>>::dimension(&tall), 3);
        assert_eq!(MatVec::<Vec<f64>>::ncols(&tall), 2);
        assert_eq!(MatVec::<Vec<f64>>::ncols(&tall.as_ref()), 2);
        assert_eq!(MatVec::<Vec<f64>>::ncols(&&tall), 2);
    }
}
