// Square compressed-sparse-row matrix backed by faer's `SparseRowMat`.

use faer::sparse::{SparseRowMat, SymbolicSparseRowMat, Triplet};
use faer::traits::ComplexField;

use crate::core::traits::{MatVec, Scalar};
use crate::error::KError;

#[derive(Clone, Debug)]
pub struct CsrMatrix<T> {
    inner: SparseRowMat<usize, T>,
}

impl<T: Scalar + ComplexField> CsrMatrix<T> {
    /// Build an `n × n` CSR from raw row-ptr, col-idx, and values.
    ///
    /// `row_ptr` must have `n + 1` non-decreasing entries starting at 0 and ending
    /// at `values.len()`. Columns may come in any order within a row; repeated
    /// columns are summed. A column index `>= n` is rejected by faer.
    pub fn from_csr(
        n: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, KError> {
        if row_ptr.len() != n + 1 {
            return Err(KError::InvalidMatrix(format!(
                "row_ptr has {} entries, expected {}",
                row_ptr.len(),
                n + 1
            )));
        }
        if col_idx.len() != values.len() {
            return Err(KError::InvalidMatrix(format!(
                "{} column indices for {} values",
                col_idx.len(),
                values.len()
            )));
        }
        if row_ptr[0] != 0 || row_ptr[n] != values.len() {
            return Err(KError::InvalidMatrix(
                "row_ptr must start at 0 and end at nnz".into(),
            ));
        }
        if row_ptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(KError::InvalidMatrix("row_ptr is not monotone".into()));
        }
        let triplets: Vec<_> = row_ptr
            .windows(2)
            .enumerate()
            .flat_map(|(i, w)| (w[0]..w[1]).map(move |k| (i, k)))
            .map(|(i, k)| Triplet::new(i, col_idx[k], values[k]))
            .collect();
        Self::from_faer_triplets(n, &triplets)
    }

    /// Build from `(row, col, value)` triplets; duplicate entries are summed.
    pub fn from_triplets(n: usize, triplets: &[(usize, usize, T)]) -> Result<Self, KError> {
        let triplets: Vec<_> = triplets
            .iter()
            .map(|&(i, j, v)| Triplet::new(i, j, v))
            .collect();
        Self::from_faer_triplets(n, &triplets)
    }

    fn from_faer_triplets(n: usize, triplets: &[Triplet<usize, usize, T>]) -> Result<Self, KError> {
        let inner = SparseRowMat::try_new_from_triplets(n, n, triplets)
            .map_err(|e| KError::InvalidMatrix(format!("{}", e)))?;
        Ok(Self { inner })
    }

    /// `n × n` tridiagonal matrix with constant bands.
    pub fn tridiagonal(n: usize, sub: T, diag: T, sup: T) -> Self {
        let mut row_ptr = Vec::with_capacity(n + 1);
        let mut col_idx = Vec::with_capacity(3 * n);
        let mut values = Vec::with_capacity(3 * n);
        row_ptr.push(0);
        for i in 0..n {
            if i > 0 {
                col_idx.push(i - 1);
                values.push(sub);
            }
            col_idx.push(i);
            values.push(diag);
            if i + 1 < n {
                col_idx.push(i + 1);
                values.push(sup);
            }
            row_ptr.push(col_idx.len());
        }
        // sorted, in-bounds columns: the checked constructor cannot fail here
        let symbolic = SymbolicSparseRowMat::new_checked(n, n, row_ptr, None, col_idx);
        Self { inner: SparseRowMat::new(symbolic, values) }
    }

    pub fn nnz(&self) -> usize {
        self.inner.compute_nnz()
    }

    /// The underlying faer matrix.
    pub fn as_faer(&self) -> &SparseRowMat<usize, T> {
        &self.inner
    }

    #[inline]
    fn row_dot(&self, i: usize, x: &[T]) -> T {
        let range = self.inner.row_range(i);
        self.inner.col_idx()[range.clone()]
            .iter()
            .zip(&self.inner.val()[range])
            .fold(T::zero(), |acc, (&j, &v)| acc + v * x[j])
    }

    /// Compute y = A * x on slices.
    pub fn spmv(&self, x: &[T], y: &mut [T]) {
        assert_eq!(x.len(), self.inner.ncols(), "Input vector x has incorrect length");
        assert_eq!(y.len(), self.inner.nrows(), "Output vector y has incorrect length");
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = self.row_dot(i, x);
        }
    }
}

#[cfg(feature = "rayon")]
impl<T: Scalar + ComplexField> CsrMatrix<T> {
    /// Parallel SpMV using Rayon; rows are independent so the result matches `spmv`.
    pub fn spmv_parallel(&self, x: &[T], y: &mut [T]) {
        use rayon::prelude::*;
        assert_eq!(x.len(), self.inner.ncols(), "Input vector x has incorrect length");
        assert_eq!(y.len(), self.inner.nrows(), "Output vector y has incorrect length");
        y.par_iter_mut()
            .enumerate()
            .for_each(|(i, yi)| *yi = self.row_dot(i, x));
    }
}

impl<T: Scalar + ComplexField> MatVec<Vec<T>> for CsrMatrix<T> {
    fn dimension(&self) -> usize {
        self.inner.nrows()
    }

    fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    fn mult(&self, x: &Vec<T>, y: &mut Vec<T>) {
        #[cfg(feature = "rayon")]
        if self.inner.nrows() >= crate::core::wrappers::PAR_THRESHOLD {
            self.spmv_parallel(x, y);
            return;
        }
        self.spmv(x, y);
    }
}
