//! Matrix given only by its action.
//!
//! `MatrixFn` lets a caller hand the solver any linear map `y ← A·x` without
//! materializing `A`: a stencil, a product of factors, a matrix owned by another
//! library. The closure receives `x` and must overwrite all of `y`.

use std::marker::PhantomData;

use crate::core::traits::{MatVec, Scalar};

pub struct MatrixFn<T, F> {
    n: usize,
    f: F,
    _scalar: PhantomData<fn(&[T], &mut [T])>,
}

impl<T, F> MatrixFn<T, F>
where
    T: Scalar,
    F: Fn(&[T], &mut [T]),
{
    pub fn new(n: usize, f: F) -> Self {
        Self { n, f, _scalar: PhantomData }
    }
}

impl<T, F> MatVec<Vec<T>> for MatrixFn<T, F>
where
    T: Scalar,
    F: Fn(&[T], &mut [T]),
{
    fn dimension(&self) -> usize {
        self.n
    }

    fn mult(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(x.len(), self.n, "Input vector x has incorrect length");
        assert_eq!(y.len(), self.n, "Output vector y has incorrect length");
        (self.f)(x.as_slice(), y.as_mut_slice())
    }
}
