//! Independent residual evaluation, used to check a returned solution.

use crate::core::traits::{MatVec, Vector};

/// ‖A·x − b‖², computed from scratch.
pub fn residual_norm_sq<M, V>(a: &M, b: &V, x: &V) -> V::Scalar
where
    M: MatVec<V> + ?Sized,
    V: Vector,
{
    let mut r = V::zeros(b.dimension());
    a.mult(x, &mut r);
    r.axpy(-<V::Scalar as num_traits::One>::one(), b);
    r.dot(&r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;

    #[test]
    fn residual_of_exact_solution_is_zero() {
        let a = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 0.0 });
        let b = vec![2.0, 4.0];
        assert_eq!(residual_norm_sq(&a, &b, &vec![1.0, 2.0]), 0.0);
        assert_eq!(residual_norm_sq(&a, &b, &vec![0.0, 0.0]), 20.0);
    }
}
