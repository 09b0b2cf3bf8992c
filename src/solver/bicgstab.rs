//! BiCGStab solver without preconditioner.
//!
//! The recurrence follows Ashby, Manteuffel & Saylor, *A taxonomy for conjugate
//! gradient methods*, SIAM J. Numer. Anal. 27 (1990), written against the
//! residual convention `r = A·x − b`.
//!
//! Working storage is six vectors: `r`, `rT`, `d`, `h`, `Ad`, `t`. The
//! intermediate `s` of the textbook method lives in the `h` buffer; every read of
//! `s` happens after `h` has been updated to hold it.
//!
//! Every denominator is guarded with [`Scalar::is_near_zero`]. A guard that
//! fires stops the iteration and the solve reports failure unless the residual
//! is already within tolerance; no NaN or infinity is ever produced by a
//! division in the kernel.

use crate::config::options::{SolverOptions, check_epsilon};
use crate::core::traits::{MatVec, Scalar, Vector};
use crate::error::KError;
use crate::solver::LinearSolver;
use crate::utils::convergence::{Breakdown, Convergence, Outcome, SolveStats};

pub struct BiCgStabSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Scalar> BiCgStabSolver<T> {
    /// `max_iters == 0` caps the iteration at `10·n`.
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters } }
    }

    pub fn from_options(opts: &SolverOptions<T>) -> Result<Self, KError> {
        opts.validate()?;
        Ok(Self::new(opts.epsilon, opts.max_iter))
    }

    /// Set ε. A non-positive or non-finite value is rejected and the previous
    /// tolerance kept.
    pub fn set_epsilon(&mut self, eps: T) -> Result<(), KError> {
        check_epsilon(eps)?;
        self.conv.tol = eps;
        Ok(())
    }

    pub fn set_max_iter(&mut self, max_iters: usize) {
        self.conv.max_iters = max_iters;
    }

    pub fn epsilon(&self) -> T {
        self.conv.tol
    }

    pub fn max_iter(&self) -> usize {
        self.conv.max_iters
    }
}

impl<T: Scalar> Default for BiCgStabSolver<T> {
    fn default() -> Self {
        Self::new(T::DEFAULT_EPSILON, 0)
    }
}

/// Check that `A` is square and that `A`, `b` and `x` share one positive
/// dimension, and return it.
pub fn check_dimensions<M, V>(a: &M, b: &V, x: &V) -> Result<usize, KError>
where
    M: MatVec<V> + ?Sized,
    V: Vector,
{
    let n = a.dimension();
    if a.ncols() != n {
        return Err(KError::NotSquare { rows: n, cols: a.ncols() });
    }
    if b.dimension() != n || x.dimension() != n {
        return Err(KError::DimensionMismatch {
            matrix: n,
            rhs: b.dimension(),
            solution: x.dimension(),
        });
    }
    if n == 0 {
        return Err(KError::EmptySystem);
    }
    Ok(n)
}

impl<M, V, T> LinearSolver<M, V> for BiCgStabSolver<T>
where
    M: MatVec<V>,
    V: Vector<Scalar = T>,
    T: Scalar,
{
    type Scalar = T;

    fn solve_with_stats(&self, a: &M, b: &V, x: &mut V) -> Result<SolveStats<T>, KError> {
        let n = match check_dimensions(a, b, x) {
            Ok(n) => n,
            Err(e) => {
                log::warn!("BiCGStab: success=false ({})", e);
                return Err(e);
            }
        };
        let max_iters = self.conv.effective_max_iters(n);
        let one = T::one();

        let mut r = V::zeros(n);
        let mut rt = V::zeros(n);
        let mut d = V::zeros(n);
        let mut h = V::zeros(n);
        let mut ad = V::zeros(n);
        let mut t = V::zeros(n);

        let err = self.conv.target(b.dot(b));

        // r = A x - b
        a.mult(x, &mut r);
        r.axpy(-one, b);

        // d = h = rT = r
        d.copy_from(&r);
        h.copy_from(&d);
        rt.copy_from(&h);

        let mut rth = rt.dot(&h);
        let mut rtr = r.dot(&r);
        let mut omega = T::zero();
        let mut its = 0;
        let mut breakdown = None;

        while rtr > err && its < max_iters {
            a.mult(&d, &mut ad);
            let rtad = rt.dot(&ad);
            if rtad.is_near_zero() {
                breakdown = Some(Breakdown::RtAd);
                break;
            }
            let alpha = rth / rtad;
            r.axpy(-alpha, &ad);

            // s ≡ h: s = h - alpha Ad
            let s = &mut h;
            s.axpy(-alpha, &ad);
            a.mult(s, &mut t);
            let st = s.dot(&t);
            let tt = t.dot(&t);
            omega = if st.is_near_zero() || tt.is_near_zero() {
                T::zero()
            } else {
                st / tt
            };

            // x = x - alpha d - omega s
            x.axpy(-alpha, &d);
            x.axpy(-omega, s);

            // h = s is implied by the alias
            r.axpy(-omega, &t);
            rtr = r.dot(&r);
            h.axpy(-omega, &t);

            log::trace!("BiCGStab its={} alpha={} omega={} rTr={}", its, alpha, omega, rtr);

            if omega.is_near_zero() {
                breakdown = Some(Breakdown::Omega);
                break;
            }
            if rth.is_near_zero() {
                breakdown = Some(Breakdown::Rth);
                break;
            }

            // beta = (rTh_new / rTh_prev) * (alpha / omega)
            let mut beta = (alpha / omega) / rth;
            rth = rt.dot(&h);
            beta = beta * rth;

            // d = beta d + h - beta omega Ad
            d.scal(beta);
            d.axpy(one, &h);
            d.axpy(-beta * omega, &ad);
            its += 1;
        }

        let outcome = if self.conv.is_converged(rtr, err) {
            Outcome::Converged
        } else if let Some(kind) = breakdown {
            Outcome::Breakdown(kind)
        } else {
            Outcome::MaxIterations
        };
        let stats = SolveStats {
            iterations: its,
            max_iters,
            residual_sq: rtr,
            target: err,
            omega,
            rth,
            outcome,
        };
        if stats.converged() {
            log::info!("BiCGStab: {}", stats);
        } else {
            log::warn!("BiCGStab: {}", stats);
        }
        Ok(stats)
    }
}
