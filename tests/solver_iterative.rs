//! Tests for the BiCGStab solver on random well-conditioned systems.
//!
//! Each system is built from a known solution `x_true`, so the iterate can be compared
//! elementwise, and the residual is re-evaluated independently of the solver.

use approx::assert_abs_diff_eq;
use faer::Mat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stabkit::core::traits::MatVec;
use stabkit::solver::{BiCgStabSolver, LinearSolver};
use stabkit::utils::residual_norm_sq;

/// Random non-symmetric, strictly diagonally dominant matrix with a known solution.
fn random_diag_dominant(n: usize, seed: u64) -> (Mat<f64>, Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let a = Mat::from_fn(n, n, |i, j| {
        if i == j { n as f64 + data[j * n + i].abs() } else { data[j * n + i] }
    });
    let x_true: Vec<f64> = (0..n).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let mut b = vec![0.0; n];
    a.mult(&x_true, &mut b);
    (a, b, x_true)
}

/// Random symmetric positive definite matrix `MᵀM + n·I`.
fn random_spd(n: usize, seed: u64) -> (Mat<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let m: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let a = Mat::from_fn(n, n, |i, j| {
        let mut s: f64 = (0..n).map(|k| m[i * n + k] * m[j * n + k]).sum();
        if i == j {
            s += n as f64;
        }
        s
    });
    let b: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    (a, b)
}

#[test]
fn bicgstab_recovers_known_solution_on_nonsymmetric() {
    let n = 20;
    for seed in 0..5 {
        let (a, b, x_true) = random_diag_dominant(n, seed);
        let mut x = vec![0.0; n];
        let solver = BiCgStabSolver::new(1e-12, 0);
        let stats = solver.solve_with_stats(&a, &b, &mut x).unwrap();
        assert!(stats.converged(), "seed {seed}: {stats}");
        for i in 0..n {
            assert_abs_diff_eq!(x[i], x_true[i], epsilon = 1e-8);
        }
    }
}

/// Whenever `solve` reports success, the independent residual must meet ε²·‖b‖².
#[test]
fn success_implies_residual_contract() {
    let n = 12;
    for seed in 0..10 {
        let (a, b) = random_spd(n, 100 + seed);
        let b_dot_b: f64 = b.iter().map(|v| v * v).sum();
        for eps in [1e-4, 1e-8] {
            let mut x = vec![0.0; n];
            let solver = BiCgStabSolver::new(eps, 0);
            if solver.solve(&a, &b, &mut x) {
                let res = residual_norm_sq(&a, &b, &x);
                assert!(res <= eps * eps * b_dot_b, "seed {seed}, eps {eps}: {res}");
            }
        }
    }
}

#[test]
fn nonzero_initial_guess_is_refined() {
    let n = 15;
    let (a, b, x_true) = random_diag_dominant(n, 42);
    let mut x: Vec<f64> = x_true.iter().map(|v| v + 0.5).collect();
    let solver = BiCgStabSolver::new(1e-12, 0);
    assert!(solver.solve(&a, &b, &mut x));
    for i in 0..n {
        assert_abs_diff_eq!(x[i], x_true[i], epsilon = 1e-8);
    }
}
