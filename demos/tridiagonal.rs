use stabkit::matrix::CsrMatrix;
use stabkit::solver::{BiCgStabSolver, LinearSolver};
use stabkit::utils::residual_norm_sq;

fn main() {
    let n = 100;
    // non-symmetric convection-diffusion stencil
    let a = CsrMatrix::<f64>::tridiagonal(n, -1.2, 2.5, -0.8);
    let b: Vec<f64> = (0..n).map(|i| ((i + 1) as f64 / n as f64).powi(2)).collect();
    let mut x = vec![0.0; n];

    let solver = BiCgStabSolver::new(1e-10, 0);
    match solver.solve_with_stats(&a, &b, &mut x) {
        Ok(stats) => {
            println!("{}", stats);
            println!("true residual² = {:e}", residual_norm_sq(&a, &b, &x));
            println!("x[0..5] = {:?}", &x[..5]);
        }
        Err(e) => eprintln!("rejected: {}", e),
    }
}
