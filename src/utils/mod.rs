pub mod convergence;
pub mod residual;

pub use convergence::{Breakdown, Convergence, Outcome};
pub use residual::residual_norm_sq;
