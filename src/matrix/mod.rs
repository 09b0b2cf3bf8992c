//! Matrix module: concrete matrix types implementing `MatVec`.
//!
//! Dense `faer` matrices are wired up in `core::wrappers`.

pub mod operator;
pub use operator::MatrixFn;
pub mod sparse;
pub use sparse::CsrMatrix;
