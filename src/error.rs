use thiserror::Error;

// Unified error type for stabkit

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KError {
    #[error("dimension mismatch: matrix is {matrix}, rhs is {rhs}, solution is {solution}")]
    DimensionMismatch {
        matrix: usize,
        rhs: usize,
        solution: usize,
    },
    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },
    #[error("empty system (dimension 0)")]
    EmptySystem,
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),
    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),
}
