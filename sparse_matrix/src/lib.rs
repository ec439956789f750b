//! Integer sparse matrices backed by a coordinate map.
//!
//! Matrices load from and save to a small line-oriented text format (see
//! [`format`]) and support addition, subtraction, multiplication and
//! transposition. Every operator allocates its result; operands are never
//! modified.

pub mod arith;
pub mod entry;
pub mod error;
pub mod format;
pub mod matrix;
pub mod multiply;
pub mod operation;

pub use arith::{add, subtract};
pub use entry::{MatrixData, MatrixEntry};
pub use error::{Error, LoadCause, Result};
pub use matrix::SparseMatrix;
pub use multiply::multiply;
pub use operation::Operation;

/// Transposed copy of `m`.
pub fn transpose(m: &SparseMatrix) -> SparseMatrix {
    m.transpose()
}

/// Reads a matrix file.
pub fn load(path: impl AsRef<std::path::Path>) -> Result<SparseMatrix> {
    SparseMatrix::load(path)
}

/// Writes `m` to a file in the text format.
pub fn save(m: &SparseMatrix, path: impl AsRef<std::path::Path>) -> Result<()> {
    m.save(path)
}
