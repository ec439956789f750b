use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

/// Matrix product `a * b`.
///
/// Fails with [`Error::DimensionMismatch`] unless `a.num_cols == b.num_rows`.
/// Only the stored elements of `a` are visited; for each one the matching row
/// of `b` is read sparsely, restricted to `b`'s declared column range. Sums
/// are accumulated per output coordinate and written once, so an element
/// lands in the result only if its final total is non-zero.
pub fn multiply(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    if a.num_cols != b.num_rows {
        return Err(Error::DimensionMismatch {
            left_cols: a.num_cols,
            right_rows: b.num_rows,
        });
    }

    let mut sums: BTreeMap<(u32, u32), i64> = BTreeMap::new();
    for (a_row, a_col, a_val) in a.entries() {
        for (b_col, b_val) in b.row(a_col).filter(|&(c, _)| c < b.num_cols) {
            *sums.entry((a_row, b_col)).or_insert(0) += a_val * b_val;
        }
    }

    let mut result = SparseMatrix::new(a.num_rows, b.num_cols);
    for ((row, col), value) in sums {
        result.set(row, col, value);
    }
    Ok(result)
}
