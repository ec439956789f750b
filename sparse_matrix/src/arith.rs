use crate::matrix::SparseMatrix;

fn result_shape(a: &SparseMatrix, b: &SparseMatrix) -> SparseMatrix {
    SparseMatrix::new(a.num_rows.max(b.num_rows), a.num_cols.max(b.num_cols))
}

/// Element-wise sum. The result takes the larger declared row and column
/// counts of the two operands; shapes are never checked.
pub fn add(a: &SparseMatrix, b: &SparseMatrix) -> SparseMatrix {
    let mut result = result_shape(a, b);
    for (row, col, value) in a.entries().chain(b.entries()) {
        result.set(row, col, result.get(row, col) + value);
    }
    result
}

/// Element-wise difference `a - b`, shaped like [`add`].
pub fn subtract(a: &SparseMatrix, b: &SparseMatrix) -> SparseMatrix {
    let mut result = result_shape(a, b);
    for (row, col, value) in a.entries() {
        result.set(row, col, value);
    }
    for (row, col, value) in b.entries() {
        result.set(row, col, result.get(row, col) - value);
    }
    result
}
