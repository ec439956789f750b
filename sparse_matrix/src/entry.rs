use serde::{Deserialize, Serialize};

/// A single non-zero element in its interchange form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub row: u32,
    pub col: u32,
    pub value: i64,
}

/// Serde view of a whole matrix: declared shape plus entries in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixData {
    pub rows: u32,
    pub cols: u32,
    pub values: Vec<MatrixEntry>,
}

impl From<(u32, u32, i64)> for MatrixEntry {
    fn from((row, col, value): (u32, u32, i64)) -> Self {
        Self { row, col, value }
    }
}
