use std::collections::BTreeMap;

use crate::entry::{MatrixData, MatrixEntry};
use crate::error::Result;

/// Integer matrix storing only its non-zero elements, keyed by `(row, col)`.
///
/// `num_rows` and `num_cols` are the declared shape. They are used to size
/// arithmetic results and to check multiplication compatibility, but they do
/// not bound the stored coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    pub num_rows: u32,
    pub num_cols: u32,
    // never holds a zero value
    entries: BTreeMap<(u32, u32), i64>,
}

impl SparseMatrix {
    pub fn new(num_rows: u32, num_cols: u32) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: BTreeMap::new(),
        }
    }

    /// Builds a matrix from `(row, col, value)` triples, dropping zero values.
    /// Later triples overwrite earlier ones at the same coordinate.
    pub fn from_entries<I>(num_rows: u32, num_cols: u32, entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32, i64)>,
    {
        entries
            .into_iter()
            .fold(Self::new(num_rows, num_cols), |mut m, (r, c, v)| {
                m.set(r, c, v);
                m
            })
    }

    pub fn shape(&self) -> (u32, u32) {
        (self.num_rows, self.num_cols)
    }

    /// Number of stored (non-zero) elements.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `(row, col)`, or 0 when nothing is stored there.
    pub fn get(&self, row: u32, col: u32) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Stores `value` at `(row, col)`. Setting 0 removes the element.
    pub fn set(&mut self, row: u32, col: u32, value: i64) {
        if value == 0 {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Stored elements as `(row, col, value)` in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, u32, i64)> + '_ {
        self.entries.iter().map(|(&(r, c), &v)| (r, c, v))
    }

    /// Stored elements of a single row, ordered by column.
    pub(crate) fn row(&self, row: u32) -> impl Iterator<Item = (u32, i64)> + '_ {
        self.entries
            .range((row, 0)..=(row, u32::MAX))
            .map(|(&(_, c), &v)| (c, v))
    }

    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.num_cols, self.num_rows);
        for (r, c, v) in self.entries() {
            transposed.set(c, r, v);
        }
        transposed
    }

    pub fn to_data(&self) -> MatrixData {
        MatrixData {
            rows: self.num_rows,
            cols: self.num_cols,
            values: self.entries().map(MatrixEntry::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_data())?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let data: MatrixData = serde_json::from_str(json)?;
        Ok(data.into())
    }
}

impl From<MatrixData> for SparseMatrix {
    fn from(data: MatrixData) -> Self {
        Self::from_entries(
            data.rows,
            data.cols,
            data.values.into_iter().map(|e| (e.row, e.col, e.value)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let m = SparseMatrix::new(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert!(m.is_empty());
        assert_eq!(m.get(1, 1), 0);

        let d = SparseMatrix::default();
        assert_eq!(d.shape(), (0, 0));
    }

    #[test]
    fn test_set_zero_removes() {
        let mut m = SparseMatrix::new(2, 2);
        m.set(0, 1, 7);
        assert_eq!(m.get(0, 1), 7);
        assert_eq!(m.nnz(), 1);

        m.set(0, 1, 0);
        assert_eq!(m.get(0, 1), 0);
        assert_eq!(m.nnz(), 0);

        // removing an absent coordinate is a no-op
        m.set(1, 1, 0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_out_of_range_coordinates_are_kept() {
        let mut m = SparseMatrix::new(1, 1);
        m.set(5, 9, -2);
        assert_eq!(m.get(5, 9), -2);
        assert_eq!(m.shape(), (1, 1));
    }

    #[test]
    fn test_entries_row_major() {
        let m = SparseMatrix::from_entries(3, 3, [(2, 0, 1), (0, 2, 2), (0, 1, 3), (1, 1, 0)]);
        let got: Vec<_> = m.entries().collect();
        assert_eq!(got, vec![(0, 1, 3), (0, 2, 2), (2, 0, 1)]);
    }

    #[test]
    fn test_row_slice() {
        let m = SparseMatrix::from_entries(3, 3, [(0, 0, 1), (1, 2, 4), (1, 0, 5), (2, 2, 6)]);
        let row: Vec<_> = m.row(1).collect();
        assert_eq!(row, vec![(0, 5), (2, 4)]);
        assert_eq!(m.row(7).count(), 0);
    }

    #[test]
    fn test_transpose() {
        let m = SparseMatrix::from_entries(2, 3, [(0, 2, 5), (1, 0, -1)]);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 0), 5);
        assert_eq!(t.get(0, 1), -1);
        assert_eq!(t.nnz(), 2);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_json_roundtrip_drops_zeros() -> Result<()> {
        let json = r#"{"rows":2,"cols":2,"values":[{"row":0,"col":0,"value":3},{"row":1,"col":1,"value":0}]}"#;
        let m = SparseMatrix::from_json(json)?;
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(0, 0), 3);

        let back = SparseMatrix::from_json(&m.to_json()?)?;
        assert_eq!(back, m);
        Ok(())
    }

    #[test]
    fn test_bad_json() {
        assert!(SparseMatrix::from_json("{\"rows\": 1}").is_err());
    }
}
