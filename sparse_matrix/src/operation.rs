use std::fmt;
use std::str::FromStr;

use crate::arith::{add, subtract};
use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;
use crate::multiply::multiply;

/// Arithmetic a caller can ask for on a pair of matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Computes `a <op> b` into a fresh matrix.
    pub fn apply(self, a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => multiply(a, b),
        }
    }

    /// Like [`apply`](Self::apply), but multiplies by `b` transposed when
    /// `transpose_rhs` is set. Addition and subtraction ignore the flag.
    pub fn apply_with(self, a: &SparseMatrix, b: &SparseMatrix, transpose_rhs: bool) -> Result<SparseMatrix> {
        match self {
            Self::Multiply if transpose_rhs => multiply(a, &b.transpose()),
            _ => self.apply(a, b),
        }
    }
}

/// Accepts the menu number or the name, case-insensitively:
/// `1`/`add`, `2`/`subtract`, `3`/`multiply`.
impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "add" => Ok(Self::Add),
            "2" | "subtract" => Ok(Self::Subtract),
            "3" | "multiply" => Ok(Self::Multiply),
            _ => Err(Error::InvalidOperation(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operation() -> Result<()> {
        assert_eq!("1".parse::<Operation>()?, Operation::Add);
        assert_eq!(" ADD \n".parse::<Operation>()?, Operation::Add);
        assert_eq!("2".parse::<Operation>()?, Operation::Subtract);
        assert_eq!("Subtract".parse::<Operation>()?, Operation::Subtract);
        assert_eq!("3".parse::<Operation>()?, Operation::Multiply);
        assert_eq!("multiply".parse::<Operation>()?, Operation::Multiply);
        Ok(())
    }

    #[test]
    fn test_invalid_operation() {
        let err = "divide".parse::<Operation>().unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(ref s) if s == "divide"));
        assert!("4".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_display_parses_back() -> Result<()> {
        for op in [Operation::Add, Operation::Subtract, Operation::Multiply] {
            assert_eq!(op.to_string().parse::<Operation>()?, op);
        }
        Ok(())
    }

    #[test]
    fn test_apply_dispatch() -> Result<()> {
        let a = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (1, 1, 2)]);
        let b = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (1, 1, 1)]);
        assert_eq!(Operation::Add.apply(&a, &b)?, add(&a, &b));
        assert_eq!(Operation::Subtract.apply(&a, &b)?, subtract(&a, &b));
        assert_eq!(Operation::Multiply.apply(&a, &b)?, a);
        Ok(())
    }

    #[test]
    fn test_apply_with_transpose() -> Result<()> {
        // 1x2 times (1x2)^T
        let a = SparseMatrix::from_entries(1, 2, [(0, 0, 2), (0, 1, 3)]);
        let b = SparseMatrix::from_entries(1, 2, [(0, 0, 4), (0, 1, 5)]);
        assert!(Operation::Multiply.apply(&a, &b).is_err());

        let c = Operation::Multiply.apply_with(&a, &b, true)?;
        assert_eq!(c.shape(), (1, 1));
        assert_eq!(c.get(0, 0), 23);

        // no effect on addition
        assert_eq!(Operation::Add.apply_with(&a, &b, true)?, add(&a, &b));
        Ok(())
    }
}
