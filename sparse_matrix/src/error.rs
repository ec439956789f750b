//! Error types for sparse matrix loading, saving and arithmetic

use std::io;
use thiserror::Error;

/// Result type alias using this crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the matrix operations
#[derive(Error, Debug)]
pub enum Error {
    /// The source could not be read or its header lines are unusable
    #[error("Error loading matrix from {source_name}: {cause}")]
    Load {
        /// Path or label of the source
        source_name: String,
        /// What went wrong
        cause: LoadCause,
    },

    /// The destination could not be created or written
    #[error("Error saving matrix to {destination}: {source}")]
    Save {
        /// Path or label of the destination
        destination: String,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// Inner dimensions of a product do not agree
    #[error("Matrices cannot be multiplied due to dimension mismatch: left has {left_cols} columns, right has {right_rows} rows")]
    DimensionMismatch {
        /// Declared column count of the left operand
        left_cols: u32,
        /// Declared row count of the right operand
        right_rows: u32,
    },

    /// JSON interchange failure
    #[error("Invalid matrix JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognised operation selection
    #[error("Invalid operation '{0}'")]
    InvalidOperation(String),
}

/// Why a load failed
#[derive(Error, Debug)]
pub enum LoadCause {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("missing {0} header line")]
    MissingHeader(&'static str),

    #[error("no integer found in {field} header {line:?}")]
    NoInteger { field: &'static str, line: String },

    #[error("{field} header value {digits} is out of range")]
    OutOfRange { field: &'static str, digits: String },
}

impl Error {
    pub(crate) fn load(source_name: impl Into<String>, cause: impl Into<LoadCause>) -> Self {
        Self::Load {
            source_name: source_name.into(),
            cause: cause.into(),
        }
    }

    pub(crate) fn save(destination: impl Into<String>, source: io::Error) -> Self {
        Self::Save {
            destination: destination.into(),
            source,
        }
    }
}
