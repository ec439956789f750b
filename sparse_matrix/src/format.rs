//! Line-oriented text encoding.
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 1)
//! (2, 1, -4)
//! ```
//!
//! The first two lines carry the row and column counts as the first run of
//! digits found anywhere in the line, so `rows: 3` or a bare `3` also load.
//! Every later line that does not start with a `(row, col, value)` triple is
//! skipped.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, LoadCause, Result};
use crate::matrix::SparseMatrix;

static HEADER_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid header regex"));
static ENTRY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\((\d+),\s*(\d+),\s*(-?\d+)\)").expect("valid entry regex"));

fn parse_header(line: &str, field: &'static str) -> std::result::Result<u32, LoadCause> {
    let digits = HEADER_INT
        .find(line)
        .ok_or_else(|| LoadCause::NoInteger {
            field,
            line: line.to_string(),
        })?
        .as_str();
    digits.parse().map_err(|_| LoadCause::OutOfRange {
        field,
        digits: digits.to_string(),
    })
}

fn parse_entry(line: &str) -> Option<(u32, u32, i64)> {
    let caps = ENTRY_LINE.captures(line)?;
    Some((
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ))
}

impl SparseMatrix {
    /// Reads a matrix from `reader`. `source_name` only labels errors.
    pub fn read_from<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let mut lines = reader.lines();
        let mut header = |field: &'static str| -> std::result::Result<u32, LoadCause> {
            let line = lines.next().ok_or(LoadCause::MissingHeader(field))??;
            parse_header(&line, field)
        };
        let num_rows = header("rows").map_err(|e| Error::load(source_name, e))?;
        let num_cols = header("cols").map_err(|e| Error::load(source_name, e))?;

        let mut matrix = SparseMatrix::new(num_rows, num_cols);
        let mut skipped = 0usize;
        for line in lines {
            let line = line.map_err(|e| Error::load(source_name, e))?;
            match parse_entry(&line) {
                Some((row, col, value)) => matrix.set(row, col, value),
                None => {
                    debug!(source = source_name, line = %line, "skipping non-entry line");
                    skipped += 1;
                }
            }
        }
        debug!(
            source = source_name,
            rows = num_rows,
            cols = num_cols,
            nnz = matrix.nnz(),
            skipped,
            "loaded matrix"
        );
        Ok(matrix)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::load(&name, e))?;
        Self::read_from(BufReader::new(file), &name)
    }

    /// Writes the text encoding, entries sorted by `(row, col)`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::create(path).map_err(|e| Error::save(&name, e))?;
        self.write_to(BufWriter::new(file))
            .map_err(|e| Error::save(&name, e))?;
        debug!(destination = %name, nnz = self.nnz(), "saved matrix");
        Ok(())
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows={}", self.num_rows)?;
        writeln!(f, "cols={}", self.num_cols)?;
        for (row, col, value) in self.entries() {
            writeln!(f, "({row}, {col}, {value})")?;
        }
        Ok(())
    }
}

impl FromStr for SparseMatrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::read_from(s.as_bytes(), "<string>")
    }
}
