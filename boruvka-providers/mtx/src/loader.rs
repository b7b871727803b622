//! Streaming loader turning coordinate files into sparse matrices.

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
    str::FromStr,
};

use boruvka_core::{SparseError, SparseMatrix, Weight};
use tracing::{debug, instrument};

use crate::{
    errors::MatrixMarketError,
    header::{Field, MatrixMarketHeader, Symmetry},
};

/// Loads the Matrix Market file at `path` into a new matrix.
///
/// # Errors
/// Returns [`MatrixMarketError::Io`] when the file cannot be opened and any
/// error reported by [`try_from_reader`].
#[instrument(
    name = "mtx.load",
    err,
    skip(path),
    fields(path = %path.as_ref().display()),
)]
pub fn try_from_path<W, M>(path: impl AsRef<Path>) -> Result<M, MatrixMarketError>
where
    W: Weight + FromStr,
    M: SparseMatrix<W>,
{
    let file = File::open(path.as_ref()).map_err(|source| MatrixMarketError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    try_from_reader(BufReader::new(file))
}

/// Loads a Matrix Market document from `reader`.
///
/// Blank lines and `%` comments are skipped anywhere in the document.
/// `pattern` entries weigh [`Weight::ONE`]; `symmetric` entries are stored
/// in both directions. A cell written twice keeps the smaller weight, and
/// lines beyond the declared entry count are ignored.
///
/// # Errors
/// Returns a [`MatrixMarketError`] describing the first malformed line.
///
/// # Examples
/// ```
/// use boruvka_core::{SequentialMatrix, SparseMatrix};
/// use boruvka_providers_mtx::try_from_reader;
///
/// let text = "%%MatrixMarket matrix coordinate integer symmetric\n\
///             3 3 2\n\
///             2 1 7\n\
///             3 2 4\n";
/// let graph: SequentialMatrix<u32> = try_from_reader(text.as_bytes())?;
/// assert_eq!(graph.nnz(), 4);
/// assert_eq!(graph.get_element(0, 1), Some(7));
/// # Ok::<(), boruvka_providers_mtx::MatrixMarketError>(())
/// ```
pub fn try_from_reader<W, M, R>(reader: R) -> Result<M, MatrixMarketError>
where
    W: Weight + FromStr,
    M: SparseMatrix<W>,
    R: BufRead,
{
    let mut lines = NumberedLines::new(reader);
    let (header, size) = read_preamble(&mut lines)?;
    let mut matrix = M::create(size.rows, size.cols);

    let mut found = 0;
    while found < size.entries {
        let Some((number, text)) = lines.next_line()? else {
            return Err(MatrixMarketError::InsufficientData {
                expected: size.entries,
                found,
            });
        };
        let trimmed = text.trim();
        if is_skippable(trimmed) {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let row = parse_index(tokens.next(), number, "row index", size.rows)?;
        let col = parse_index(tokens.next(), number, "column index", size.cols)?;
        let weight = match header.field() {
            Field::Pattern => W::ONE,
            Field::Integer => parse_token(tokens.next(), number, "weight")?,
        };

        store_min(&mut matrix, row, col, weight)?;
        if header.symmetry() == Symmetry::Symmetric && row != col {
            store_min(&mut matrix, col, row, weight)?;
        }
        found += 1;
    }

    debug!(
        vertices = size.rows,
        entries = found,
        stored = matrix.nnz(),
        field = %header.field(),
        symmetry = %header.symmetry(),
        "matrix market graph loaded"
    );
    Ok(matrix)
}

struct NumberedLines<R> {
    lines: Lines<R>,
    number: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, MatrixMarketError> {
        let Some(next) = self.lines.next() else {
            return Ok(None);
        };
        self.number += 1;
        let text = next.map_err(|source| MatrixMarketError::Read {
            line: self.number,
            source,
        })?;
        Ok(Some((self.number, text)))
    }
}

#[derive(Clone, Copy, Debug)]
struct SizeLine {
    rows: usize,
    cols: usize,
    entries: usize,
}

impl SizeLine {
    fn parse(text: &str, line: usize) -> Result<Self, MatrixMarketError> {
        let mut tokens = text.split_whitespace();
        let rows = parse_token(tokens.next(), line, "row count")?;
        let cols = parse_token(tokens.next(), line, "column count")?;
        let entries = parse_token(tokens.next(), line, "entry count")?;
        if rows != cols {
            return Err(MatrixMarketError::NonSquare { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            entries,
        })
    }
}

/// Reads up to and including the size line.
fn read_preamble<R: BufRead>(
    lines: &mut NumberedLines<R>,
) -> Result<(MatrixMarketHeader, SizeLine), MatrixMarketError> {
    let mut header = None;
    while let Some((number, text)) = lines.next_line()? {
        let trimmed = text.trim();
        if is_skippable(trimmed) {
            if header.is_none() && MatrixMarketHeader::is_banner(trimmed) {
                header = Some(MatrixMarketHeader::parse(trimmed, number)?);
            }
            continue;
        }
        let parsed = header.ok_or(MatrixMarketError::MissingHeader)?;
        return Ok((parsed, SizeLine::parse(trimmed, number)?));
    }
    Err(if header.is_some() {
        MatrixMarketError::MissingSizeLine
    } else {
        MatrixMarketError::MissingHeader
    })
}

fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('%')
}

fn parse_token<T: FromStr>(
    token: Option<&str>,
    line: usize,
    field: &'static str,
) -> Result<T, MatrixMarketError> {
    let raw = token.ok_or(MatrixMarketError::MissingField { line, field })?;
    raw.parse().map_err(|_| MatrixMarketError::MalformedNumber {
        line,
        token: raw.to_owned(),
    })
}

/// Parses a 1-based index and converts it to 0-based.
fn parse_index(
    token: Option<&str>,
    line: usize,
    field: &'static str,
    size: usize,
) -> Result<usize, MatrixMarketError> {
    let index: usize = parse_token(token, line, field)?;
    if index == 0 || index > size {
        return Err(MatrixMarketError::IndexOutOfRange { line, index, size });
    }
    Ok(index - 1)
}

fn store_min<W, M>(matrix: &mut M, row: usize, col: usize, weight: W) -> Result<(), SparseError>
where
    W: Weight,
    M: SparseMatrix<W>,
{
    let value = matrix
        .get_element(row, col)
        .map_or(weight, |existing| existing.min(weight));
    matrix.set_element(row, col, value)
}
