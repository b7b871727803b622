use std::{io, path::PathBuf};

use boruvka_core::SparseError;
use thiserror::Error;

/// Errors raised while loading a Matrix Market file.
///
/// Line numbers are 1-based and count every physical line, comments
/// included.
#[derive(Debug, Error)]
pub enum MatrixMarketError {
    #[error("failed to open `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("missing `%%MatrixMarket` header")]
    MissingHeader,
    #[error("line {line}: only the `matrix coordinate` format is supported, found `{found}`")]
    UnsupportedFormat { line: usize, found: String },
    #[error("line {line}: unsupported field type `{found}`")]
    UnsupportedField { line: usize, found: String },
    #[error("line {line}: unsupported symmetry type `{found}`")]
    UnsupportedSymmetry { line: usize, found: String },
    #[error("missing size line")]
    MissingSizeLine,
    #[error("matrix must be square, found {rows}x{cols}")]
    NonSquare { rows: usize, cols: usize },
    #[error("expected {expected} entries but the file ended after {found}")]
    InsufficientData { expected: usize, found: usize },
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: malformed number `{token}`")]
    MalformedNumber { line: usize, token: String },
    #[error("line {line}: index {index} outside 1..={size}")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        size: usize,
    },
    #[error(transparent)]
    Sparse(#[from] SparseError),
}
