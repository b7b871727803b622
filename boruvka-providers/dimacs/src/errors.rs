use std::{io, path::PathBuf};

use boruvka_core::SparseError;
use thiserror::Error;

/// Errors raised while loading or cleaning a DIMACS graph.
#[derive(Debug, Error)]
pub enum DimacsError {
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
    #[error("failed to write cleaned graph: {0}")]
    Write(#[source] io::Error),
    #[error("missing `p sp <nodes> <arcs>` problem line")]
    MissingProblemLine,
    #[error("line {line}: unsupported problem type `{found}`")]
    UnsupportedProblem { line: usize, found: String },
    #[error("line {line}: unexpected `{tag}` record")]
    UnexpectedRecord { line: usize, tag: String },
    #[error("expected {expected} arcs but the file ended after {found}")]
    InsufficientArcs { expected: usize, found: usize },
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: malformed number `{token}`")]
    MalformedNumber { line: usize, token: String },
    #[error("line {line}: node {index} outside 1..={nodes}")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        nodes: usize,
    },
    #[error(transparent)]
    Sparse(#[from] SparseError),
}
