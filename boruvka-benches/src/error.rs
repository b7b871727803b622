//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark graphs so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use boruvka_core::{BoruvkaError, MstError, SparseError};

use crate::graph::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// Loading edges into a matrix failed.
    #[error("sparse matrix operation failed: {0}")]
    Sparse(#[from] SparseError),
    /// The engine rejected the benchmark graph.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Backend configuration failed.
    #[error("backend configuration failed: {0}")]
    Boruvka(#[from] BoruvkaError),
}
