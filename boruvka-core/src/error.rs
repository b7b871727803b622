//! Error types for the Boruvka core library.
//!
//! Defines error enums exposed by the public API, their stable machine-readable
//! codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::builder::Backend;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::SparseMatrix`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SparseError {
    /// An element index fell outside the matrix shape.
    #[error("element ({row}, {col}) is outside a {rows}x{cols} matrix")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the matrix.
        rows: usize,
        /// Number of columns in the matrix.
        cols: usize,
    },
    /// Two operands of an element-wise operation had different shapes.
    #[error("shape mismatch: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}")]
    ShapeMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SparseError`] variants.
    enum SparseErrorCode for SparseError {
        /// An element index fell outside the matrix shape.
        OutOfBounds => OutOfBounds { .. } => "SPARSE_OUT_OF_BOUNDS",
        /// Two operands of an element-wise operation had different shapes.
        ShapeMismatch => ShapeMismatch { .. } => "SPARSE_SHAPE_MISMATCH",
    }
}

/// Errors returned while computing a minimum spanning tree/forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The graph is not square or the tree matrix does not share its shape.
    #[error(
        "invalid argument: graph is {graph_rows}x{graph_cols} and tree is \
         {tree_rows}x{tree_cols}; both must be the same square shape"
    )]
    InvalidArgument {
        /// Rows of the input graph.
        graph_rows: usize,
        /// Columns of the input graph.
        graph_cols: usize,
        /// Rows of the output tree matrix.
        tree_rows: usize,
        /// Columns of the output tree matrix.
        tree_cols: usize,
    },
    /// The output tree matrix already held entries.
    #[error("tree matrix must start empty but holds {nnz} entries")]
    TreeNotEmpty {
        /// Number of stored entries found in the tree matrix.
        nnz: usize,
    },
    /// A graph entry stored the reserved "no edge" sentinel as its weight.
    #[error("edge ({row}, {col}) carries the reserved sentinel weight")]
    ReservedWeight {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },
    /// A sparse-matrix primitive failed.
    #[error("sparse matrix operation failed: {source}")]
    Sparse {
        /// Underlying capability error.
        #[from]
        source: SparseError,
    },
    /// The round loop ran longer than any correct contraction can.
    #[error("contraction did not converge after {rounds} rounds (limit {limit})")]
    RoundLimitExceeded {
        /// Rounds executed before the loop was aborted.
        rounds: usize,
        /// Maximum rounds permitted for the graph.
        limit: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("MST invariant violated: {invariant} (index {index})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The vertex or component index that violated the invariant.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph is not square or the tree matrix does not share its shape.
        InvalidArgument => InvalidArgument { .. } => "MST_INVALID_ARGUMENT",
        /// The output tree matrix already held entries.
        TreeNotEmpty => TreeNotEmpty { .. } => "MST_TREE_NOT_EMPTY",
        /// A graph entry stored the reserved sentinel weight.
        ReservedWeight => ReservedWeight { .. } => "MST_RESERVED_WEIGHT",
        /// A sparse-matrix primitive failed.
        Sparse => Sparse { .. } => "MST_SPARSE_FAILURE",
        /// The round loop ran longer than any correct contraction can.
        RoundLimitExceeded => RoundLimitExceeded { .. } => "MST_ROUND_LIMIT_EXCEEDED",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

impl MstError {
    /// Retrieve the inner [`SparseErrorCode`] when a primitive failed.
    #[must_use]
    pub const fn sparse_code(&self) -> Option<SparseErrorCode> {
        match self {
            Self::Sparse { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// Error type produced when constructing or running [`crate::Boruvka`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BoruvkaError {
    /// The requested backend is not compiled into the current build.
    #[error("the requested backend {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Backend that could not be satisfied by the current build.
        requested: Backend,
    },
    /// The graph's matrix type belongs to a different backend than the one
    /// configured.
    #[error("configured for the {configured} backend but the graph is a {matrix} matrix")]
    BackendMismatch {
        /// Backend resolved by the builder.
        configured: Backend,
        /// Backend of the matrix type passed to the run.
        matrix: Backend,
    },
    /// A worker thread count of zero was requested.
    #[error("thread count must be at least 1 (got {got})")]
    InvalidThreadCount {
        /// The invalid thread count supplied by the caller.
        got: usize,
    },
    /// The worker pool for the parallel backend could not be created.
    #[error("failed to build worker pool: {message}")]
    ThreadPool {
        /// Description reported by the pool builder.
        message: String,
    },
    /// The engine rejected the input or failed while running.
    #[error("minimum spanning tree computation failed: {source}")]
    Mst {
        /// Underlying engine error.
        #[from]
        source: MstError,
    },
}

define_error_codes! {
    /// Stable codes describing [`BoruvkaError`] variants.
    enum BoruvkaErrorCode for BoruvkaError {
        /// The requested backend is not compiled into the current build.
        BackendUnavailable => BackendUnavailable { .. } => "BORUVKA_BACKEND_UNAVAILABLE",
        /// The graph's matrix type does not match the configured backend.
        BackendMismatch => BackendMismatch { .. } => "BORUVKA_BACKEND_MISMATCH",
        /// A worker thread count of zero was requested.
        InvalidThreadCount => InvalidThreadCount { .. } => "BORUVKA_INVALID_THREAD_COUNT",
        /// The worker pool could not be created.
        ThreadPool => ThreadPool { .. } => "BORUVKA_THREAD_POOL",
        /// The engine rejected the input or failed while running.
        MstFailure => Mst { .. } => "BORUVKA_MST_FAILURE",
    }
}

impl BoruvkaError {
    /// Retrieve the inner [`MstErrorCode`] when the engine produced the error.
    #[must_use]
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Mst { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the orchestration API.
pub type Result<T> = core::result::Result<T, BoruvkaError>;
