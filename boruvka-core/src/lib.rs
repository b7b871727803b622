//! Boruvka core library.
//!
//! Computes minimum spanning trees (forests, for disconnected inputs) with a
//! Boruvka contraction loop expressed purely in terms of the
//! [`SparseMatrix`] capability: element-wise combine, per-row reduction and
//! bulk triplet reads.
//!
//! # Tie-breaking
//!
//! Destination recovery picks the lowest destination column among the
//! minimum-weight entries of a row, and every component keeps the candidate
//! with the smallest `(weight, lo, hi)` key. The key is a strict total order
//! over undirected edges, so results do not depend on the order in which a
//! backend produces its triplets.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod boruvka;
mod builder;
pub mod display;
mod error;
mod mst;
pub mod sparse;
#[cfg(test)]
pub(crate) mod test_utils;
mod weight;

pub use crate::{
    boruvka::{BackendInfo, Boruvka, BoruvkaRun},
    builder::{Backend, BoruvkaBuilder},
    error::{
        BoruvkaError, BoruvkaErrorCode, MstError, MstErrorCode, Result, SparseError,
        SparseErrorCode,
    },
    mst::{DisjointComponents, MstSummary, TreeEdge, TreeStorage, boruvka_mst, total_weight},
    sparse::{Monoid, SequentialMatrix, SparseMatrix, Triplets},
    weight::Weight,
};

#[cfg(feature = "cpu")]
pub use crate::sparse::ParallelMatrix;
