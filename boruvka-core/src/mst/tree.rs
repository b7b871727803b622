//! Spanning-tree accumulation and weight totals.

use std::fmt;

use crate::{sparse::SparseMatrix, weight::Weight};

use super::{MstError, TreeEdge};

/// How accepted edges are stored in the output tree matrix.
///
/// The total weight divides the sum of stored entries by
/// [`TreeStorage::multiplicity`], so a tree matrix must only ever be filled
/// under one convention.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TreeStorage {
    /// Each edge is stored once, as `(source, destination)`.
    Directed,
    /// Each edge is stored in both directions.
    #[default]
    Symmetric,
}

impl TreeStorage {
    /// Number of matrix entries written per accepted edge.
    #[must_use]
    pub const fn multiplicity(self) -> usize {
        match self {
            Self::Directed => 1,
            Self::Symmetric => 2,
        }
    }

    /// Stable lowercase name for logs and command-line flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Symmetric => "symmetric",
        }
    }
}

impl fmt::Display for TreeStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sums the stored entries of `tree` and normalises by the storage convention.
///
/// # Examples
/// ```
/// use boruvka_core::{SequentialMatrix, SparseMatrix, TreeStorage, total_weight};
///
/// let mut tree = SequentialMatrix::<u32>::create(2, 2);
/// tree.set_element(0, 1, 4)?;
/// tree.set_element(1, 0, 4)?;
/// assert_eq!(total_weight(&tree, TreeStorage::Symmetric), 4);
/// # Ok::<(), boruvka_core::SparseError>(())
/// ```
#[must_use]
pub fn total_weight<W: Weight, M: SparseMatrix<W>>(tree: &M, storage: TreeStorage) -> i128 {
    let sum: i128 = tree.read_triplets().values().iter().map(|w| w.widen()).sum();
    // `multiplicity` is 1 or 2, so the cast and division are exact.
    sum / storage.multiplicity() as i128
}

/// Records merge edges into the caller's tree matrix.
pub(super) struct TreeAccumulator<'t, W, M> {
    tree: &'t mut M,
    storage: TreeStorage,
    edges: Vec<TreeEdge<W>>,
}

impl<'t, W: Weight, M: SparseMatrix<W>> TreeAccumulator<'t, W, M> {
    pub(super) fn new(tree: &'t mut M, storage: TreeStorage) -> Self {
        let capacity = tree.n_rows().saturating_sub(1);
        Self {
            tree,
            storage,
            edges: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn record(
        &mut self,
        source: usize,
        destination: usize,
        weight: W,
    ) -> Result<(), MstError> {
        self.tree.set_element(source, destination, weight)?;
        if self.storage == TreeStorage::Symmetric {
            self.tree.set_element(destination, source, weight)?;
        }
        self.edges
            .push(TreeEdge::canonical(source, destination, weight));
        Ok(())
    }

    pub(super) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(super) fn total_weight(&self) -> i128 {
        total_weight::<W, M>(&*self.tree, self.storage)
    }

    pub(super) fn into_edges(self) -> Vec<TreeEdge<W>> {
        let mut edges = self.edges;
        edges.sort_unstable();
        edges
    }
}
