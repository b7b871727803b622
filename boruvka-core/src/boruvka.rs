//! Orchestration entry point for the Boruvka library.
//!
//! Provides the [`Boruvka`] runtime handle, which owns the resolved backend
//! configuration, allocates the output tree and runs the engine, and the
//! [`BackendInfo`] description reported to callers.

use std::{fmt, num::NonZeroUsize};

use tracing::instrument;

use crate::{
    MstSummary, Result, SparseMatrix, TreeStorage, Weight, boruvka_mst, builder::Backend,
    error::BoruvkaError,
};

/// Identifies the backend a [`Boruvka`] instance executes on.
///
/// # Examples
/// ```
/// use boruvka_core::{Backend, BoruvkaBuilder};
///
/// let boruvka = BoruvkaBuilder::new()
///     .with_backend(Backend::Sequential)
///     .build()?;
/// assert_eq!(
///     boruvka.backend_info().to_string(),
///     "sequential ordered-map backend (1 thread)"
/// );
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BackendInfo {
    backend: Backend,
    threads: usize,
}

impl BackendInfo {
    /// Resolved backend.
    #[must_use]
    #[rustfmt::skip]
    pub fn backend(&self) -> Backend { self.backend }

    /// Worker threads the backend runs on.
    #[must_use]
    #[rustfmt::skip]
    pub fn threads(&self) -> usize { self.threads }
}

impl fmt::Display for BackendInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.threads == 1 { "" } else { "s" };
        match self.backend {
            Backend::Parallel => write!(
                f,
                "rayon cpu backend ({} thread{plural})",
                self.threads
            ),
            Backend::Auto | Backend::Sequential => write!(
                f,
                "sequential ordered-map backend ({} thread{plural})",
                self.threads
            ),
        }
    }
}

/// Output of [`Boruvka::run`]: the filled tree matrix and its summary.
#[derive(Debug)]
pub struct BoruvkaRun<W, M> {
    tree: M,
    summary: MstSummary<W>,
    backend: BackendInfo,
}

impl<W: Weight, M: SparseMatrix<W>> BoruvkaRun<W, M> {
    /// Tree matrix holding the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &M { &self.tree }

    /// Summary of the computed forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn summary(&self) -> &MstSummary<W> { &self.summary }

    /// Backend the run executed on.
    #[must_use]
    #[rustfmt::skip]
    pub fn backend(&self) -> BackendInfo { self.backend }

    /// Splits the run into its tree matrix and summary.
    #[must_use]
    pub fn into_parts(self) -> (M, MstSummary<W>) {
        (self.tree, self.summary)
    }
}

/// Entry point for computing minimum spanning forests.
///
/// The caller loads the graph into the matrix type matching
/// [`Boruvka::backend`]: [`crate::SequentialMatrix`] for
/// [`Backend::Sequential`] and `ParallelMatrix` for [`Backend::Parallel`];
/// any other pairing is rejected before the engine starts.
/// A pinned thread count scopes the parallel run to a dedicated Rayon pool.
///
/// # Examples
/// ```
/// use boruvka_core::{Backend, BoruvkaBuilder, SequentialMatrix, SparseMatrix};
///
/// let mut graph = SequentialMatrix::<u64>::create(3, 3);
/// graph.set_element(0, 1, 2)?;
/// graph.set_element(1, 2, 3)?;
///
/// let boruvka = BoruvkaBuilder::new()
///     .with_backend(Backend::Sequential)
///     .build()?;
/// let run = boruvka.run(&graph)?;
/// assert_eq!(run.summary().total_weight(), 5);
/// assert_eq!(run.tree().nnz(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Boruvka {
    backend: Backend,
    tree_storage: TreeStorage,
    threads: Option<NonZeroUsize>,
}

impl Boruvka {
    pub(crate) fn new(
        backend: Backend,
        tree_storage: TreeStorage,
        threads: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            backend,
            tree_storage,
            threads,
        }
    }

    /// Returns the resolved backend; never [`Backend::Auto`].
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Returns the tree storage convention used for runs.
    #[must_use]
    pub fn tree_storage(&self) -> TreeStorage {
        self.tree_storage
    }

    /// Describes the backend, including its effective worker count.
    #[must_use]
    pub fn backend_info(&self) -> BackendInfo {
        BackendInfo {
            backend: self.backend,
            threads: self.effective_threads(),
        }
    }

    #[cfg(feature = "cpu")]
    fn effective_threads(&self) -> usize {
        match (self.backend, self.threads) {
            (Backend::Parallel, Some(threads)) => threads.get(),
            (Backend::Parallel, None) => rayon::current_num_threads(),
            (Backend::Auto | Backend::Sequential, _) => 1,
        }
    }

    #[cfg(not(feature = "cpu"))]
    fn effective_threads(&self) -> usize {
        1
    }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// A tree matrix of the same backend is allocated for the result.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::BackendMismatch`] when `M` is not the matrix
    /// type of [`Boruvka::backend`], [`BoruvkaError::Mst`] when the engine
    /// rejects the input, and [`BoruvkaError::ThreadPool`] when a pinned
    /// worker pool cannot be created.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            backend = %self.backend,
            storage = %self.tree_storage,
            vertices = graph.n_rows(),
        ),
    )]
    pub fn run<W, M>(&self, graph: &M) -> Result<BoruvkaRun<W, M>>
    where
        W: Weight,
        M: SparseMatrix<W> + Send + Sync,
    {
        if M::BACKEND != self.backend {
            return Err(BoruvkaError::BackendMismatch {
                configured: self.backend,
                matrix: M::BACKEND,
            });
        }
        let mut tree = M::create(graph.n_rows(), graph.n_cols());
        let summary = self.dispatch(&mut tree, graph)?;
        Ok(BoruvkaRun {
            tree,
            summary,
            backend: self.backend_info(),
        })
    }

    #[cfg(feature = "cpu")]
    fn dispatch<W, M>(&self, tree: &mut M, graph: &M) -> Result<MstSummary<W>>
    where
        W: Weight,
        M: SparseMatrix<W> + Send + Sync,
    {
        let storage = self.tree_storage;
        match (self.backend, self.threads) {
            (Backend::Parallel, Some(threads)) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads.get())
                    .build()
                    .map_err(|err| BoruvkaError::ThreadPool {
                        message: err.to_string(),
                    })?;
                Ok(pool.install(|| boruvka_mst(tree, graph, storage))?)
            }
            _ => Ok(boruvka_mst(tree, graph, storage)?),
        }
    }

    #[cfg(not(feature = "cpu"))]
    fn dispatch<W, M>(&self, tree: &mut M, graph: &M) -> Result<MstSummary<W>>
    where
        W: Weight,
        M: SparseMatrix<W> + Send + Sync,
    {
        Ok(boruvka_mst(tree, graph, self.tree_storage)?)
    }
}
