//! Builder utilities for configuring Boruvka orchestration.
//!
//! Exposes the backend selection surface and the validation applied before
//! constructing [`Boruvka`] instances.

use std::{fmt, num::NonZeroUsize};

use crate::{Result, TreeStorage, boruvka::Boruvka, error::BoruvkaError};

/// Indicates which sparse-matrix backend [`Boruvka`] runs on.
///
/// `Auto` resolves deterministically: it selects `Parallel` when the `cpu`
/// feature is compiled in and `Sequential` otherwise, so behaviour is stable
/// for a given build.
///
/// # Examples
/// ```
/// use boruvka_core::Backend;
///
/// assert_eq!(Backend::Sequential.resolve(), Some(Backend::Sequential));
/// assert_ne!(Backend::Auto.resolve(), Some(Backend::Auto));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Let the library pick the best backend compiled into this build.
    #[default]
    Auto,
    /// The ordered-map reference backend on the calling thread.
    Sequential,
    /// The Rayon backend (feature `cpu`).
    Parallel,
}

impl Backend {
    /// Resolves `Auto` and reports whether the backend is compiled in.
    ///
    /// Returns `None` when the backend is unavailable in this build.
    #[must_use]
    pub const fn resolve(self) -> Option<Self> {
        match self {
            Self::Sequential => Some(Self::Sequential),
            #[cfg(feature = "cpu")]
            Self::Auto | Self::Parallel => Some(Self::Parallel),
            #[cfg(not(feature = "cpu"))]
            Self::Auto => Some(Self::Sequential),
            #[cfg(not(feature = "cpu"))]
            Self::Parallel => None,
        }
    }

    /// Stable lowercase name for logs, file names and command-line flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use boruvka_core::{Backend, BoruvkaBuilder, TreeStorage};
///
/// let boruvka = BoruvkaBuilder::new()
///     .with_backend(Backend::Sequential)
///     .with_tree_storage(TreeStorage::Directed)
///     .build()?;
/// assert_eq!(boruvka.backend(), Backend::Sequential);
/// assert_eq!(boruvka.tree_storage(), TreeStorage::Directed);
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoruvkaBuilder {
    backend: Backend,
    tree_storage: TreeStorage,
    threads: Option<usize>,
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the backend.
    #[must_use]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Returns the configured backend before resolution.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Selects how accepted edges are stored in the tree matrix.
    #[must_use]
    pub fn with_tree_storage(mut self, storage: TreeStorage) -> Self {
        self.tree_storage = storage;
        self
    }

    /// Returns the configured tree storage convention.
    #[must_use]
    pub fn tree_storage(&self) -> TreeStorage {
        self.tree_storage
    }

    /// Pins the worker count of the parallel backend.
    ///
    /// Without a pin the parallel backend uses Rayon's global pool. The
    /// sequential backend always runs on the calling thread.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::BoruvkaBuilder;
    ///
    /// let builder = BoruvkaBuilder::new().with_threads(4);
    /// assert_eq!(builder.threads(), Some(4));
    /// ```
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Returns the pinned worker count, if any.
    #[must_use]
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validates the configuration and constructs a [`Boruvka`] instance.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::InvalidThreadCount`] when a worker count of
    /// zero was pinned, and [`BoruvkaError::BackendUnavailable`] when the
    /// requested backend is not compiled into this build.
    pub fn build(self) -> Result<Boruvka> {
        let threads = self
            .threads
            .map(|got| NonZeroUsize::new(got).ok_or(BoruvkaError::InvalidThreadCount { got }))
            .transpose()?;
        let backend = self
            .backend
            .resolve()
            .ok_or(BoruvkaError::BackendUnavailable {
                requested: self.backend,
            })?;
        Ok(Boruvka::new(backend, self.tree_storage, threads))
    }
}
