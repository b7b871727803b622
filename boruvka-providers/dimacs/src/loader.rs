//! Loading `.gr` documents into sparse matrices.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use boruvka_core::{SparseMatrix, Weight};
use tracing::{debug, instrument};

use crate::{arcs::ArcList, errors::DimacsError};

/// Loads the `.gr` file at `path` into a new matrix.
///
/// # Errors
/// Returns [`DimacsError::Io`] when the file cannot be opened and any error
/// reported by [`try_from_reader`].
#[instrument(
    name = "dimacs.load",
    err,
    skip(path),
    fields(path = %path.as_ref().display()),
)]
pub fn try_from_path<W, M>(path: impl AsRef<Path>) -> Result<M, DimacsError>
where
    W: Weight + FromStr,
    M: SparseMatrix<W>,
{
    let file = File::open(path.as_ref()).map_err(|source| DimacsError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    try_from_reader(BufReader::new(file))
}

/// Loads a `.gr` document from `reader`.
///
/// Each arc becomes one directed entry. Parallel arcs collapse onto one cell
/// holding the smallest weight.
///
/// # Errors
/// Returns a [`DimacsError`] describing the first malformed line.
///
/// # Examples
/// ```
/// use boruvka_core::{SequentialMatrix, SparseMatrix};
/// use boruvka_providers_dimacs::try_from_reader;
///
/// let text = "p sp 3 3\na 1 2 4\na 1 2 2\na 3 1\n";
/// let graph: SequentialMatrix<u64> = try_from_reader(text.as_bytes())?;
/// assert_eq!(graph.get_element(0, 1), Some(2));
/// assert_eq!(graph.get_element(2, 0), Some(1));
/// # Ok::<(), boruvka_providers_dimacs::DimacsError>(())
/// ```
pub fn try_from_reader<W, M, R>(reader: R) -> Result<M, DimacsError>
where
    W: Weight + FromStr,
    M: SparseMatrix<W>,
    R: BufRead,
{
    let list = ArcList::<W>::read(reader)?;
    let mut matrix = M::create(list.nodes(), list.nodes());
    for &(source, target, weight) in list.arcs() {
        let value = matrix
            .get_element(source, target)
            .map_or(weight, |existing| existing.min(weight));
        matrix.set_element(source, target, value)?;
    }
    debug!(
        vertices = list.nodes(),
        arcs = list.arcs().len(),
        stored = matrix.nnz(),
        "dimacs graph loaded"
    );
    Ok(matrix)
}
