//! Sparse-matrix capability consumed by the Boruvka engine.
//!
//! The engine never touches storage directly. It creates matrices, inserts
//! elements, combines two matrices element-wise, reduces every row with a
//! monoid, and reads all stored entries back as parallel `(row, col, value)`
//! arrays. Any backend that satisfies [`SparseMatrix`] can drive it; two ship
//! with the crate:
//!
//! - [`SequentialMatrix`], an ordered-map reference backend.
//! - `ParallelMatrix` (feature `cpu`), which runs row reductions, combines and
//!   triplet reads on Rayon.

#[cfg(feature = "cpu")]
mod parallel;
mod sequential;

#[cfg(feature = "cpu")]
pub use self::parallel::ParallelMatrix;
pub use self::sequential::SequentialMatrix;

use crate::{builder::Backend, error::SparseError, weight::Weight};

/// Associative operator used to merge overlapping entries in
/// [`SparseMatrix::combine`].
pub type BinaryOp<W> = fn(W, W) -> W;

/// Keeps the left operand.
#[must_use]
pub fn first<W>(left: W, _right: W) -> W {
    left
}

/// Keeps the smaller operand.
#[must_use]
pub fn min<W: Ord>(left: W, right: W) -> W {
    left.min(right)
}

/// Associative operation paired with its identity element.
///
/// # Examples
/// ```
/// use boruvka_core::{Monoid, Weight};
///
/// let monoid = Monoid::<u32>::min();
/// assert_eq!(monoid.identity(), <u32 as Weight>::SENTINEL);
/// assert_eq!(monoid.apply(4, 9), 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Monoid<W> {
    identity: W,
    op: BinaryOp<W>,
}

impl<W: Weight> Monoid<W> {
    /// Creates a monoid from an identity element and an associative operator.
    #[must_use]
    pub const fn new(identity: W, op: BinaryOp<W>) -> Self {
        Self { identity, op }
    }

    /// Minimum monoid whose identity is the "no edge" sentinel.
    #[must_use]
    pub fn min() -> Self {
        Self::new(W::SENTINEL, min)
    }

    /// Returns the identity element, produced for rows with no entries.
    #[must_use]
    pub const fn identity(&self) -> W {
        self.identity
    }

    /// Applies the operator.
    #[must_use]
    pub fn apply(&self, left: W, right: W) -> W {
        (self.op)(left, right)
    }
}

/// All stored entries of a matrix as three parallel sequences.
///
/// Both shipped backends produce entries in row-major order; callers must not
/// rely on that for other backends.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Triplets<W> {
    rows: Vec<usize>,
    cols: Vec<usize>,
    values: Vec<W>,
}

impl<W: Copy> Triplets<W> {
    /// Creates an empty triplet buffer with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends one entry to all three sequences.
    pub fn push(&mut self, row: usize, col: usize, value: W) {
        self.rows.push(row);
        self.cols.push(col);
        self.values.push(value);
    }

    /// Row indices.
    #[must_use]
    #[rustfmt::skip]
    pub fn rows(&self) -> &[usize] { &self.rows }

    /// Column indices.
    #[must_use]
    #[rustfmt::skip]
    pub fn cols(&self) -> &[usize] { &self.cols }

    /// Stored values.
    #[must_use]
    #[rustfmt::skip]
    pub fn values(&self) -> &[W] { &self.values }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no entries were read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(row, col, value)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.values)
            .map(|((&row, &col), &value)| (row, col, value))
    }
}

impl<W: Copy> FromIterator<(usize, usize, W)> for Triplets<W> {
    fn from_iter<I: IntoIterator<Item = (usize, usize, W)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut triplets = Self::with_capacity(iter.size_hint().0);
        for (row, col, value) in iter {
            triplets.push(row, col, value);
        }
        triplets
    }
}

/// Sparse weighted matrix whose absent entries read as the sentinel.
///
/// Every call is blocking: when it returns, its output is fully materialised.
///
/// # Examples
/// ```
/// use boruvka_core::{Monoid, SequentialMatrix, SparseMatrix};
///
/// let mut matrix = SequentialMatrix::<u32>::create(2, 2);
/// matrix.set_element(0, 1, 5)?;
/// matrix.set_element(1, 0, 3)?;
/// assert_eq!(matrix.reduce_rows(&Monoid::min()), vec![5, 3]);
/// assert_eq!(matrix.read_triplets().len(), 2);
/// # Ok::<(), boruvka_core::SparseError>(())
/// ```
pub trait SparseMatrix<W: Weight>: Sized {
    /// Backend this matrix type executes on; never [`Backend::Auto`].
    const BACKEND: Backend;

    /// Creates an empty `rows x cols` matrix filled with the sentinel.
    fn create(rows: usize, cols: usize) -> Self;

    /// Number of rows.
    fn n_rows(&self) -> usize;

    /// Number of columns.
    fn n_cols(&self) -> usize;

    /// Number of stored entries.
    fn nnz(&self) -> usize;

    /// Returns `true` when no entries are stored.
    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }

    /// Value reported for absent entries.
    fn fill_value(&self) -> W {
        W::SENTINEL
    }

    /// Inserts or overwrites one entry.
    ///
    /// # Errors
    /// Returns [`SparseError::OutOfBounds`] when the index lies outside the
    /// matrix.
    fn set_element(&mut self, row: usize, col: usize, value: W) -> Result<(), SparseError>;

    /// Returns the stored value, or `None` when the entry is absent.
    fn get_element(&self, row: usize, col: usize) -> Option<W>;

    /// Removes every stored entry, keeping the shape.
    fn clear(&mut self);

    /// Reads every stored entry.
    fn read_triplets(&self) -> Triplets<W>;

    /// Reduces each row with `monoid`; rows with no entries yield its identity.
    fn reduce_rows(&self, monoid: &Monoid<W>) -> Vec<W>;

    /// Element-wise union of `left` and `right`, merging overlaps with `op`.
    ///
    /// # Errors
    /// Returns [`SparseError::ShapeMismatch`] when the operands differ in
    /// shape.
    fn combine(left: &Self, right: &Self, op: BinaryOp<W>) -> Result<Self, SparseError>;

    /// Returns the transposed matrix.
    fn transpose(&self) -> Self;
}

pub(crate) fn check_bounds(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), SparseError> {
    if row >= rows || col >= cols {
        return Err(SparseError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

pub(crate) fn check_same_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SparseError> {
    if left != right {
        return Err(SparseError::ShapeMismatch {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        });
    }
    Ok(())
}
