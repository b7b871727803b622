//! Ordered-map reference backend.
//!
//! Entries live in a single `BTreeMap` keyed by `(row, col)`, so every
//! operation is sequential and triplets come back in row-major order. The
//! backend exists to pin down the capability's semantics for tests and for
//! hosts without a parallel runtime.

use std::collections::BTreeMap;

use crate::{builder::Backend, error::SparseError, weight::Weight};

use super::{BinaryOp, Monoid, SparseMatrix, Triplets, check_bounds, check_same_shape};

/// Sequential sparse matrix backed by an ordered map.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SequentialMatrix<W> {
    rows: usize,
    cols: usize,
    entries: BTreeMap<(usize, usize), W>,
}

impl<W: Weight> SparseMatrix<W> for SequentialMatrix<W> {
    const BACKEND: Backend = Backend::Sequential;

    fn create(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: BTreeMap::new(),
        }
    }

    fn n_rows(&self) -> usize {
        self.rows
    }

    fn n_cols(&self) -> usize {
        self.cols
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn set_element(&mut self, row: usize, col: usize, value: W) -> Result<(), SparseError> {
        check_bounds(row, col, self.rows, self.cols)?;
        self.entries.insert((row, col), value);
        Ok(())
    }

    fn get_element(&self, row: usize, col: usize) -> Option<W> {
        self.entries.get(&(row, col)).copied()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn read_triplets(&self) -> Triplets<W> {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
            .collect()
    }

    fn reduce_rows(&self, monoid: &Monoid<W>) -> Vec<W> {
        let mut reduced = vec![monoid.identity(); self.rows];
        for (&(row, _), &value) in &self.entries {
            if let Some(slot) = reduced.get_mut(row) {
                *slot = monoid.apply(*slot, value);
            }
        }
        reduced
    }

    fn combine(left: &Self, right: &Self, op: BinaryOp<W>) -> Result<Self, SparseError> {
        check_same_shape((left.rows, left.cols), (right.rows, right.cols))?;
        let mut entries = left.entries.clone();
        for (&key, &value) in &right.entries {
            entries
                .entry(key)
                .and_modify(|existing| *existing = op(*existing, value))
                .or_insert(value);
        }
        Ok(Self {
            rows: left.rows,
            cols: left.cols,
            entries,
        })
    }

    fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            entries: self
                .entries
                .iter()
                .map(|(&(row, col), &value)| ((col, row), value))
                .collect(),
        }
    }
}
