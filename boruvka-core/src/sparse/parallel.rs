//! Rayon-backed CPU backend.
//!
//! Rows are stored as independent ordered buckets so row reductions, combines
//! and triplet reads fan out across the Rayon pool with no shared mutable
//! state. Each call joins before returning, which gives the engine the
//! barrier it needs between phases.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{builder::Backend, error::SparseError, weight::Weight};

use super::{BinaryOp, Monoid, SparseMatrix, Triplets, check_same_shape};

/// Row-bucketed sparse matrix whose bulk operations run on Rayon.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParallelMatrix<W> {
    cols: usize,
    rows: Vec<BTreeMap<usize, W>>,
}

fn merge_rows<W: Weight>(
    left: &BTreeMap<usize, W>,
    right: &BTreeMap<usize, W>,
    op: BinaryOp<W>,
) -> BTreeMap<usize, W> {
    let mut merged = left.clone();
    for (&col, &value) in right {
        merged
            .entry(col)
            .and_modify(|existing| *existing = op(*existing, value))
            .or_insert(value);
    }
    merged
}

impl<W: Weight> SparseMatrix<W> for ParallelMatrix<W> {
    const BACKEND: Backend = Backend::Parallel;

    fn create(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            rows: vec![BTreeMap::new(); rows],
        }
    }

    fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn n_cols(&self) -> usize {
        self.cols
    }

    fn nnz(&self) -> usize {
        self.rows.par_iter().map(BTreeMap::len).sum()
    }

    fn set_element(&mut self, row: usize, col: usize, value: W) -> Result<(), SparseError> {
        let (rows, cols) = (self.rows.len(), self.cols);
        match self.rows.get_mut(row) {
            Some(bucket) if col < cols => {
                bucket.insert(col, value);
                Ok(())
            }
            _ => Err(SparseError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            }),
        }
    }

    fn get_element(&self, row: usize, col: usize) -> Option<W> {
        self.rows.get(row)?.get(&col).copied()
    }

    fn clear(&mut self) {
        self.rows.par_iter_mut().for_each(BTreeMap::clear);
    }

    fn read_triplets(&self) -> Triplets<W> {
        let entries: Vec<(usize, usize, W)> = self
            .rows
            .par_iter()
            .enumerate()
            .flat_map_iter(|(row, bucket)| bucket.iter().map(move |(&col, &value)| (row, col, value)))
            .collect();
        entries.into_iter().collect()
    }

    fn reduce_rows(&self, monoid: &Monoid<W>) -> Vec<W> {
        self.rows
            .par_iter()
            .map(|bucket| {
                bucket
                    .values()
                    .fold(monoid.identity(), |acc, &value| monoid.apply(acc, value))
            })
            .collect()
    }

    fn combine(left: &Self, right: &Self, op: BinaryOp<W>) -> Result<Self, SparseError> {
        check_same_shape(
            (left.rows.len(), left.cols),
            (right.rows.len(), right.cols),
        )?;
        let rows = left
            .rows
            .par_iter()
            .zip(right.rows.par_iter())
            .map(|(l, r)| merge_rows(l, r, op))
            .collect();
        Ok(Self {
            cols: left.cols,
            rows,
        })
    }

    fn transpose(&self) -> Self {
        let mut rows = vec![BTreeMap::new(); self.cols];
        for (row, bucket) in self.rows.iter().enumerate() {
            for (&col, &value) in bucket {
                if let Some(target) = rows.get_mut(col) {
                    target.insert(row, value);
                }
            }
        }
        Self {
            cols: self.rows.len(),
            rows,
        }
    }
}
