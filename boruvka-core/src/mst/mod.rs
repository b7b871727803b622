//! Boruvka minimum spanning tree (MST) construction over a sparse matrix.
//!
//! Each round reduces every frontier row to its lightest entry, recovers the
//! destination of that entry, keeps the lightest candidate per component,
//! merges components along their candidates, flattens the union-find forest,
//! and contracts the frontier to the entries that still cross components.
//! The loop stops once the frontier is empty.

mod tree;
mod union_find;

use std::cmp::Ordering;

use tracing::{debug, info, instrument};

use crate::{
    error::MstError,
    sparse::{Monoid, SparseMatrix, Triplets, min},
    weight::Weight,
};

pub use self::tree::{TreeStorage, total_weight};
pub use self::union_find::DisjointComponents;

use self::tree::TreeAccumulator;

/// A single tree edge in canonical undirected form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TreeEdge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Weight> TreeEdge<W> {
    pub(crate) fn canonical(left: usize, right: usize, weight: W) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> W { self.weight }
}

impl<W: Weight> Ord for TreeEdge<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl<W: Weight> PartialOrd for TreeEdge<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The outcome of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MstSummary<W> {
    edges: Vec<TreeEdge<W>>,
    component_count: usize,
    rounds: usize,
    total_weight: i128,
    storage: TreeStorage,
}

impl<W: Weight> MstSummary<W> {
    /// Returns the accepted edges sorted by `(weight, source, target)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge<W>] { &self.edges }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of contraction rounds executed.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> usize { self.rounds }

    /// Returns the total weight read back from the tree matrix.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> i128 { self.total_weight }

    /// Returns the storage convention used for the tree matrix.
    #[must_use]
    #[rustfmt::skip]
    pub fn storage(&self) -> TreeStorage { self.storage }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Lightest edge leaving a component during one round.
#[derive(Clone, Copy, Debug)]
struct CandidateEdge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Weight> CandidateEdge<W> {
    /// Strict total order over undirected edges; keeps the selection graph
    /// free of cycles longer than two.
    fn key(&self) -> (W, usize, usize) {
        (
            self.weight,
            self.source.min(self.target),
            self.source.max(self.target),
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum EngineState {
    Active,
    Terminated,
}

/// Computes a minimum spanning forest of `graph` into `tree`.
///
/// `graph` is read as an undirected adjacency matrix: it is combined with its
/// transpose (overlaps keep the lighter weight) and self-loops are dropped
/// before the first round, so an input that stores only one direction per
/// edge is accepted. Accepted edges are written to `tree` according to
/// `storage`.
///
/// # Errors
///
/// Returns an error when:
/// - `graph` is not square, or `tree` does not have the same shape
///   ([`MstError::InvalidArgument`]);
/// - `tree` already stores entries ([`MstError::TreeNotEmpty`]);
/// - a graph entry stores the sentinel weight ([`MstError::ReservedWeight`]).
///
/// Nothing is written to `tree` when validation fails.
///
/// # Examples
/// ```
/// use boruvka_core::{SequentialMatrix, SparseMatrix, TreeStorage, boruvka_mst};
///
/// let mut graph = SequentialMatrix::<u32>::create(3, 3);
/// graph.set_element(0, 1, 1)?;
/// graph.set_element(1, 2, 2)?;
/// graph.set_element(0, 2, 5)?;
/// let mut tree = SequentialMatrix::create(3, 3);
///
/// let summary = boruvka_mst(&mut tree, &graph, TreeStorage::Symmetric)?;
/// assert_eq!(summary.total_weight(), 3);
/// assert_eq!(summary.edges().len(), 2);
/// assert!(summary.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "engine.run",
    err,
    skip(tree, graph),
    fields(vertices = graph.n_rows(), edges = graph.nnz(), storage = %storage),
)]
pub fn boruvka_mst<W, M>(
    tree: &mut M,
    graph: &M,
    storage: TreeStorage,
) -> Result<MstSummary<W>, MstError>
where
    W: Weight,
    M: SparseMatrix<W>,
{
    let vertex_count = validate_shapes(tree, graph)?;
    if !tree.is_empty() {
        return Err(MstError::TreeNotEmpty { nnz: tree.nnz() });
    }

    let frontier = initial_frontier(graph, vertex_count)?;
    let mut engine = Engine {
        vertex_count,
        components: DisjointComponents::new(vertex_count),
        frontier,
        accumulator: TreeAccumulator::new(tree, storage),
        rounds: 0,
        state: EngineState::Active,
    };
    engine.run()?;

    let component_count = engine.components.component_count();
    let rounds = engine.rounds;
    let total_weight = engine.accumulator.total_weight();
    let edges = engine.accumulator.into_edges();
    info!(
        rounds,
        tree_edges = edges.len(),
        components = component_count,
        total_weight = %total_weight,
        "minimum spanning forest complete"
    );
    Ok(MstSummary {
        edges,
        component_count,
        rounds,
        total_weight,
        storage,
    })
}

fn validate_shapes<W: Weight, M: SparseMatrix<W>>(tree: &M, graph: &M) -> Result<usize, MstError> {
    let n = graph.n_rows();
    if graph.n_cols() != n || tree.n_rows() != n || tree.n_cols() != n {
        return Err(MstError::InvalidArgument {
            graph_rows: graph.n_rows(),
            graph_cols: graph.n_cols(),
            tree_rows: tree.n_rows(),
            tree_cols: tree.n_cols(),
        });
    }
    Ok(n)
}

/// Symmetrises the graph and drops self-loops.
fn initial_frontier<W: Weight, M: SparseMatrix<W>>(
    graph: &M,
    vertex_count: usize,
) -> Result<M, MstError> {
    let entries = graph.read_triplets();
    if let Some((row, col, _)) = entries.iter().find(|&(_, _, w)| w == W::SENTINEL) {
        return Err(MstError::ReservedWeight { row, col });
    }
    let symmetric = M::combine(graph, &graph.transpose(), min)?;
    contract(
        &symmetric.read_triplets(),
        &DisjointComponents::new(vertex_count),
        vertex_count,
    )
}

/// Keeps the entries whose endpoints belong to different components.
fn contract<W: Weight, M: SparseMatrix<W>>(
    entries: &Triplets<W>,
    components: &DisjointComponents,
    vertex_count: usize,
) -> Result<M, MstError> {
    let mut next = M::create(vertex_count, vertex_count);
    for (row, col, weight) in entries.iter() {
        if components.find(row) != components.find(col) {
            next.set_element(row, col, weight)?;
        }
    }
    Ok(next)
}

/// For each row, the lowest column among entries equal to the row minimum.
fn recover_destinations<W: Weight>(edge_w: &[W], entries: &Triplets<W>) -> Vec<Option<usize>> {
    let mut edge_dst = vec![None; edge_w.len()];
    for (row, col, weight) in entries.iter() {
        if edge_w.get(row) != Some(&weight) {
            continue;
        }
        if let Some(slot) = edge_dst.get_mut(row) {
            if slot.is_none_or(|current| col < current) {
                *slot = Some(col);
            }
        }
    }
    edge_dst
}

struct Engine<'t, W, M> {
    vertex_count: usize,
    components: DisjointComponents,
    frontier: M,
    accumulator: TreeAccumulator<'t, W, M>,
    rounds: usize,
    state: EngineState,
}

impl<W: Weight, M: SparseMatrix<W>> Engine<'_, W, M> {
    fn run(&mut self) -> Result<(), MstError> {
        // Every round with a non-empty frontier merges at least once.
        let limit = self.vertex_count;
        while self.state == EngineState::Active {
            if self.frontier.is_empty() {
                self.state = EngineState::Terminated;
                continue;
            }
            if self.rounds >= limit {
                return Err(MstError::RoundLimitExceeded {
                    rounds: self.rounds,
                    limit,
                });
            }
            self.round()?;
        }
        Ok(())
    }

    fn round(&mut self) -> Result<(), MstError> {
        let edge_w = self.frontier.reduce_rows(&Monoid::min());
        let entries = self.frontier.read_triplets();
        let edge_dst = recover_destinations(&edge_w, &entries);
        let candidates = self.select_candidates(&edge_w, &edge_dst);
        let merges = self.merge_candidates(&candidates)?;
        let passes = self.components.flatten();
        let next: M = contract(&entries, &self.components, self.vertex_count)?;

        self.rounds = self.rounds.saturating_add(1);
        debug!(
            round = self.rounds,
            frontier = entries.len(),
            next_frontier = next.nnz(),
            merges,
            flatten_passes = passes,
            tree_edges = self.accumulator.edge_count(),
            "contraction round complete"
        );
        self.frontier = next;
        Ok(())
    }

    fn select_candidates(
        &self,
        edge_w: &[W],
        edge_dst: &[Option<usize>],
    ) -> Vec<Option<CandidateEdge<W>>> {
        let mut best: Vec<Option<CandidateEdge<W>>> = vec![None; self.vertex_count];
        for (vertex, (&weight, &destination)) in edge_w.iter().zip(edge_dst).enumerate() {
            let Some(target) = destination else {
                continue;
            };
            if weight == W::SENTINEL {
                continue;
            }
            let candidate = CandidateEdge {
                source: vertex,
                target,
                weight,
            };
            let component = self.components.find(vertex);
            if let Some(slot) = best.get_mut(component) {
                if slot.is_none_or(|current| candidate.key() < current.key()) {
                    *slot = Some(candidate);
                }
            }
        }
        best
    }

    fn merge_candidates(
        &mut self,
        candidates: &[Option<CandidateEdge<W>>],
    ) -> Result<usize, MstError> {
        let mut merges = 0_usize;
        for (component, candidate) in candidates.iter().enumerate() {
            let Some(edge) = candidate else {
                continue;
            };
            if self.components.merge(component, edge.target)? {
                self.accumulator
                    .record(edge.source, edge.target, edge.weight)?;
                merges = merges.saturating_add(1);
            }
        }
        Ok(merges)
    }
}

#[cfg(test)]
mod property;
