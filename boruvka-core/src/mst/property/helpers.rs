//! Shared helpers for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{MstSummary, SparseMatrix, TreeStorage, boruvka_mst};

use super::types::MstFixture;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Loads the fixture into a fresh matrix of backend `M`.
pub(super) fn build_graph<M: SparseMatrix<u32>>(fixture: &MstFixture) -> M {
    let mut graph = M::create(fixture.vertex_count, fixture.vertex_count);
    for &(row, col, weight) in &fixture.edges {
        graph
            .set_element(row, col, weight)
            .expect("generated entries must be in bounds");
    }
    graph
}

/// Runs the engine on backend `M` and returns the summary with the tree.
pub(super) fn run_engine<M: SparseMatrix<u32>>(
    fixture: &MstFixture,
    storage: TreeStorage,
) -> Result<(MstSummary<u32>, M), TestCaseError> {
    let graph: M = build_graph(fixture);
    let mut tree = M::create(fixture.vertex_count, fixture.vertex_count);
    let summary = boruvka_mst(&mut tree, &graph, storage).map_err(|e| {
        TestCaseError::fail(format!("boruvka_mst failed: {e} ({})", fixture.describe()))
    })?;
    Ok((summary, tree))
}

/// Lightest stored weight per undirected pair, ignoring self-loops.
pub(super) fn undirected_weights(fixture: &MstFixture) -> Vec<(usize, usize, u32)> {
    let mut pairs: Vec<(usize, usize, u32)> = fixture
        .edges
        .iter()
        .filter(|&&(row, col, _)| row != col)
        .map(|&(row, col, weight)| (row.min(col), row.max(col), weight))
        .collect();
    pairs.sort_unstable();
    pairs.dedup_by(|right, left| left.0 == right.0 && left.1 == right.1);
    pairs
}
