//! Property 2: Structural invariant verification.
//!
//! For any forest produced by the engine, verifies:
//!
//! - **Canonical form**: `source < target` for every edge.
//! - **Provenance**: every edge is an input edge carrying the lighter of its
//!   stored directions.
//! - **Acyclicity**: union-find never sees an edge close a cycle.
//! - **Edge count**: `V - C` edges for `C` components.
//! - **Connectivity**: the forest has exactly as many components as the
//!   input graph.
//! - **Storage**: the tree matrix holds one entry per edge and direction.

use std::collections::BTreeMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SequentialMatrix, SparseMatrix, TreeEdge, TreeStorage};

use super::helpers::{find_root, run_engine, undirected_weights};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let (summary, tree) =
        run_engine::<SequentialMatrix<u32>>(fixture, TreeStorage::Symmetric)?;
    let edges = summary.edges();

    validate_canonical_form(edges)?;
    validate_provenance(fixture, edges)?;
    validate_acyclicity(fixture.vertex_count, edges)?;
    validate_edge_count(fixture.vertex_count, edges.len(), summary.component_count())?;
    validate_connectivity(fixture, summary.component_count())?;

    let expected_nnz = edges.len() * TreeStorage::Symmetric.multiplicity();
    if tree.nnz() != expected_nnz {
        return Err(TestCaseError::fail(format!(
            "tree stores {} entries, expected {expected_nnz} ({})",
            tree.nnz(),
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Generic edge validator returning early with the first failure message.
fn validate_edges<F>(edges: &[TreeEdge<u32>], mut predicate: F) -> TestCaseResult
where
    F: FnMut(usize, &TreeEdge<u32>) -> Option<String>,
{
    for (i, edge) in edges.iter().enumerate() {
        if let Some(msg) = predicate(i, edge) {
            return Err(TestCaseError::fail(msg));
        }
    }
    Ok(())
}

fn validate_canonical_form(edges: &[TreeEdge<u32>]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        (edge.source() >= edge.target()).then(|| {
            format!(
                "edge {i}: not canonical ({} >= {})",
                edge.source(),
                edge.target(),
            )
        })
    })
}

fn validate_provenance(fixture: &MstFixture, edges: &[TreeEdge<u32>]) -> TestCaseResult {
    let lightest: BTreeMap<(usize, usize), u32> = undirected_weights(fixture)
        .into_iter()
        .map(|(lo, hi, weight)| ((lo, hi), weight))
        .collect();
    validate_edges(edges, |i, edge| {
        match lightest.get(&(edge.source(), edge.target())) {
            Some(&weight) if weight == edge.weight() => None,
            Some(&weight) => Some(format!(
                "edge {i}: weight {} differs from lightest input weight {weight}",
                edge.weight(),
            )),
            None => Some(format!(
                "edge {i}: ({}, {}) is not an input edge",
                edge.source(),
                edge.target(),
            )),
        }
    })
}

fn validate_acyclicity(vertex_count: usize, edges: &[TreeEdge<u32>]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    validate_edges(edges, |i, edge| {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Some(format!(
                "edge {i}: ({}, {}) closes a cycle",
                edge.source(),
                edge.target(),
            ));
        }
        parent[left] = right;
        None
    })
}

fn validate_edge_count(vertex_count: usize, edge_count: usize, components: usize) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(components);
    if edge_count != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {edge_count} != V - C = {vertex_count} - {components} = {expected}",
        )));
    }
    Ok(())
}

fn validate_connectivity(fixture: &MstFixture, components: usize) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut input_components = fixture.vertex_count;
    for (lo, hi, _) in undirected_weights(fixture) {
        let left = find_root(&mut parent, lo);
        let right = find_root(&mut parent, hi);
        if left != right {
            parent[left] = right;
            input_components -= 1;
        }
    }
    if components != input_components {
        return Err(TestCaseError::fail(format!(
            "forest has {components} components but the input has {input_components} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
