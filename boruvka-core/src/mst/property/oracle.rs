//! Sequential Kruskal oracle for MST property verification.
//!
//! A simple, trusted reference. Edges are sorted by `(weight, lo, hi)`, the
//! same key the engine breaks ties with, so on inputs with unique weights the
//! accepted edge lists must match exactly.

use super::helpers::{find_root, undirected_weights};
use super::types::MstFixture;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the forest.
    pub total_weight: i128,
    /// Accepted edges as `(lo, hi, weight)` in acceptance order.
    pub edges: Vec<(usize, usize, u32)>,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal's algorithm.
pub(super) fn sequential_kruskal(fixture: &MstFixture) -> SequentialMstResult {
    let vertex_count = fixture.vertex_count;
    let mut canon = undirected_weights(fixture);
    canon.sort_unstable_by_key(|&(lo, hi, weight)| (weight, lo, hi));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    let mut total_weight = 0_i128;
    let mut edges = Vec::new();

    for (lo, hi, weight) in canon {
        let left = find_root(&mut parent, lo);
        let right = find_root(&mut parent, hi);
        if left != right {
            parent[left.max(right)] = left.min(right);
            total_weight += i128::from(weight);
            edges.push((lo, hi, weight));
            components -= 1;
        }
    }

    SequentialMstResult {
        total_weight,
        edges,
        component_count: components,
    }
}
