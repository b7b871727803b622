//! Property 1: Equivalence with the sequential oracle.
//!
//! The engine's forest must have the same total weight, edge count and
//! component count as sequential Kruskal. When every weight is unique the
//! forest is unique, so the edge lists must match exactly.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SequentialMatrix, TreeStorage};

use super::helpers::run_engine;
use super::oracle::sequential_kruskal;
use super::types::{MstFixture, WeightDistribution};

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let (summary, _) = run_engine::<SequentialMatrix<u32>>(fixture, TreeStorage::Symmetric)?;
    let oracle = sequential_kruskal(fixture);

    if summary.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: engine={}, oracle={} ({})",
            summary.total_weight(),
            oracle.total_weight,
            fixture.describe(),
        )));
    }

    if summary.edges().len() != oracle.edges.len() {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: engine={}, oracle={} ({})",
            summary.edges().len(),
            oracle.edges.len(),
            fixture.describe(),
        )));
    }

    if summary.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: engine={}, oracle={} ({})",
            summary.component_count(),
            oracle.component_count,
            fixture.describe(),
        )));
    }

    if fixture.distribution == WeightDistribution::Unique {
        let engine_edges: Vec<_> = summary
            .edges()
            .iter()
            .map(|edge| (edge.source(), edge.target(), edge.weight()))
            .collect();
        // Kruskal accepts edges in ascending key order, which is also the
        // order the summary reports them in.
        if engine_edges != oracle.edges {
            return Err(TestCaseError::fail(format!(
                "edge list differs from the unique tree ({})",
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
