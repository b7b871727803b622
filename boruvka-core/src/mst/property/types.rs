//! Type definitions for MST property-based tests.

use test_strategy::Arbitrary;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different phases of the contraction loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Every undirected edge has a distinct weight, so the tree is unique.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    #[weight(3)]
    ManyIdentical,
    /// Sparse graph with approximately `1.5n` to `2n` edges.
    #[weight(2)]
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    #[weight(2)]
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    #[weight(2)]
    Disconnected,
    /// Both directions of some edges are stored with different weights.
    #[weight(2)]
    Asymmetric,
    /// A few hundred vertices with weights drawn from a small range, so
    /// ties persist across many contraction rounds.
    #[weight(1)]
    Large,
}

/// Fixture for MST property tests.
///
/// Edges are directed matrix entries `(row, col, weight)`. Generators store
/// most edges in a single, randomly chosen direction so every run also
/// exercises symmetrisation.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated matrix entries.
    pub edges: Vec<(usize, usize, u32)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Short context string appended to failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, entries={}",
            self.distribution,
            self.vertex_count,
            self.edges.len()
        )
    }
}

/// Configuration for the determinism property.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the computation per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from the environment, falling back to
    /// defaults.
    ///
    /// `BORUVKA_MST_PBT_REPETITIONS` controls the repetition count
    /// (default: 3).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("BORUVKA_MST_PBT_REPETITIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);
        Self { repetitions }
    }
}
