//! Seeded synthetic weighted graphs for benchmarking.

use std::collections::BTreeMap;

use boruvka_core::{SparseError, SparseMatrix};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors raised while generating synthetic graphs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested grid width was zero.
    #[error("grid width must be greater than zero")]
    ZeroWidth,
    /// The requested maximum weight was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
    /// The requested maximum weight collides with the absent-edge sentinel.
    #[error("maximum weight {max_weight} must be below u32::MAX")]
    ReservedMaxWeight {
        /// Offending maximum weight.
        max_weight: u32,
    },
}

/// Topology of a synthetic graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphShape {
    /// A random spanning backbone plus `extra_edges` random chords.
    Random {
        /// Chords added on top of the backbone.
        extra_edges: usize,
    },
    /// A row-major lattice `width` vertices wide; the last row may be short.
    Grid {
        /// Vertices per row.
        width: usize,
    },
}

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Graph topology.
    pub shape: GraphShape,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: u32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Undirected weighted graph with at most one edge per vertex pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<(usize, usize, u32)>,
}

impl SyntheticGraph {
    /// Generates a connected graph described by `config`.
    ///
    /// Self-loops are never produced, and repeated vertex pairs keep their
    /// lighter weight.
    ///
    /// # Errors
    /// Returns [`GraphError`] when a count or the weight range is invalid.
    ///
    /// # Examples
    /// ```
    /// use boruvka_benches::graph::{GraphShape, SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     vertex_count: 6,
    ///     shape: GraphShape::Grid { width: 3 },
    ///     max_weight: 10,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.edges().len(), 7);
    /// # Ok::<(), boruvka_benches::graph::GraphError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, GraphError> {
        if config.vertex_count == 0 {
            return Err(GraphError::ZeroVertices);
        }
        if config.max_weight == 0 {
            return Err(GraphError::ZeroMaxWeight);
        }
        if config.max_weight == u32::MAX {
            return Err(GraphError::ReservedMaxWeight {
                max_weight: config.max_weight,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut pairs = PairSet::default();
        match config.shape {
            GraphShape::Random { extra_edges } => {
                random_edges(&mut rng, &mut pairs, config, extra_edges);
            }
            GraphShape::Grid { width } => {
                if width == 0 {
                    return Err(GraphError::ZeroWidth);
                }
                grid_edges(&mut rng, &mut pairs, config, width);
            }
        }

        Ok(Self {
            vertex_count: config.vertex_count,
            edges: pairs.into_edges(),
        })
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Edges as `(lo, hi, weight)` with `lo < hi`, ordered by endpoints.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize, u32)] {
        &self.edges
    }

    /// Builds a square matrix storing every edge in both directions.
    ///
    /// # Errors
    /// Propagates [`SparseError`] from the backend.
    pub fn to_matrix<M: SparseMatrix<u32>>(&self) -> Result<M, SparseError> {
        let mut matrix = M::create(self.vertex_count, self.vertex_count);
        for &(lo, hi, weight) in &self.edges {
            matrix.set_element(lo, hi, weight)?;
            matrix.set_element(hi, lo, weight)?;
        }
        Ok(matrix)
    }
}

#[derive(Default)]
struct PairSet(BTreeMap<(usize, usize), u32>);

impl PairSet {
    fn insert(&mut self, left: usize, right: usize, weight: u32) {
        let key = (left.min(right), left.max(right));
        self.0
            .entry(key)
            .and_modify(|kept| *kept = (*kept).min(weight))
            .or_insert(weight);
    }

    fn into_edges(self) -> Vec<(usize, usize, u32)> {
        self.0
            .into_iter()
            .map(|((lo, hi), weight)| (lo, hi, weight))
            .collect()
    }
}

fn random_edges(
    rng: &mut SmallRng,
    pairs: &mut PairSet,
    config: &SyntheticGraphConfig,
    extra_edges: usize,
) {
    let n = config.vertex_count;
    for vertex in 1..n {
        let parent = rng.gen_range(0..vertex);
        pairs.insert(parent, vertex, rng.gen_range(1..=config.max_weight));
    }
    if n < 2 {
        return;
    }
    for _ in 0..extra_edges {
        let source = rng.gen_range(0..n);
        let offset = rng.gen_range(1..n);
        let wrapped = source + offset;
        let target = if wrapped >= n { wrapped - n } else { wrapped };
        pairs.insert(source, target, rng.gen_range(1..=config.max_weight));
    }
}

fn grid_edges(
    rng: &mut SmallRng,
    pairs: &mut PairSet,
    config: &SyntheticGraphConfig,
    width: usize,
) {
    let n = config.vertex_count;
    let height = n.div_ceil(width);
    for row in 0..height {
        for col in 0..width {
            let vertex = row * width + col;
            if vertex >= n {
                break;
            }
            let right = vertex + 1;
            if col + 1 < width && right < n {
                pairs.insert(vertex, right, rng.gen_range(1..=config.max_weight));
            }
            let below = vertex + width;
            if below < n {
                pairs.insert(vertex, below, rng.gen_range(1..=config.max_weight));
            }
        }
    }
}
