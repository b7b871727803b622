//! Benchmark parameter types.

use std::fmt;

use crate::graph::GraphShape;

/// Parameters identifying one engine benchmark case.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Graph topology.
    pub shape: GraphShape,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            GraphShape::Random { extra_edges } => {
                write!(f, "random/n={},extra={extra_edges}", self.vertex_count)
            }
            GraphShape::Grid { width } => {
                write!(f, "grid/n={},w={width}", self.vertex_count)
            }
        }
    }
}
