//! Benchmark support crate for boruvka.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks of the contraction engine and the sparse-matrix
//! primitives it is built on.

pub mod error;
pub mod graph;
pub mod params;
