//! Strategy builders for MST property-based tests.
//!
//! Every generator is driven by a seeded [`SmallRng`], so proptest only has
//! to shrink over `(distribution, seed)` and a failing case can be replayed
//! as an rstest case.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;
/// Vertex range for large graphs.
const LARGE_VERTICES: std::ops::RangeInclusive<usize> = 200..=400;
/// Upper bound for weights of large graphs; kept small to force ties.
const LARGE_MAX_WEIGHT: u32 = 20;
/// Upper bound for randomly drawn weights.
const MAX_WEIGHT: u32 = 1_000;

/// Generates MST fixtures covering every weight distribution.
///
/// Biased towards `ManyIdentical`, the main stress case for tie-breaking.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Asymmetric => generate_asymmetric(rng),
        WeightDistribution::Large => generate_large(rng),
    }
}

/// Accumulates matrix entries, storing each undirected edge in a random
/// direction.
struct EdgeBuilder<'r> {
    rng: &'r mut SmallRng,
    edges: Vec<(usize, usize, u32)>,
}

impl<'r> EdgeBuilder<'r> {
    fn new(rng: &'r mut SmallRng) -> Self {
        Self {
            rng,
            edges: Vec::new(),
        }
    }

    fn push(&mut self, left: usize, right: usize, weight: u32) {
        if self.rng.gen_bool(0.5) {
            self.edges.push((left, right, weight));
        } else {
            self.edges.push((right, left, weight));
        }
    }

    fn random_weight(&mut self) -> u32 {
        self.rng.gen_range(1..=MAX_WEIGHT)
    }

    /// Adds each pair of `offset..offset + size` with the given probability,
    /// guaranteeing at least one edge when `size >= 2`.
    fn probabilistic(
        &mut self,
        offset: usize,
        size: usize,
        probability: f64,
        mut weight: impl FnMut(&mut Self) -> u32,
    ) {
        let start = self.edges.len();
        for i in offset..offset + size {
            for j in (i + 1)..offset + size {
                if self.rng.gen_bool(probability) {
                    let w = weight(self);
                    self.push(i, j, w);
                }
            }
        }
        if size >= 2 && self.edges.len() == start {
            let w = weight(self);
            self.push(offset, offset + 1, w);
        }
    }

    /// Drops entries overwritten by a later write to the same cell, so the
    /// fixture lists exactly what the matrix stores.
    fn finish(self, vertex_count: usize, distribution: WeightDistribution) -> MstFixture {
        let mut seen = BTreeSet::new();
        let mut edges: Vec<_> = self
            .edges
            .into_iter()
            .rev()
            .filter(|&(row, col, _)| seen.insert((row, col)))
            .collect();
        edges.reverse();
        MstFixture {
            vertex_count,
            edges,
            distribution,
        }
    }
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Each undirected edge receives a distinct weight, so the minimum spanning
/// forest is unique.
fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.2..=0.6);
    let mut pairs = Vec::new();
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(probability) {
                pairs.push((i, j));
            }
        }
    }
    if pairs.is_empty() {
        pairs.push((0, 1));
    }
    let mut weights: Vec<u32> = (1_u32..).take(pairs.len()).collect();
    shuffle(&mut weights, rng);

    let mut builder = EdgeBuilder::new(rng);
    for ((i, j), weight) in pairs.into_iter().zip(weights) {
        builder.push(i, j, weight);
    }
    builder.finish(vertex_count, WeightDistribution::Unique)
}

// ── Many identical weights ──────────────────────────────────────────────

fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.3..=0.7);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<u32> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();

    let mut builder = EdgeBuilder::new(rng);
    builder.probabilistic(0, vertex_count, probability, |b| {
        pool[b.rng.gen_range(0..pool.len())]
    });
    builder.finish(vertex_count, WeightDistribution::ManyIdentical)
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Random spanning path over a permutation plus roughly `0.5n` to `n` extra
/// edges; self-loops are kept to check that the engine drops them.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);

    let mut builder = EdgeBuilder::new(rng);
    for window in perm.windows(2) {
        let weight = builder.random_weight();
        builder.push(window[0], window[1], weight);
    }
    for _ in 0..extra_count {
        let i = builder.rng.gen_range(0..vertex_count);
        let j = builder.rng.gen_range(0..vertex_count);
        let weight = builder.random_weight();
        builder.push(i, j, weight);
    }
    builder.finish(vertex_count, WeightDistribution::Sparse)
}

// ── Dense ───────────────────────────────────────────────────────────────

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let probability = rng.gen_range(0.7..=0.95);
    let mut builder = EdgeBuilder::new(rng);
    builder.probabilistic(0, vertex_count, probability, EdgeBuilder::random_weight);
    builder.finish(vertex_count, WeightDistribution::Dense)
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Two to five components with random internal structure and no
/// cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(3..=12))
        .collect();
    let vertex_count: usize = sizes.iter().sum();

    let mut builder = EdgeBuilder::new(rng);
    let mut offset = 0;
    for size in sizes {
        let probability = builder.rng.gen_range(0.3..=0.8);
        builder.probabilistic(offset, size, probability, EdgeBuilder::random_weight);
        offset += size;
    }
    builder.finish(vertex_count, WeightDistribution::Disconnected)
}

// ── Asymmetric ──────────────────────────────────────────────────────────

/// Stores both directions of roughly half the edges with independent
/// weights; the lighter direction must win.
fn generate_asymmetric(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.2..=0.5);
    let mut builder = EdgeBuilder::new(rng);
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if !builder.rng.gen_bool(probability) {
                continue;
            }
            let weight = builder.random_weight();
            if builder.rng.gen_bool(0.5) {
                let reverse = builder.random_weight();
                builder.edges.push((i, j, weight));
                builder.edges.push((j, i, reverse));
            } else {
                builder.push(i, j, weight);
            }
        }
    }
    builder.finish(vertex_count, WeightDistribution::Asymmetric)
}

// ── Large ───────────────────────────────────────────────────────────────

/// Random spanning path plus `n` to `3n` chords, all weighted from
/// `1..=LARGE_MAX_WEIGHT`. A tenth of the vertices are cut loose from the
/// path so the result is usually a forest.
fn generate_large(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(LARGE_VERTICES);
    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    let chord_count = rng.gen_range(vertex_count..=3 * vertex_count);

    let mut builder = EdgeBuilder::new(rng);
    for window in perm.windows(2) {
        if builder.rng.gen_bool(0.1) {
            continue;
        }
        let weight = builder.rng.gen_range(1..=LARGE_MAX_WEIGHT);
        builder.push(window[0], window[1], weight);
    }
    for _ in 0..chord_count {
        let i = builder.rng.gen_range(0..vertex_count);
        let j = builder.rng.gen_range(0..vertex_count);
        let weight = builder.rng.gen_range(1..=LARGE_MAX_WEIGHT);
        builder.push(i, j, weight);
    }
    builder.finish(vertex_count, WeightDistribution::Large)
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
