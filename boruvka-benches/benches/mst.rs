//! Boruvka contraction benchmarks.
//!
//! Measures end-to-end minimum spanning tree computation on seeded
//! synthetic graphs for each compiled backend. Graph generation and matrix
//! loading happen outside the timed region; each iteration allocates a
//! fresh tree matrix.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use boruvka_benches::{
    error::BenchSetupError,
    graph::{GraphShape, SyntheticGraph, SyntheticGraphConfig},
    params::MstBenchParams,
};
use boruvka_core::{ParallelMatrix, SequentialMatrix, SparseMatrix, TreeStorage, boruvka_mst};

/// Seed used for all synthetic graph generation in this benchmark.
const SEED: u64 = 42;

/// Upper bound of the uniform weight distribution.
const MAX_WEIGHT: u32 = 1_000;

/// Vertex counts to benchmark.
const VERTEX_COUNTS: &[usize] = &[1_000, 10_000, 50_000];

/// Random chords per vertex on top of the spanning backbone.
const CHORDS_PER_VERTEX: usize = 4;

/// Lattice width used for grid graphs.
const GRID_WIDTH: usize = 100;

fn shapes(vertex_count: usize) -> [GraphShape; 2] {
    [
        GraphShape::Random {
            extra_edges: vertex_count.saturating_mul(CHORDS_PER_VERTEX),
        },
        GraphShape::Grid { width: GRID_WIDTH },
    ]
}

fn bench_backend<M>(c: &mut Criterion, group_name: &str) -> Result<(), BenchSetupError>
where
    M: SparseMatrix<u32>,
{
    let mut group = c.benchmark_group(group_name);
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        for shape in shapes(vertex_count) {
            let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
                vertex_count,
                shape,
                max_weight: MAX_WEIGHT,
                seed: SEED,
            })?;
            let matrix: M = graph.to_matrix()?;

            // Validate once so failures surface as setup errors, not panics.
            let mut probe = M::create(vertex_count, vertex_count);
            boruvka_mst(&mut probe, &matrix, TreeStorage::Symmetric)?;

            let params = MstBenchParams {
                vertex_count,
                shape,
            };
            group.bench_with_input(
                BenchmarkId::from_parameter(&params),
                &matrix,
                |b, matrix| {
                    b.iter_batched(
                        || M::create(vertex_count, vertex_count),
                        |mut tree| boruvka_mst(&mut tree, matrix, TreeStorage::Symmetric),
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn mst_sequential(c: &mut Criterion) {
    if let Err(err) = bench_backend::<SequentialMatrix<u32>>(c, "boruvka_sequential") {
        panic!("boruvka_sequential benchmark setup failed: {err}");
    }
}

fn mst_parallel(c: &mut Criterion) {
    if let Err(err) = bench_backend::<ParallelMatrix<u32>>(c, "boruvka_parallel") {
        panic!("boruvka_parallel benchmark setup failed: {err}");
    }
}

criterion_group!(benches, mst_sequential, mst_parallel);
criterion_main!(benches);
