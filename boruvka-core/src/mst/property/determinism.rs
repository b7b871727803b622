//! Property 3: Determinism.
//!
//! Repeated runs on the same input must produce identical summaries. The
//! parallel backend must agree with the sequential backend edge for edge,
//! and both tree storage conventions must report the same forest.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SequentialMatrix, TreeStorage};

use super::helpers::run_engine;
use super::types::{DeterminismConfig, MstFixture};

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let (baseline, _) = run_engine::<SequentialMatrix<u32>>(fixture, TreeStorage::Symmetric)?;

    for run in 1..config.repetitions {
        let (summary, _) = run_engine::<SequentialMatrix<u32>>(fixture, TreeStorage::Symmetric)?;
        if summary != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run}: summary differs from baseline ({})",
                fixture.describe(),
            )));
        }
    }

    let (directed, _) = run_engine::<SequentialMatrix<u32>>(fixture, TreeStorage::Directed)?;
    if directed.edges() != baseline.edges() || directed.total_weight() != baseline.total_weight()
    {
        return Err(TestCaseError::fail(format!(
            "directed storage reports a different forest: weight {} vs {} ({})",
            directed.total_weight(),
            baseline.total_weight(),
            fixture.describe(),
        )));
    }

    #[cfg(feature = "cpu")]
    {
        let (parallel, _) =
            run_engine::<crate::ParallelMatrix<u32>>(fixture, TreeStorage::Symmetric)?;
        if parallel != baseline {
            return Err(TestCaseError::fail(format!(
                "parallel backend differs from sequential backend ({})",
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
