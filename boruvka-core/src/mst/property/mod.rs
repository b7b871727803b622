//! Property-based tests for the Boruvka engine.
//!
//! Verifies the engine against a sequential Kruskal oracle, validates the
//! structural invariants of the produced forest, and checks that repeated
//! runs, both matrix backends and both tree storage conventions agree.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
