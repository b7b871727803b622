//! Command-line interface for computing minimum spanning forests.
//!
//! `run` loads a Matrix Market or DIMACS graph and reports the forest's
//! total weight, `bench` times repeated runs and `clean` merges parallel
//! arcs of a DIMACS file.

mod commands;

pub use commands::{
    BackendArg, BenchCommand, BenchSummary, CleanCommand, CleanReport, Cli, CliError, Command,
    EngineArgs, ExecutionSummary, GraphFormat, RunCommand, RunSummary, StorageArg,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
