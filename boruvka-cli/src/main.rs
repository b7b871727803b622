//! `boruvka` binary.
//!
//! Installs logging, runs the parsed command and prints its summary to
//! stdout. Failures are logged once, with the stable error codes attached
//! when the engine produced them, and turn into a non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use boruvka_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use boruvka_core::{BoruvkaErrorCode, MstErrorCode};
use clap::Parser;
use tracing::{error, field};

fn execute(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("command failed")?;
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut out).context("failed to print summary")?;
    out.flush().context("failed to flush stdout")
}

/// Stable codes carried by engine failures; `None` for everything else.
fn engine_codes(err: &anyhow::Error) -> (Option<BoruvkaErrorCode>, Option<MstErrorCode>) {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Core(core)) => (Some(core.code()), core.mst_code()),
        _ => (None, None),
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let Err(err) = execute(Cli::parse()) else {
        return ExitCode::SUCCESS;
    };
    let (code, mst_code) = engine_codes(&err);
    error!(
        error = %format!("{err:#}"),
        code = code.map(|code| field::display(code.as_str())),
        mst_code = mst_code.map(|code| field::display(code.as_str())),
        "boruvka failed"
    );
    ExitCode::FAILURE
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("boruvka: cannot initialise logging: {err}");
}
