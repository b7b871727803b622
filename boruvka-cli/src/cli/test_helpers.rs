//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, ExecutionSummary, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_graph_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_cli_expecting_success(cli: Cli) -> ExecutionSummary {
    match run_cli(cli) {
        Ok(summary) => summary,
        Err(err) => panic!("command must succeed: {err}"),
    }
}

/// Two triangles joined by one heavy bridge; forest weight 1+2+4+5+9 = 21.
pub(super) const BRIDGED_TRIANGLES_GR: &str = "\
c two triangles joined by a bridge
p sp 6 7
a 1 2 1
a 2 3 2
a 1 3 3
a 4 5 4
a 5 6 5
a 4 6 6
a 3 4 9
";

/// The classic seven-vertex textbook graph; tree weight 39.
pub(super) const CLASSIC_MTX: &str = "\
%%MatrixMarket matrix coordinate integer symmetric
% seven vertices, eleven edges
7 7 11
2 1 7
4 1 5
3 2 8
4 2 9
5 2 7
5 3 5
5 4 15
6 4 6
6 5 8
7 5 9
7 6 11
";
