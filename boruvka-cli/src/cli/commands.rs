//! Command implementations and argument parsing for the boruvka CLI.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use boruvka_core::{
    Backend, BackendInfo, Boruvka, BoruvkaBuilder, BoruvkaError, SequentialMatrix, SparseMatrix,
    TreeStorage, Weight, display::render_matrix,
};
use boruvka_providers_dimacs::{CleanSummary, DimacsError, clean_path};
use boruvka_providers_mtx::MatrixMarketError;
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, debug, field, info, instrument};

const DEFAULT_ITERATIONS: u32 = 10;
const DEFAULT_WARMUP: u32 = 2;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boruvka",
    about = "Compute minimum spanning forests of sparse graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of a graph file.
    Run(RunCommand),
    /// Time repeated runs and append per-run milliseconds to a file.
    Bench(BenchCommand),
    /// Merge parallel arcs of a `.gr` file into `<stem>.clean.gr`.
    Clean(CleanCommand),
}

/// Engine configuration shared by `run` and `bench`.
#[derive(Debug, Args, Clone)]
pub struct EngineArgs {
    /// Sparse-matrix backend to execute on.
    #[arg(long, value_enum, default_value_t = BackendArg::Auto)]
    pub backend: BackendArg,

    /// Worker threads for the parallel backend.
    #[arg(long)]
    pub threads: Option<usize>,

    /// How accepted edges are stored in the tree matrix.
    #[arg(long, value_enum, default_value_t = StorageArg::Symmetric)]
    pub storage: StorageArg,
}

impl Default for EngineArgs {
    fn default() -> Self {
        Self {
            backend: BackendArg::Auto,
            threads: None,
            storage: StorageArg::Symmetric,
        }
    }
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph file (`.mtx` or `.gr`).
    pub path: PathBuf,

    /// Engine configuration.
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Print the tree matrix as a dense grid.
    #[arg(long)]
    pub print_tree: bool,
}

/// Options accepted by the `bench` command.
#[derive(Debug, Args, Clone)]
pub struct BenchCommand {
    /// Graph file (`.mtx` or `.gr`).
    pub path: PathBuf,

    /// Engine configuration.
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Timed runs to record.
    #[arg(
        long,
        default_value_t = DEFAULT_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub iterations: u32,

    /// Untimed runs executed first.
    #[arg(long, default_value_t = DEFAULT_WARMUP)]
    pub warmup: u32,

    /// Timing file (defaults to `<PATH>.<backend>.time.txt`).
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Options accepted by the `clean` command.
#[derive(Debug, Args, Clone)]
pub struct CleanCommand {
    /// DIMACS `.gr` file to clean.
    pub path: PathBuf,
}

/// Backend names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Best backend compiled into this build.
    Auto,
    /// Ordered-map backend on the calling thread.
    Sequential,
    /// Rayon backend.
    Parallel,
}

impl From<BackendArg> for Backend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::Auto => Self::Auto,
            BackendArg::Sequential => Self::Sequential,
            BackendArg::Parallel => Self::Parallel,
        }
    }
}

/// Tree storage conventions accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageArg {
    /// One entry per tree edge.
    Directed,
    /// Both directions of every tree edge.
    Symmetric,
}

impl From<StorageArg> for TreeStorage {
    fn from(value: StorageArg) -> Self {
        match value {
            StorageArg::Directed => Self::Directed,
            StorageArg::Symmetric => Self::Symmetric,
        }
    }
}

/// Graph file formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// Matrix Market coordinate file (`.mtx`), loaded with `i64` weights.
    MatrixMarket,
    /// DIMACS shortest-path file (`.gr`), loaded with `u64` weights.
    Dimacs,
}

impl GraphFormat {
    /// Picks the format from the extension of `path`, ignoring case.
    ///
    /// # Errors
    /// Returns [`CliError::UnsupportedExtension`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("mtx") => Ok(Self::MatrixMarket),
            Some("gr") => Ok(Self::Dimacs),
            _ => Err(CliError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::MatrixMarket => "mtx",
            Self::Dimacs => "gr",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input path has no recognised graph extension.
    #[error("unsupported graph file `{path}`; expected a `.mtx` or `.gr` extension")]
    UnsupportedExtension {
        /// Offending path.
        path: PathBuf,
    },
    /// Writing the timing file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Rendering the tree matrix failed.
    #[error("failed to render tree: {0}")]
    Render(#[source] io::Error),
    /// Matrix Market ingestion failed.
    #[error(transparent)]
    MatrixMarket(#[from] MatrixMarketError),
    /// DIMACS ingestion or cleaning failed.
    #[error(transparent)]
    Dimacs(#[from] DimacsError),
    /// Core orchestration failed.
    #[error(transparent)]
    Core(#[from] BoruvkaError),
}

/// Outcome of the `run` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Backend the engine executed on.
    pub backend: BackendInfo,
    /// Vertex count of the input graph.
    pub vertices: usize,
    /// Edges in the spanning forest.
    pub tree_edges: usize,
    /// Connected components of the input graph.
    pub components: usize,
    /// Contraction rounds executed.
    pub rounds: usize,
    /// Sum of the forest's edge weights.
    pub total_weight: i128,
    /// Dense rendering of the tree, when requested.
    pub tree: Option<String>,
}

/// Outcome of the `bench` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchSummary {
    /// Backend the engine executed on.
    pub backend: BackendInfo,
    /// File the timings were written to.
    pub output: PathBuf,
    /// Wall-clock milliseconds of each timed run.
    pub timings_ms: Vec<u128>,
    /// Total weight reported by the last timed run.
    pub total_weight: i128,
}

/// Outcome of the `clean` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Path of the cleaned file.
    pub output: PathBuf,
    /// Counts reported by the cleaner.
    pub summary: CleanSummary,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// Result of `run`.
    Run(RunSummary),
    /// Result of `bench`.
    Bench(BenchSummary),
    /// Result of `clean`.
    Clean(CleanReport),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, configuration or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use boruvka_cli::cli::{Cli, Command, EngineArgs, ExecutionSummary, RunCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let path = dir.path().join("path.gr");
/// std::fs::write(&path, "p sp 3 2\na 1 2 4\na 2 3 5\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path,
///         engine: EngineArgs::default(),
///         print_tree: false,
///     }),
/// };
/// let ExecutionSummary::Run(summary) = run_cli(cli)? else {
///     unreachable!("run yields a run summary");
/// };
/// assert_eq!(summary.total_weight, 9);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(&run).map(ExecutionSummary::Run)
        }
        Command::Bench(bench) => {
            span.record("command", field::display("bench"));
            bench_command(&bench).map(ExecutionSummary::Bench)
        }
        Command::Clean(clean) => {
            span.record("command", field::display("clean"));
            clean_command(&clean).map(ExecutionSummary::Clean)
        }
    }
}

fn build_engine(args: &EngineArgs) -> Result<Boruvka, CliError> {
    let mut builder = BoruvkaBuilder::new()
        .with_backend(args.backend.into())
        .with_tree_storage(args.storage.into());
    if let Some(threads) = args.threads {
        builder = builder.with_threads(threads);
    }
    Ok(builder.build()?)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = %command.path.display(), format = field::Empty, backend = field::Empty),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<RunSummary, CliError> {
    let format = GraphFormat::from_path(&command.path)?;
    let boruvka = build_engine(&command.engine)?;
    let span = Span::current();
    span.record("format", field::display(format.as_str()));
    span.record("backend", field::display(boruvka.backend()));

    let summary = match format {
        GraphFormat::MatrixMarket => {
            run_on_backend::<i64>(&boruvka, &command.path, format, command.print_tree)?
        }
        GraphFormat::Dimacs => {
            run_on_backend::<u64>(&boruvka, &command.path, format, command.print_tree)?
        }
    };

    info!(
        total_weight = %summary.total_weight,
        tree_edges = summary.tree_edges,
        components = summary.components,
        "command completed"
    );
    Ok(summary)
}

fn run_on_backend<W>(
    boruvka: &Boruvka,
    path: &Path,
    format: GraphFormat,
    print_tree: bool,
) -> Result<RunSummary, CliError>
where
    W: Weight + FromStr,
{
    #[cfg(feature = "cpu")]
    if boruvka.backend() == Backend::Parallel {
        return run_graph::<W, boruvka_core::ParallelMatrix<W>>(boruvka, path, format, print_tree);
    }
    run_graph::<W, SequentialMatrix<W>>(boruvka, path, format, print_tree)
}

fn run_graph<W, M>(
    boruvka: &Boruvka,
    path: &Path,
    format: GraphFormat,
    print_tree: bool,
) -> Result<RunSummary, CliError>
where
    W: Weight + FromStr,
    M: SparseMatrix<W> + Send + Sync,
{
    let graph: M = load_graph(path, format)?;
    let run = boruvka.run(&graph)?;
    let tree = if print_tree {
        let mut grid = Vec::new();
        render_matrix(&mut grid, run.tree(), Some("tree")).map_err(CliError::Render)?;
        Some(String::from_utf8_lossy(&grid).into_owned())
    } else {
        None
    };
    let summary = run.summary();
    Ok(RunSummary {
        backend: run.backend(),
        vertices: graph.n_rows(),
        tree_edges: summary.edges().len(),
        components: summary.component_count(),
        rounds: summary.rounds(),
        total_weight: summary.total_weight(),
        tree,
    })
}

/// Loads `path` with the loader matching `format`.
pub(super) fn load_graph<W, M>(path: &Path, format: GraphFormat) -> Result<M, CliError>
where
    W: Weight + FromStr,
    M: SparseMatrix<W>,
{
    match format {
        GraphFormat::MatrixMarket => Ok(boruvka_providers_mtx::try_from_path(path)?),
        GraphFormat::Dimacs => Ok(boruvka_providers_dimacs::try_from_path(path)?),
    }
}

#[instrument(
    name = "cli.bench",
    err,
    skip(command),
    fields(
        path = %command.path.display(),
        iterations = command.iterations,
        warmup = command.warmup,
    ),
)]
pub(super) fn bench_command(command: &BenchCommand) -> Result<BenchSummary, CliError> {
    let format = GraphFormat::from_path(&command.path)?;
    let boruvka = build_engine(&command.engine)?;
    let output = command
        .output
        .clone()
        .unwrap_or_else(|| timing_path(&command.path, boruvka.backend()));

    let summary = match format {
        GraphFormat::MatrixMarket => bench_on_backend::<i64>(&boruvka, command, format, output)?,
        GraphFormat::Dimacs => bench_on_backend::<u64>(&boruvka, command, format, output)?,
    };

    info!(
        output = %summary.output.display(),
        total_weight = %summary.total_weight,
        "benchmark completed"
    );
    Ok(summary)
}

/// Default timing file: `<PATH>.<backend>.time.txt`.
pub(super) fn timing_path(path: &Path, backend: Backend) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{backend}.time.txt"));
    PathBuf::from(name)
}

fn bench_on_backend<W>(
    boruvka: &Boruvka,
    command: &BenchCommand,
    format: GraphFormat,
    output: PathBuf,
) -> Result<BenchSummary, CliError>
where
    W: Weight + FromStr,
{
    #[cfg(feature = "cpu")]
    if boruvka.backend() == Backend::Parallel {
        return bench_graph::<W, boruvka_core::ParallelMatrix<W>>(boruvka, command, format, output);
    }
    bench_graph::<W, SequentialMatrix<W>>(boruvka, command, format, output)
}

fn bench_graph<W, M>(
    boruvka: &Boruvka,
    command: &BenchCommand,
    format: GraphFormat,
    output: PathBuf,
) -> Result<BenchSummary, CliError>
where
    W: Weight + FromStr,
    M: SparseMatrix<W> + Send + Sync,
{
    let graph: M = load_graph(&command.path, format)?;
    for pass in 0..command.warmup {
        let run = boruvka.run(&graph)?;
        debug!(pass, total_weight = %run.summary().total_weight(), "warm-up pass complete");
    }

    let io_error = |source| CliError::Io {
        path: output.clone(),
        source,
    };
    let mut writer = BufWriter::new(File::create(&output).map_err(io_error)?);
    let mut timings_ms = Vec::new();
    let mut total_weight = 0;
    for _ in 0..command.iterations {
        let started = Instant::now();
        let run = boruvka.run(&graph)?;
        let elapsed = started.elapsed().as_millis();
        total_weight = run.summary().total_weight();
        writeln!(writer, "{elapsed}").map_err(io_error)?;
        timings_ms.push(elapsed);
    }
    writer.flush().map_err(io_error)?;

    Ok(BenchSummary {
        backend: boruvka.backend_info(),
        output,
        timings_ms,
        total_weight,
    })
}

#[instrument(name = "cli.clean", err, skip(command), fields(path = %command.path.display()))]
pub(super) fn clean_command(command: &CleanCommand) -> Result<CleanReport, CliError> {
    if GraphFormat::from_path(&command.path)? != GraphFormat::Dimacs {
        return Err(CliError::UnsupportedExtension {
            path: command.path.clone(),
        });
    }
    let (output, summary) = clean_path::<u64>(&command.path)?;
    Ok(CleanReport { output, summary })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Run(run) => {
            writeln!(writer, "env: {}", run.backend)?;
            writeln!(writer, "MST total weight: {}", run.total_weight)?;
            writeln!(writer, "tree edges: {}", run.tree_edges)?;
            writeln!(writer, "components: {}", run.components)?;
            if let Some(tree) = &run.tree {
                write!(writer, "{tree}")?;
            }
        }
        ExecutionSummary::Bench(bench) => {
            writeln!(writer, "env: {}", bench.backend)?;
            writeln!(
                writer,
                "timings: {} runs written to {}",
                bench.timings_ms.len(),
                bench.output.display()
            )?;
            writeln!(writer, "MST total weight: {}", bench.total_weight)?;
        }
        ExecutionSummary::Clean(clean) => {
            writeln!(
                writer,
                "cleaned graph: {} ({} nodes, {} edges, {} arcs read)",
                clean.output.display(),
                clean.summary.nodes(),
                clean.summary.edges(),
                clean.summary.arcs_read()
            )?;
        }
    }
    Ok(())
}
