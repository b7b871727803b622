//! Rewrites `.gr` files with parallel arcs merged into undirected edges.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use boruvka_core::Weight;
use tracing::{info, instrument};

use crate::{arcs::ArcList, errors::DimacsError};

/// Counts reported after cleaning a graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanSummary {
    nodes: usize,
    arcs_read: usize,
    edges: usize,
    self_loops: usize,
}

impl CleanSummary {
    /// Node count carried over from the input.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Arcs read from the input.
    #[must_use]
    pub fn arcs_read(&self) -> usize {
        self.arcs_read
    }

    /// Distinct undirected edges written; each appears as two arcs.
    #[must_use]
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Self-loop arcs dropped from the output.
    #[must_use]
    pub fn self_loops(&self) -> usize {
        self.self_loops
    }
}

/// Output path used by [`clean_path`]: the input's extension is replaced
/// with `clean.gr`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use boruvka_providers_dimacs::cleaned_path;
///
/// assert_eq!(
///     cleaned_path(Path::new("data/road.gr")),
///     Path::new("data/road.clean.gr")
/// );
/// ```
#[must_use]
pub fn cleaned_path(input: &Path) -> PathBuf {
    input.with_extension("clean.gr")
}

/// Cleans the `.gr` file at `input`, writing the result next to it.
///
/// Returns the output path with the clean summary.
///
/// # Errors
/// Returns [`DimacsError::Io`] when the input cannot be opened or the
/// output cannot be created, [`DimacsError::Write`] when writing fails, and
/// any parse error raised by [`ArcList::read`].
#[instrument(
    name = "dimacs.clean",
    err,
    skip(input),
    fields(input = %input.as_ref().display()),
)]
pub fn clean_path<W>(input: impl AsRef<Path>) -> Result<(PathBuf, CleanSummary), DimacsError>
where
    W: Weight + FromStr,
{
    let source = input.as_ref();
    let reader = File::open(source).map_err(|err| DimacsError::Io {
        path: source.to_path_buf(),
        source: err,
    })?;
    let output = cleaned_path(source);
    let list = ArcList::<W>::read(BufReader::new(reader))?;

    let file = File::create(&output).map_err(|err| DimacsError::Io {
        path: output.clone(),
        source: err,
    })?;
    let mut writer = BufWriter::new(file);
    let summary = write_clean(&list, &mut writer)?;
    writer.flush().map_err(DimacsError::Write)?;

    info!(
        output = %output.display(),
        nodes = summary.nodes,
        arcs_read = summary.arcs_read,
        edges = summary.edges,
        self_loops = summary.self_loops,
        "cleaned graph written"
    );
    Ok((output, summary))
}

/// Cleans a `.gr` document from `reader` into `out`.
///
/// The output repeats the input's comments, declares `2 * edges` arcs and
/// lists every undirected edge in both directions, ordered by its lower then
/// higher endpoint, carrying the minimum weight seen across its parallel
/// arcs. Self-loops are dropped.
///
/// # Errors
/// Returns [`DimacsError::Write`] when writing fails and any parse error
/// raised by [`ArcList::read`].
///
/// # Examples
/// ```
/// use boruvka_providers_dimacs::clean_reader;
///
/// let input = "c road\np sp 3 3\na 2 1 5\na 1 2 3\na 2 3 4\n";
/// let mut out = Vec::new();
/// let summary = clean_reader::<u32, _, _>(input.as_bytes(), &mut out)?;
/// assert_eq!(summary.edges(), 2);
/// assert_eq!(
///     String::from_utf8(out).expect("utf-8"),
///     "c road\np sp 3 4\na 1 2 3\na 2 1 3\na 2 3 4\na 3 2 4\n"
/// );
/// # Ok::<(), boruvka_providers_dimacs::DimacsError>(())
/// ```
pub fn clean_reader<W, R, O>(reader: R, out: &mut O) -> Result<CleanSummary, DimacsError>
where
    W: Weight + FromStr,
    R: BufRead,
    O: Write + ?Sized,
{
    let list = ArcList::<W>::read(reader)?;
    write_clean(&list, out)
}

fn write_clean<W, O>(list: &ArcList<W>, out: &mut O) -> Result<CleanSummary, DimacsError>
where
    W: Weight,
    O: Write + ?Sized,
{
    let mut edges: BTreeMap<(usize, usize), W> = BTreeMap::new();
    let mut self_loops = 0;
    for &(source, target, weight) in list.arcs() {
        if source == target {
            self_loops += 1;
            continue;
        }
        let key = (source.min(target), source.max(target));
        edges
            .entry(key)
            .and_modify(|kept| *kept = (*kept).min(weight))
            .or_insert(weight);
    }

    write_edges(list, &edges, out).map_err(DimacsError::Write)?;
    Ok(CleanSummary {
        nodes: list.nodes(),
        arcs_read: list.arcs().len(),
        edges: edges.len(),
        self_loops,
    })
}

fn write_edges<W, O>(
    list: &ArcList<W>,
    edges: &BTreeMap<(usize, usize), W>,
    out: &mut O,
) -> std::io::Result<()>
where
    W: Weight,
    O: Write + ?Sized,
{
    for comment in list.comments() {
        writeln!(out, "{comment}")?;
    }
    writeln!(out, "p sp {} {}", list.nodes(), edges.len() * 2)?;
    for (&(lo, hi), weight) in edges {
        writeln!(out, "a {} {} {weight}", lo + 1, hi + 1)?;
        writeln!(out, "a {} {} {weight}", hi + 1, lo + 1)?;
    }
    Ok(())
}
