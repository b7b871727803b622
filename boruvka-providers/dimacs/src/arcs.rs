//! Line-level parsing of `.gr` documents.

use std::{
    io::{BufRead, Lines},
    str::FromStr,
};

use boruvka_core::Weight;

use crate::errors::DimacsError;

/// Parsed contents of a `.gr` document, in file order.
///
/// # Examples
/// ```
/// use boruvka_providers_dimacs::ArcList;
///
/// let text = "c tiny\np sp 2 1\na 1 2 9\n";
/// let arcs = ArcList::<u32>::read(text.as_bytes())?;
/// assert_eq!(arcs.nodes(), 2);
/// assert_eq!(arcs.arcs(), &[(0, 1, 9)]);
/// assert_eq!(arcs.comments(), &["c tiny".to_owned()]);
/// # Ok::<(), boruvka_providers_dimacs::DimacsError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArcList<W> {
    nodes: usize,
    comments: Vec<String>,
    arcs: Vec<(usize, usize, W)>,
}

impl<W: Weight + FromStr> ArcList<W> {
    /// Reads a whole document from `reader`.
    ///
    /// Blank lines are skipped and comment lines are kept verbatim. Arcs
    /// without a weight weigh [`Weight::ONE`]; endpoints are converted to
    /// 0-based indices. Lines past the declared arc count are ignored.
    ///
    /// # Errors
    /// Returns a [`DimacsError`] describing the first malformed line.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, DimacsError> {
        let mut lines = NumberedLines::new(reader);
        let mut comments = Vec::new();
        let (nodes, expected) = read_problem(&mut lines, &mut comments)?;

        let mut arcs = Vec::with_capacity(expected);
        while arcs.len() < expected {
            let Some((number, text)) = lines.next_line()? else {
                return Err(DimacsError::InsufficientArcs {
                    expected,
                    found: arcs.len(),
                });
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('c') {
                comments.push(trimmed.to_owned());
                continue;
            }

            let mut tokens = trimmed.split_whitespace();
            match tokens.next() {
                Some("a") => {
                    let source = parse_node(tokens.next(), number, "source node", nodes)?;
                    let target = parse_node(tokens.next(), number, "target node", nodes)?;
                    let weight = match tokens.next() {
                        Some(raw) => parse_number(raw, number)?,
                        None => W::ONE,
                    };
                    arcs.push((source, target, weight));
                }
                tag => {
                    return Err(DimacsError::UnexpectedRecord {
                        line: number,
                        tag: tag.unwrap_or_default().to_owned(),
                    });
                }
            }
        }

        Ok(Self {
            nodes,
            comments,
            arcs,
        })
    }
}

impl<W> ArcList<W> {
    /// Node count declared by the problem line.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Comment lines, including their leading `c`.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Arcs as 0-based `(source, target, weight)` triples.
    #[must_use]
    pub fn arcs(&self) -> &[(usize, usize, W)] {
        &self.arcs
    }
}

/// Consumes everything up to and including the problem line.
fn read_problem<R: BufRead>(
    lines: &mut NumberedLines<R>,
    comments: &mut Vec<String>,
) -> Result<(usize, usize), DimacsError> {
    while let Some((number, text)) = lines.next_line()? {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('c') {
            comments.push(trimmed.to_owned());
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        return match tokens.next() {
            Some("p") => {
                let kind = tokens.next().unwrap_or_default();
                if kind != "sp" {
                    return Err(DimacsError::UnsupportedProblem {
                        line: number,
                        found: kind.to_owned(),
                    });
                }
                let nodes = parse_field(tokens.next(), number, "node count")?;
                let arcs = parse_field(tokens.next(), number, "arc count")?;
                Ok((nodes, arcs))
            }
            Some("a") => Err(DimacsError::MissingProblemLine),
            tag => Err(DimacsError::UnexpectedRecord {
                line: number,
                tag: tag.unwrap_or_default().to_owned(),
            }),
        };
    }
    Err(DimacsError::MissingProblemLine)
}

fn parse_number<T: FromStr>(raw: &str, line: usize) -> Result<T, DimacsError> {
    raw.parse().map_err(|_| DimacsError::MalformedNumber {
        line,
        token: raw.to_owned(),
    })
}

fn parse_field<T: FromStr>(
    token: Option<&str>,
    line: usize,
    field: &'static str,
) -> Result<T, DimacsError> {
    let raw = token.ok_or(DimacsError::MissingField { line, field })?;
    parse_number(raw, line)
}

fn parse_node(
    token: Option<&str>,
    line: usize,
    field: &'static str,
    nodes: usize,
) -> Result<usize, DimacsError> {
    let index: usize = parse_field(token, line, field)?;
    if index == 0 || index > nodes {
        return Err(DimacsError::IndexOutOfRange { line, index, nodes });
    }
    Ok(index - 1)
}

struct NumberedLines<R> {
    lines: Lines<R>,
    number: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, DimacsError> {
        let Some(next) = self.lines.next() else {
            return Ok(None);
        };
        self.number += 1;
        next.map(|text| Some((self.number, text)))
            .map_err(|source| DimacsError::Read {
                line: self.number,
                source,
            })
    }
}
