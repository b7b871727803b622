//! Dense text rendering of sparse matrices and reduction vectors.
//!
//! Intended for small graphs and debugging: every cell is printed, so output
//! grows with `rows * cols`.

use std::io::{self, Write};

use crate::{SparseMatrix, Weight};

/// Writes `matrix` as a right-aligned grid, one row per line.
///
/// Absent entries render as `0`. Cells are padded to one more than the
/// widest stored value, and a blank line terminates the grid.
///
/// # Errors
/// Propagates write failures from `out`.
///
/// # Examples
/// ```
/// use boruvka_core::{SequentialMatrix, SparseMatrix, display::render_matrix};
///
/// let mut matrix = SequentialMatrix::<u32>::create(2, 2);
/// matrix.set_element(0, 1, 12)?;
/// let mut out = Vec::new();
/// render_matrix(&mut out, &matrix, Some("tree"))?;
/// assert_eq!(String::from_utf8(out)?, "tree\n  0 12\n  0  0\n\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_matrix<W, M, O>(out: &mut O, matrix: &M, title: Option<&str>) -> io::Result<()>
where
    W: Weight,
    M: SparseMatrix<W>,
    O: Write + ?Sized,
{
    write_title(out, title)?;
    let triplets = matrix.read_triplets();
    let width = cell_width(triplets.values().iter().copied());
    for row in 0..matrix.n_rows() {
        for col in 0..matrix.n_cols() {
            match matrix.get_element(row, col) {
                Some(value) => write!(out, "{value:>width$}")?,
                None => write!(out, "{:>width$}", 0)?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Writes `values` one per line, right-aligned.
///
/// Sentinel entries, such as rows without edges in a row-minimum
/// reduction, render as `0`.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn render_vector<W, O>(out: &mut O, values: &[W], title: Option<&str>) -> io::Result<()>
where
    W: Weight,
    O: Write + ?Sized,
{
    write_title(out, title)?;
    let width = cell_width(values.iter().copied().filter(|&v| v != W::SENTINEL));
    for &value in values {
        if value == W::SENTINEL {
            writeln!(out, "{:>width$}", 0)?;
        } else {
            writeln!(out, "{value:>width$}")?;
        }
    }
    writeln!(out)
}

fn write_title<O: Write + ?Sized>(out: &mut O, title: Option<&str>) -> io::Result<()> {
    match title {
        Some(title) if !title.is_empty() => writeln!(out, "{title}"),
        _ => Ok(()),
    }
}

fn cell_width<W: Weight>(values: impl Iterator<Item = W>) -> usize {
    let widest = values
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(1)
        .max(1);
    widest + 1
}
