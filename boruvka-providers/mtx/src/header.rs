//! Parsing of the `%%MatrixMarket` banner line.

use std::fmt;

use crate::errors::MatrixMarketError;

const BANNER: &str = "%%MatrixMarket";

/// Value type stored by a coordinate file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Entries carry no value; every stored edge weighs one.
    Pattern,
    /// Entries carry an integer weight after the indices.
    Integer,
}

/// Storage convention of a coordinate file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symmetry {
    /// Every entry is stored explicitly.
    General,
    /// Only one triangle is stored; entries are mirrored on load.
    Symmetric,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pattern => "pattern",
            Self::Integer => "integer",
        })
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::General => "general",
            Self::Symmetric => "symmetric",
        })
    }
}

/// Parsed banner of a Matrix Market coordinate file.
///
/// # Examples
/// ```
/// use boruvka_providers_mtx::{Field, MatrixMarketHeader, Symmetry};
///
/// let header = MatrixMarketHeader::parse(
///     "%%MatrixMarket matrix coordinate integer symmetric",
///     1,
/// )?;
/// assert_eq!(header.field(), Field::Integer);
/// assert_eq!(header.symmetry(), Symmetry::Symmetric);
/// # Ok::<(), boruvka_providers_mtx::MatrixMarketError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixMarketHeader {
    field: Field,
    symmetry: Symmetry,
}

impl MatrixMarketHeader {
    /// Returns `true` when `line` starts with the banner token.
    #[must_use]
    pub fn is_banner(line: &str) -> bool {
        line.starts_with(BANNER)
    }

    /// Parses a banner line; `line_number` is used for error reporting.
    ///
    /// Keywords are matched case-insensitively.
    ///
    /// # Errors
    /// Returns [`MatrixMarketError::MissingHeader`] when `line` is not a
    /// banner, and the matching `Unsupported*` variant when the object,
    /// format, field or symmetry keyword is not accepted.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, MatrixMarketError> {
        let mut words = line.split_whitespace();
        if words.next() != Some(BANNER) {
            return Err(MatrixMarketError::MissingHeader);
        }

        let object = words.next().unwrap_or_default();
        let format = words.next().unwrap_or_default();
        if !object.eq_ignore_ascii_case("matrix") || !format.eq_ignore_ascii_case("coordinate") {
            return Err(MatrixMarketError::UnsupportedFormat {
                line: line_number,
                found: format!("{object} {format}").trim().to_owned(),
            });
        }

        let field = match words.next().unwrap_or_default() {
            word if word.eq_ignore_ascii_case("pattern") => Field::Pattern,
            word if word.eq_ignore_ascii_case("integer") => Field::Integer,
            word => {
                return Err(MatrixMarketError::UnsupportedField {
                    line: line_number,
                    found: word.to_owned(),
                });
            }
        };

        let symmetry = match words.next().unwrap_or_default() {
            word if word.eq_ignore_ascii_case("general") => Symmetry::General,
            word if word.eq_ignore_ascii_case("symmetric") => Symmetry::Symmetric,
            word => {
                return Err(MatrixMarketError::UnsupportedSymmetry {
                    line: line_number,
                    found: word.to_owned(),
                });
            }
        };

        Ok(Self { field, symmetry })
    }

    /// Value type of the entries.
    #[must_use]
    pub fn field(&self) -> Field {
        self.field
    }

    /// Storage convention of the entries.
    #[must_use]
    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }
}
