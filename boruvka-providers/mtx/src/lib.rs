//! Matrix Market coordinate loader producing Boruvka sparse graphs.
//!
//! Only the `matrix coordinate` format is accepted, with `pattern` or
//! `integer` fields and `general` or `symmetric` symmetry. Entries are
//! 1-indexed on disk and 0-indexed in the resulting matrix.

mod errors;
mod header;
mod loader;

pub use errors::MatrixMarketError;
pub use header::{Field, MatrixMarketHeader, Symmetry};
pub use loader::{try_from_path, try_from_reader};

#[cfg(test)]
mod tests;
