//! DIMACS shortest-path (`.gr`) loader and multi-edge cleaner.
//!
//! A `.gr` file holds `c` comment lines, one `p sp <nodes> <arcs>` problem
//! line and `a <src> <dst> [weight]` arc lines with 1-based endpoints.
//! [`try_from_path`] and [`try_from_reader`] load the arcs as directed
//! matrix entries; [`clean_path`] rewrites a file so every undirected edge
//! appears once per direction with its minimum weight.

mod arcs;
mod cleaner;
mod errors;
mod loader;

pub use arcs::ArcList;
pub use cleaner::{CleanSummary, clean_path, clean_reader, cleaned_path};
pub use errors::DimacsError;
pub use loader::{try_from_path, try_from_reader};
