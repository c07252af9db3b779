//! Input sources: discover measurement files on disk.
//!
//! This module handles the first stage of the pipeline - finding the
//! JSON files to compare. It provides:
//!
//! - **FilterConfig**: include/exclude glob patterns over file paths
//! - **discover_files**: walk a directory and return matching `.json` files
//!
//! Discovery sorts paths for a deterministic listing order; that order is
//! also the row order of the final table.

pub mod filter;

pub use filter::{discover_files, FilterConfig};
