//! Output: present merged documents as a comparison table.
//!
//! This module handles the final stage of the pipeline - projecting
//! each document onto the merged column set and packaging the result
//! as a table-ready structure. It provides:
//!
//! - **ComparisonTable**: headers (two-tier in grouped mode), rows, and
//!   the row label header
//! - **TableRow**: one document's label and cell values
//!
//! ComparisonTable is a pure presentation structure - cells are already
//! strings, missing cells already hold the sentinel. All merging and
//! ordering happens in the earlier stages.

pub mod table;

pub use table::{project, ComparisonTable, GroupHeader, TableRow, MISSING};
