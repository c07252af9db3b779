//! # jsoncmplib
//!
//! Normalizes heterogeneous JSON measurement files into a merged,
//! table-ready comparison structure.
//!
//! ## Overview
//!
//! Measurement runs rarely agree on a schema: one file nests its metrics
//! under sections, another keeps a flat key set, a third is missing half
//! the fields. This library loads a set of such files and aligns them
//! into one table - a row per file, a column per discovered key, and a
//! `-` sentinel wherever a file has nothing to say.
//!
//! Two normalization strategies are supported:
//!
//! - **Grouped** (default): top-level objects become named column
//!   groups; top-level scalars collapse into a synthetic "General" group.
//!   One level only.
//! - **Flat**: nesting of any depth flattens into underscore-joined key
//!   paths (`timing.wall_ms` -> `timing_wall_ms`).
//!
//! The pipeline is explicit and side-effect free:
//! discover files -> load in parallel -> normalize -> merge columns ->
//! project rows. Files that fail to read or parse are logged and
//! dropped; they never abort the rest of the set.
//!
//! ## Example
//!
//! ```rust
//! use jsoncmplib::{compare_directory, CompareOptions, Mode};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Two runs with overlapping but unequal schemas
//! let dir = tempdir().unwrap();
//! fs::write(
//!     dir.path().join("run_01.json"),
//!     r#"{"score": 10, "timing": {"wall_ms": 120}}"#,
//! ).unwrap();
//! fs::write(
//!     dir.path().join("run_02.json"),
//!     r#"{"score": 12}"#,
//! ).unwrap();
//!
//! let table = compare_directory(dir.path(), CompareOptions::new()).unwrap();
//!
//! assert_eq!(table.rows.len(), 2);
//! // run_02 has no timing group: its cell holds the sentinel
//! assert_eq!(table.rows[1].values.last().unwrap(), "-");
//!
//! // Flat mode instead
//! let table = compare_directory(
//!     dir.path(),
//!     CompareOptions::new().mode(Mode::Flat),
//! ).unwrap();
//! assert!(table.headers.contains(&"timing wall ms".to_string()));
//! ```

pub mod compare;
pub mod document;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod options;
pub mod output;
pub mod source;

pub use compare::{compare_directory, compare_files};
pub use document::{load_document, load_documents, Document};
pub use error::JsonCmpError;
pub use merge::{collect_columns, ColumnGroup, ColumnSet};
pub use normalize::{
    flatten, group, normalize, normalize_documents, FlatRecord, GroupedRecord,
    NormalizedDocument, Record, ROOT_GROUP,
};
pub use options::{CompareOptions, MissingPolicy, Mode};
pub use output::{project, ComparisonTable, GroupHeader, TableRow, MISSING};
pub use source::{discover_files, FilterConfig};

/// Result type for jsoncmplib operations
pub type Result<T> = std::result::Result<T, JsonCmpError>;
