//! Measurement documents: loading and parsing.
//!
//! A [`Document`] pairs a display name (the file stem) with the parsed
//! top-level JSON object of one measurement file. Loading a whole set is
//! parallel with per-file failure isolation: a file that cannot be read
//! or parsed is logged and dropped, the rest of the set is unaffected.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde_json::{Map, Value};

use crate::error::JsonCmpError;
use crate::Result;

/// One parsed measurement file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Display name: the file stem without the `.json` extension
    pub name: String,
    /// Where the file came from
    pub path: PathBuf,
    /// The parsed top-level object
    pub value: Map<String, Value>,
}

/// Derive the display name from a file path (stem without extension).
fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Load and parse a single measurement file.
///
/// The file must hold a JSON object at the top level; anything else
/// (array, scalar) is rejected since it has no keys to become columns.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|e| JsonCmpError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| JsonCmpError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(map) => Ok(Document {
            name: document_name(path),
            path: path.to_path_buf(),
            value: map,
        }),
        _ => Err(JsonCmpError::NotAnObject(path.to_path_buf())),
    }
}

/// Load a set of measurement files in parallel.
///
/// Every file is attempted; a failed load is reported via `log::warn!`
/// and excluded from the result. The returned documents preserve the
/// input path order regardless of which load finished first, so listing
/// order stays the row order downstream.
pub fn load_documents(paths: &[PathBuf]) -> Vec<Document> {
    paths
        .par_iter()
        .map(|path| match load_document(path) {
            Ok(doc) => Some(doc),
            Err(e) => {
                log::warn!("skipping '{}': {}", path.display(), e);
                None
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}
