//! High-level comparison API.
//!
//! This module wires the pipeline together:
//! discover -> load (parallel) -> normalize -> merge -> project.
//!
//! Each stage passes its result to the next by value - there is no
//! shared accumulator and no callback counting. The parallel load joins
//! on the full set before the merge runs, so the table is only built
//! once every load attempt has resolved.

use std::path::{Path, PathBuf};

use crate::document::load_documents;
use crate::error::JsonCmpError;
use crate::merge::collect_columns;
use crate::normalize::normalize_documents;
use crate::options::CompareOptions;
use crate::output::ComparisonTable;
use crate::source::discover_files;
use crate::Result;

/// Build a comparison table from the JSON files under a directory.
///
/// Discovers `.json` files (applying the options' glob filter), loads
/// them in parallel, and merges them into one table. Files that fail to
/// load are logged and skipped; the table carries the rest.
///
/// # Example
///
/// ```rust,ignore
/// use jsoncmplib::{compare_directory, CompareOptions, Mode};
///
/// let table = compare_directory("./measurements", CompareOptions::new())?;
///
/// // Flat mode instead of grouped
/// let table = compare_directory(
///     "./measurements",
///     CompareOptions::new().mode(Mode::Flat),
/// )?;
/// ```
pub fn compare_directory(
    path: impl AsRef<Path>,
    options: CompareOptions,
) -> Result<ComparisonTable> {
    let path = path.as_ref();
    let files = discover_files(path, &options.filter)?;

    if files.is_empty() {
        return Err(JsonCmpError::NoDocuments(path.to_path_buf()));
    }

    build_table(path, &files, &options)
}

/// Build a comparison table from an explicit list of files.
///
/// Row order follows the list order. The options' filter does not apply
/// here - an explicit list is taken as-is.
pub fn compare_files(paths: &[PathBuf], options: CompareOptions) -> Result<ComparisonTable> {
    let origin = paths
        .first()
        .and_then(|p| p.parent())
        .map(Path::to_path_buf)
        .unwrap_or_default();

    build_table(&origin, paths, &options)
}

fn build_table(
    origin: &Path,
    files: &[PathBuf],
    options: &CompareOptions,
) -> Result<ComparisonTable> {
    let docs = load_documents(files);

    if docs.is_empty() {
        return Err(JsonCmpError::NoDocuments(origin.to_path_buf()));
    }

    let normalized = normalize_documents(&docs, options.mode);
    let columns = collect_columns(&normalized);

    Ok(ComparisonTable::from_documents(
        &normalized,
        &columns,
        options.missing,
    ))
}
