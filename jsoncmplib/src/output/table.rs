//! Table-ready structures for comparison output.
//!
//! This module provides `ComparisonTable`, a presentation-ready data
//! structure that can be directly consumed by renderers or serialized
//! to JSON.
//!
//! The data flow is:
//! 1. Documents (loaded, normalized)
//! 2. ColumnSet (merged, sorted)
//! 3. ComparisonTable (projected rows, formatted strings)
//!
//! Projection never fails: a document lacking a column yields the
//! missing sentinel for that cell.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::merge::ColumnSet;
use crate::normalize::{NormalizedDocument, Record, ROOT_GROUP};
use crate::options::MissingPolicy;

/// Sentinel rendered for cells a document does not provide.
pub const MISSING: &str = "-";

/// Header label for the row-label column.
const LABEL_HEADER: &str = "Submission";

/// Display name of the reserved root group.
const ROOT_GROUP_LABEL: &str = "General";

/// A single row in the table: one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (document name)
    pub label: String,
    /// Cell values in column order (as strings, ready for display)
    pub values: Vec<String>,
}

/// A group header cell spanning its sub-columns (grouped mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHeader {
    /// Display label ("General" for the reserved root group)
    pub label: String,
    /// Number of leaf columns under this group
    pub span: usize,
}

/// Table-ready comparison data.
///
/// This is the final data structure before presentation. Renderers
/// iterate over headers/rows and apply layout - no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    /// Group header tier, present in grouped mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupHeader>>,
    /// Leaf column headers: [label_header, column1, column2, ...]
    pub headers: Vec<String>,
    /// One row per document, in listing order
    pub rows: Vec<TableRow>,
}

impl ComparisonTable {
    /// Build a table from normalized documents and their merged columns.
    pub fn from_documents(
        docs: &[NormalizedDocument],
        columns: &ColumnSet,
        missing: MissingPolicy,
    ) -> Self {
        let rows = docs
            .iter()
            .map(|doc| project(doc, columns, missing))
            .collect();

        ComparisonTable {
            groups: build_group_headers(columns),
            headers: build_headers(columns),
            rows,
        }
    }
}

/// Human-readable label for a raw key: underscores become spaces.
fn display_key(key: &str) -> String {
    key.replace('_', " ")
}

/// Display label for a group name.
fn group_label(name: &str) -> String {
    if name == ROOT_GROUP {
        ROOT_GROUP_LABEL.to_string()
    } else {
        display_key(name)
    }
}

/// Build the group header tier (grouped mode only).
fn build_group_headers(columns: &ColumnSet) -> Option<Vec<GroupHeader>> {
    match columns {
        ColumnSet::Flat(_) => None,
        ColumnSet::Grouped(groups) => Some(
            groups
                .iter()
                .map(|g| GroupHeader {
                    label: group_label(&g.name),
                    span: g.keys.len(),
                })
                .collect(),
        ),
    }
}

/// Build the leaf header row, label column first.
fn build_headers(columns: &ColumnSet) -> Vec<String> {
    let mut headers = vec![LABEL_HEADER.to_string()];

    match columns {
        ColumnSet::Flat(keys) => {
            headers.extend(keys.iter().map(|k| display_key(k)));
        }
        ColumnSet::Grouped(groups) => {
            for group in groups {
                headers.extend(group.keys.iter().map(|k| display_key(k)));
            }
        }
    }

    headers
}

/// Whether a value counts as missing under `FalsyAsMissing`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Coerce a cell value to its display string.
///
/// Strings render unquoted; arrays and leftover nested objects render
/// as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
        other => other.to_string(),
    }
}

/// Format one cell, applying the missing policy.
fn cell(value: Option<&Value>, missing: MissingPolicy) -> String {
    match value {
        None => MISSING.to_string(),
        Some(v) if missing == MissingPolicy::FalsyAsMissing && is_falsy(v) => MISSING.to_string(),
        Some(v) => display_value(v),
    }
}

/// Project one document onto the merged column set.
///
/// Yields one cell per column; a column the document lacks renders the
/// sentinel, never an error. A record whose shape does not match the
/// column set (flat record against grouped columns) renders all cells
/// as missing.
pub fn project(
    doc: &NormalizedDocument,
    columns: &ColumnSet,
    missing: MissingPolicy,
) -> TableRow {
    let values = match (columns, &doc.record) {
        (ColumnSet::Flat(keys), Record::Flat(record)) => keys
            .iter()
            .map(|key| cell(record.get(key), missing))
            .collect(),
        (ColumnSet::Grouped(groups), Record::Grouped(record)) => groups
            .iter()
            .flat_map(|group| {
                group.keys.iter().map(|key| {
                    let value = record.get(&group.name).and_then(|keys| keys.get(key));
                    cell(value, missing)
                })
            })
            .collect(),
        (columns, _) => vec![MISSING.to_string(); columns.len()],
    };

    TableRow {
        label: doc.name.clone(),
        values,
    }
}
