//! Column collection: merge the key sets of all documents.
//!
//! The merge sits between normalization and table building. It computes
//! the union of columns discovered across every document - the table
//! shows a column as soon as any one document provides it, and documents
//! lacking it render the missing sentinel downstream.
//!
//! The data pipeline is:
//! 1. Documents (loaded, normalized)
//! 2. ColumnSet (merged, sorted)
//! 3. ComparisonTable (projected rows, formatted strings)
//!
//! Ordering is lexicographic and case-sensitive over the raw key
//! strings, so it is deterministic regardless of document order. The
//! reserved root group sorts ahead of lowercase group names through its
//! underscore prefix.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::normalize::{NormalizedDocument, Record};

/// One named column group and its sorted sub-columns (grouped mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnGroup {
    /// Raw group name (`_root` for the reserved general group)
    pub name: String,
    /// Sorted union of the keys seen in this group across all documents
    pub keys: Vec<String>,
}

/// The merged, ordered column set across all documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnSet {
    /// Single tier of underscore-joined key paths
    Flat(Vec<String>),
    /// Two tiers: groups, each with its own keys
    Grouped(Vec<ColumnGroup>),
}

impl ColumnSet {
    /// Total number of leaf columns.
    pub fn len(&self) -> usize {
        match self {
            ColumnSet::Flat(keys) => keys.len(),
            ColumnSet::Grouped(groups) => groups.iter().map(|g| g.keys.len()).sum(),
        }
    }

    /// Whether no columns were discovered at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the union of columns across all documents.
///
/// All records are assumed to share one normalization mode (they come
/// from a single [`normalize_documents`] pass); the first record decides
/// which `ColumnSet` shape is produced.
///
/// [`normalize_documents`]: crate::normalize::normalize_documents
pub fn collect_columns(docs: &[NormalizedDocument]) -> ColumnSet {
    let grouped = matches!(
        docs.first().map(|d| &d.record),
        Some(Record::Grouped(_)) | None
    );

    if grouped {
        let mut groups: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for doc in docs {
            if let Record::Grouped(record) = &doc.record {
                for (group, keys) in record {
                    let entry = groups.entry(group.as_str()).or_default();
                    entry.extend(keys.keys().map(String::as_str));
                }
            }
        }

        ColumnSet::Grouped(
            groups
                .into_iter()
                .map(|(name, keys)| ColumnGroup {
                    name: name.to_string(),
                    keys: keys.into_iter().map(str::to_string).collect(),
                })
                .collect(),
        )
    } else {
        let mut keys: BTreeSet<&str> = BTreeSet::new();
        for doc in docs {
            if let Record::Flat(record) = &doc.record {
                keys.extend(record.keys().map(String::as_str));
            }
        }

        ColumnSet::Flat(keys.into_iter().map(str::to_string).collect())
    }
}
