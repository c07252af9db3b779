//! Schema normalization: nested JSON objects to tabular records.
//!
//! This is the core of the library. Measurement files disagree about
//! structure - some nest their metrics under sections, some keep a flat
//! key set - and this module maps every document onto one of two
//! table-ready shapes:
//!
//! - **Flat**: nesting of arbitrary depth collapses into single keys
//!   joined by underscores (`{"b": {"c": 2}}` -> `b_c = 2`).
//! - **Grouped**: one level only. A top-level object becomes a named
//!   column group holding its own keys verbatim; top-level scalars and
//!   arrays land in the reserved root group.
//!
//! Arrays are opaque leaves in both modes - they are never indexed or
//! flattened. JSON values are trees, so plain recursion needs no cycle
//! handling.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::document::Document;
use crate::options::Mode;

/// Reserved group name for top-level scalars in grouped mode.
///
/// The underscore prefix makes it sort ahead of ordinary lowercase
/// group names under case-sensitive ordering, so the general columns
/// lead the table. Displayed as "General".
pub const ROOT_GROUP: &str = "_root";

/// Flat record: underscore-joined key path to leaf value.
pub type FlatRecord = BTreeMap<String, Value>;

/// Grouped record: group name to that group's key/value pairs.
pub type GroupedRecord = BTreeMap<String, BTreeMap<String, Value>>;

/// A document's normalized shape under one of the two strategies.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Flat(FlatRecord),
    Grouped(GroupedRecord),
}

/// A document reduced to its normalized record.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDocument {
    /// Display name (row label)
    pub name: String,
    /// Normalized key/value structure
    pub record: Record,
}

/// Recursively flatten a JSON object into underscore-joined key paths.
///
/// Leaf values (scalars, arrays, null) keep their position under the
/// joined path of the keys leading to them. Flattening an already-flat
/// object returns the identical mapping.
pub fn flatten(obj: &Map<String, Value>) -> FlatRecord {
    let mut out = FlatRecord::new();
    flatten_into(obj, "", &mut out);
    out
}

fn flatten_into(obj: &Map<String, Value>, prefix: &str, out: &mut FlatRecord) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}_{}", prefix, key)
        };

        match value {
            Value::Object(inner) => flatten_into(inner, &path, out),
            _ => {
                out.insert(path, value.clone());
            }
        }
    }
}

/// Group a JSON object one level deep.
///
/// Top-level objects become named groups carrying their keys verbatim -
/// deeper nesting inside a group is left as-is and renders via string
/// coercion. Everything else goes into [`ROOT_GROUP`].
pub fn group(obj: &Map<String, Value>) -> GroupedRecord {
    let mut out = GroupedRecord::new();

    for (key, value) in obj {
        match value {
            Value::Object(inner) => {
                out.insert(
                    key.clone(),
                    inner.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
                );
            }
            _ => {
                out.entry(ROOT_GROUP.to_string())
                    .or_default()
                    .insert(key.clone(), value.clone());
            }
        }
    }

    out
}

/// Normalize a parsed object under the requested strategy.
pub fn normalize(obj: &Map<String, Value>, mode: Mode) -> Record {
    match mode {
        Mode::Flat => Record::Flat(flatten(obj)),
        Mode::Grouped => Record::Grouped(group(obj)),
    }
}

/// Normalize a set of loaded documents, preserving their order.
pub fn normalize_documents(docs: &[Document], mode: Mode) -> Vec<NormalizedDocument> {
    docs.iter()
        .map(|doc| NormalizedDocument {
            name: doc.name.clone(),
            record: normalize(&doc.value, mode),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_flatten_nested() {
        let flat = flatten(&obj(json!({"a": 1, "b": {"c": 2, "d": 3}})));

        assert_eq!(flat.len(), 3);
        assert_eq!(flat["a"], json!(1));
        assert_eq!(flat["b_c"], json!(2));
        assert_eq!(flat["b_d"], json!(3));
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let flat = flatten(&obj(json!({"a": {"b": {"c": {"d": 4}}}})));

        assert_eq!(flat.len(), 1);
        assert_eq!(flat["a_b_c_d"], json!(4));
    }

    #[test]
    fn test_flatten_idempotent_on_flat_input() {
        let input = obj(json!({"a": 1, "b_c": 2, "d": "x"}));
        let once = flatten(&input);
        let twice = flatten(&once.clone().into_iter().collect());

        assert_eq!(once, twice);
        assert_eq!(once, input.into_iter().collect::<FlatRecord>());
    }

    #[test]
    fn test_flatten_arrays_are_opaque() {
        let flat = flatten(&obj(json!({"a": [1, {"b": 2}], "c": {"d": [3]}})));

        assert_eq!(flat["a"], json!([1, {"b": 2}]));
        assert_eq!(flat["c_d"], json!([3]));
    }

    #[test]
    fn test_flatten_null_is_a_leaf() {
        let flat = flatten(&obj(json!({"a": null, "b": {"c": null}})));

        assert_eq!(flat["a"], Value::Null);
        assert_eq!(flat["b_c"], Value::Null);
    }

    #[test]
    fn test_group_basic() {
        let grouped = group(&obj(json!({"a": 1, "b": {"c": 2}})));

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[ROOT_GROUP]["a"], json!(1));
        assert_eq!(grouped["b"]["c"], json!(2));
    }

    #[test]
    fn test_group_is_one_level_only() {
        let grouped = group(&obj(json!({"timing": {"detail": {"wall": 1}}})));

        // Nesting inside a group stays as a raw value
        assert_eq!(grouped["timing"]["detail"], json!({"wall": 1}));
    }

    #[test]
    fn test_group_scalars_and_arrays_go_to_root() {
        let grouped = group(&obj(json!({"score": 7, "tags": ["a", "b"], "ok": true})));

        assert_eq!(grouped.len(), 1);
        let root = &grouped[ROOT_GROUP];
        assert_eq!(root["score"], json!(7));
        assert_eq!(root["tags"], json!(["a", "b"]));
        assert_eq!(root["ok"], json!(true));
    }

    #[test]
    fn test_group_null_goes_to_root() {
        let grouped = group(&obj(json!({"a": null})));

        assert_eq!(grouped[ROOT_GROUP]["a"], Value::Null);
    }

    #[test]
    fn test_group_all_nested_has_no_root() {
        let grouped = group(&obj(json!({"timing": {"wall": 1}})));

        assert!(!grouped.contains_key(ROOT_GROUP));
    }

    #[test]
    fn test_root_group_sorts_first() {
        let grouped = group(&obj(json!({"alpha": {"x": 1}, "score": 2})));

        let names: Vec<&str> = grouped.keys().map(|s| s.as_str()).collect();
        assert_eq!(names, vec![ROOT_GROUP, "alpha"]);
    }

    #[test]
    fn test_normalize_dispatch() {
        let input = obj(json!({"a": 1, "b": {"c": 2}}));

        assert!(matches!(normalize(&input, Mode::Flat), Record::Flat(_)));
        assert!(matches!(
            normalize(&input, Mode::Grouped),
            Record::Grouped(_)
        ));
    }

    #[test]
    fn test_normalize_documents_keeps_order() {
        use std::path::PathBuf;

        let docs = vec![
            Document {
                name: "run_02".to_string(),
                path: PathBuf::from("run_02.json"),
                value: obj(json!({"a": 1})),
            },
            Document {
                name: "run_01".to_string(),
                path: PathBuf::from("run_01.json"),
                value: obj(json!({"a": 2})),
            },
        ];

        let normalized = normalize_documents(&docs, Mode::Flat);

        assert_eq!(normalized[0].name, "run_02");
        assert_eq!(normalized[1].name, "run_01");
    }
}
