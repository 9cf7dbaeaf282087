use crate::{order::SortSpec, value::Value};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Copy only the fields `spec` reads out of a JSON document.
///
/// Every key path resolves to the same value on the projection as on
/// `Value::from_json_ref(doc)`, so any comparator built from `spec` orders
/// projections exactly as it orders the full documents. Fields outside the
/// spec are never copied.
#[must_use]
pub fn project_json(doc: &JsonValue, spec: &SortSpec) -> Value {
    let mut root = BTreeMap::new();

    for key in spec {
        if let Some(found) = resolve_json(doc, key.path.segments()) {
            insert_at(&mut root, key.path.segments(), Value::from_json_ref(found));
        }
    }

    Value::Record(root)
}

// Walk object fields only, like `resolve_path` does over records.
fn resolve_json<'a>(doc: &'a JsonValue, segments: &[String]) -> Option<&'a JsonValue> {
    segments
        .iter()
        .try_fold(doc, |node, segment| node.as_object()?.get(segment))
}

// Place `value` at `segments`, creating intermediate records. A full copy
// always replaces a partial one; an existing non-record stops the walk
// because the deeper path resolves to `Null` on both sides.
fn insert_at(root: &mut BTreeMap<String, Value>, segments: &[String], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut node = root;
    for segment in parents {
        let entry = node
            .entry(segment.clone())
            .or_insert_with(|| Value::Record(BTreeMap::new()));

        match entry {
            Value::Record(fields) => node = fields,
            _ => return,
        }
    }

    node.insert(last.clone(), value);
}
