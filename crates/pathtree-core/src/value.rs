//! Shape helpers over `serde_json::Value`, the node type of the tree.
//!
//! The tree is a plain `serde_json::Value` built with the `preserve_order`
//! feature, so objects keep their insertion order. Navigation code matches on
//! the enum directly; the helpers here cover the steps shared by the reader,
//! writer and remover: shape coercion, index normalization and slice bounds.

use std::ops::Range;

use serde_json::{Map, Value};
use tracing::debug;

/// Name of a value's shape, for errors and log lines.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Make `slot` an object, replacing whatever it held, and return the map.
pub fn coerce_object(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        debug!(replaced = kind_name(slot), "coercing slot to object");
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just coerced to an object"),
    }
}

/// Make `slot` an array, replacing whatever it held, and return the vector.
pub fn coerce_array(slot: &mut Value) -> &mut Vec<Value> {
    if !slot.is_array() {
        debug!(replaced = kind_name(slot), "coercing slot to array");
        *slot = Value::Array(Vec::new());
    }
    match slot {
        Value::Array(items) => items,
        _ => unreachable!("slot was just coerced to an array"),
    }
}

/// Normalize a possibly negative index against `len`.
///
/// Returns `None` when the index falls outside `0..len`.
pub fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len.checked_add(index)? } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

/// Python-style slice bounds: negative ends count from the back, both ends are
/// clamped into `0..=len`, and an inverted range is empty.
pub fn slice_bounds(start: Option<i64>, end: Option<i64>, len: usize) -> Range<usize> {
    let clamp = |bound: i64| -> usize {
        let signed_len = i64::try_from(len).unwrap_or(i64::MAX);
        let b = if bound < 0 {
            signed_len.saturating_add(bound)
        } else {
            bound
        };
        usize::try_from(b.clamp(0, signed_len)).unwrap_or(len)
    };
    let lo = start.map_or(0, clamp);
    let hi = end.map_or(len, clamp);
    if lo >= hi {
        lo..lo
    } else {
        lo..hi
    }
}
