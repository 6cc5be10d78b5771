/// Delete-path tests: index and slice removal, bare-key removal, and no-ops
/// when the target is missing.
use pathtree_core::{Container, Error, PathError};
use serde_json::{json, Value};

fn with(data: Value) -> Container {
    Container::new(None, Some(data)).unwrap()
}

// ============================================================================
// 1. Index and slice removal
// ============================================================================

#[test]
fn delete_by_index_shifts_left() {
    let mut c = with(json!({"a": [10, 20, 30]}));
    assert_eq!(c.delete_entry("a[1]").unwrap(), Some(json!(20)));
    assert_eq!(c.root(), &json!({"a": [10, 30]}));
}

#[test]
fn delete_by_negative_index() {
    let mut c = with(json!({"a": [10, 20, 30]}));
    assert_eq!(c.delete_entry("a[-1]").unwrap(), Some(json!(30)));
    assert_eq!(c.root(), &json!({"a": [10, 20]}));
}

#[test]
fn delete_slice_range() {
    let mut c = with(json!({"a": [0, 1, 2, 3, 4]}));
    assert_eq!(c.delete_entry("a[1:3]").unwrap(), Some(json!([1, 2])));
    assert_eq!(c.root(), &json!({"a": [0, 3, 4]}));

    assert_eq!(c.delete_entry("a[-2:]").unwrap(), Some(json!([3, 4])));
    assert_eq!(c.root(), &json!({"a": [0]}));
}

#[test]
fn empty_slice_is_a_noop() {
    let mut c = with(json!({"a": [0, 1]}));
    assert_eq!(c.delete_entry("a[1:1]").unwrap(), None);
    assert_eq!(c.root(), &json!({"a": [0, 1]}));
}

#[test]
fn delete_inside_nested_structure() {
    let mut c = with(json!({"rfps": [{"data": {"tags": ["x", "y"]}}]}));
    c.delete_entry("rfps[0].data.tags[0]").unwrap();
    assert_eq!(c.root(), &json!({"rfps": [{"data": {"tags": ["y"]}}]}));
}

#[test]
fn chained_brackets_delete_last_op_only() {
    let mut c = with(json!({"grid": [[1, 2], [3, 4]]}));
    c.delete_entry("grid[1][0]").unwrap();
    assert_eq!(c.root(), &json!({"grid": [[1, 2], [4]]}));
}

// ============================================================================
// 2. Bare keys
// ============================================================================

#[test]
fn bare_key_is_removed_from_parent() {
    let mut c = with(json!({"a": {"x": 1, "y": 2, "z": 3}}));
    assert_eq!(c.delete_entry("a.y").unwrap(), Some(json!(2)));
    assert_eq!(c.root(), &json!({"a": {"x": 1, "z": 3}}));
}

#[test]
fn bare_key_removal_keeps_order() {
    let mut c = with(json!({"first": 1, "second": 2, "third": 3, "fourth": 4}));
    c.delete_entry("second").unwrap();
    let map = c.into_inner();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["first", "third", "fourth"]);
}

#[test]
fn null_valued_key_can_be_removed() {
    let mut c = with(json!({"a": null, "b": 1}));
    assert_eq!(c.delete_entry("a").unwrap(), Some(Value::Null));
    assert_eq!(c.root(), &json!({"b": 1}));
}

// ============================================================================
// 3. No-ops and errors
// ============================================================================

#[test]
fn missing_targets_are_noops() {
    let mut c = with(json!({"a": [1], "s": "text"}));
    let before = c.clone();
    for path in ["a[5]", "a[-2]", "missing", "missing[0]", "a.k", "s[0]", "s.k", "a[0].k", "[0]"] {
        assert_eq!(c.delete_entry(path).unwrap(), None, "path {path:?}");
    }
    assert_eq!(c, before);
}

#[test]
fn delete_never_creates_structure() {
    let mut c = Container::default();
    c.delete_entry("a.b[0].c").unwrap();
    assert_eq!(c.root(), &json!({}));
}

#[test]
fn interior_slice_is_rejected() {
    let mut c = with(json!({"a": [[1, 2], [3]]}));
    assert!(matches!(
        c.delete_entry("a[0:1][0]"),
        Err(Error::SliceInPath { .. })
    ));
    assert_eq!(c.root(), &json!({"a": [[1, 2], [3]]}));
}

#[test]
fn empty_path_fails() {
    let mut c = Container::default();
    assert!(matches!(
        c.delete_entry(""),
        Err(Error::Path(PathError::Empty))
    ));
}
