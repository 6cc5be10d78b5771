//! Read-only path navigation.
//!
//! A read never mutates the tree and never fails on shape mismatches: a missing
//! key, an index out of range, a key applied to a non-object, a bracket applied
//! to a non-array, or a null anywhere along the way all resolve to "not found".
//! Only a path that fails to parse is an error.
//!
//! Slices may appear anywhere in a read path. A slice yields a copied
//! sub-array, and later steps navigate into that copy.

use std::borrow::Cow;

use serde_json::Value;

use crate::container::Container;
use crate::error::Result;
use crate::path::{AsPath, IndexOp, Path, Step};
use crate::value::{resolve_index, slice_bounds};

impl Container {
    /// Look up `path`, returning `default` when it does not resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtree_core::Container;
    /// use serde_json::json;
    ///
    /// let c = Container::new(None, Some(json!({"a": [10, 20, 30]}))).unwrap();
    /// assert_eq!(c.get_value("a[-1]", json!(null)).unwrap(), json!(30));
    /// assert_eq!(c.get_value("a[1:]", json!(null)).unwrap(), json!([20, 30]));
    /// assert_eq!(c.get_value("a[7]", json!("none")).unwrap(), json!("none"));
    /// ```
    pub fn get_value<P: AsPath + ?Sized>(&self, path: &P, default: Value) -> Result<Value> {
        Ok(self.get(path)?.unwrap_or(default))
    }

    /// Look up `path`, returning `None` when it does not resolve.
    pub fn get<P: AsPath + ?Sized>(&self, path: &P) -> Result<Option<Value>> {
        let path = path.as_path()?;
        Ok(lookup(&self.root, &path).map(Cow::into_owned))
    }

    /// True if `path` resolves to a non-null value.
    pub fn contains<P: AsPath + ?Sized>(&self, path: &P) -> Result<bool> {
        let path = path.as_path()?;
        Ok(lookup(&self.root, &path).is_some())
    }
}

/// Walk `path` from `root`, borrowing for as long as no slice forces a copy.
pub(crate) fn lookup<'a>(root: &'a Value, path: &Path) -> Option<Cow<'a, Value>> {
    let mut current = Cow::Borrowed(root);
    for step in path.steps() {
        current = match step {
            Step::Key(key) => child_by_key(current, key)?,
            Step::Op(op) => child_by_op(current, op)?,
        };
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

fn child_by_key<'a>(current: Cow<'a, Value>, key: &str) -> Option<Cow<'a, Value>> {
    match current {
        Cow::Borrowed(Value::Object(map)) => map.get(key).map(Cow::Borrowed),
        Cow::Owned(Value::Object(mut map)) => map.swap_remove(key).map(Cow::Owned),
        _ => None,
    }
}

fn child_by_op(current: Cow<'_, Value>, op: IndexOp) -> Option<Cow<'_, Value>> {
    match (current, op) {
        (Cow::Borrowed(Value::Array(items)), IndexOp::Index(i)) => {
            let idx = resolve_index(i, items.len())?;
            items.get(idx).map(Cow::Borrowed)
        }
        (Cow::Owned(Value::Array(mut items)), IndexOp::Index(i)) => {
            let idx = resolve_index(i, items.len())?;
            Some(Cow::Owned(items.swap_remove(idx)))
        }
        (Cow::Borrowed(Value::Array(items)), IndexOp::Slice { start, end }) => {
            let range = slice_bounds(start, end, items.len());
            Some(Cow::Owned(Value::Array(items[range].to_vec())))
        }
        (Cow::Owned(Value::Array(mut items)), IndexOp::Slice { start, end }) => {
            let range = slice_bounds(start, end, items.len());
            Some(Cow::Owned(Value::Array(items.drain(range).collect())))
        }
        _ => None,
    }
}
