//! Deletion by path.
//!
//! Every step but the last is walked without creating anything. The last step
//! picks what is removed:
//!
//! - `[i]` removes one element, shifting the rest left;
//! - `[start:end]` removes the whole range;
//! - a bare key removes that entry from its object, keeping the order of the
//!   remaining keys.
//!
//! If any step fails to resolve the call is a no-op.

use serde_json::Value;
use tracing::debug;

use crate::container::Container;
use crate::error::{Error, Result};
use crate::path::{AsPath, IndexOp, Step};
use crate::value::{resolve_index, slice_bounds};

impl Container {
    /// Remove the slot addressed by `path` and return what was there.
    ///
    /// Returns `Ok(None)` when the path does not resolve. A slice returns the
    /// removed elements as an array, or `None` if the range was empty.
    ///
    /// # Errors
    ///
    /// [`Error::Path`] if the path does not parse, and [`Error::SliceInPath`]
    /// if a slice appears before the last step.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtree_core::Container;
    /// use serde_json::json;
    ///
    /// let mut c = Container::new(None, Some(json!({"a": [10, 20, 30]}))).unwrap();
    /// assert_eq!(c.delete_entry("a[1]").unwrap(), Some(json!(20)));
    /// assert_eq!(c.root(), &json!({"a": [10, 30]}));
    /// assert_eq!(c.delete_entry("missing[0]").unwrap(), None);
    /// ```
    pub fn delete_entry<P: AsPath + ?Sized>(&mut self, path: &P) -> Result<Option<Value>> {
        let path = path.as_path()?;
        if path.has_interior_slice() {
            return Err(Error::SliceInPath {
                path: path.to_string(),
            });
        }

        let steps = path.steps();
        let Some((terminal, init)) = steps.split_last() else {
            return Ok(None);
        };
        let mut slot = &mut self.root;
        for step in init {
            match child_mut(slot, *step) {
                Some(child) => slot = child,
                None => {
                    debug!(%path, at = %step, "nothing to delete");
                    return Ok(None);
                }
            }
        }

        let removed = remove_from(slot, *terminal);
        if removed.is_none() {
            debug!(%path, "nothing to delete");
        }
        Ok(removed)
    }
}

fn child_mut<'v>(slot: &'v mut Value, step: Step<'_>) -> Option<&'v mut Value> {
    match (slot, step) {
        (Value::Object(map), Step::Key(key)) => map.get_mut(key),
        (Value::Array(items), Step::Op(IndexOp::Index(i))) => {
            let idx = resolve_index(i, items.len())?;
            items.get_mut(idx)
        }
        _ => None,
    }
}

fn remove_from(slot: &mut Value, step: Step<'_>) -> Option<Value> {
    match (slot, step) {
        (Value::Object(map), Step::Key(key)) => map.shift_remove(key),
        (Value::Array(items), Step::Op(IndexOp::Index(i))) => {
            let idx = resolve_index(i, items.len())?;
            Some(items.remove(idx))
        }
        (Value::Array(items), Step::Op(IndexOp::Slice { start, end })) => {
            let range = slice_bounds(start, end, items.len());
            if range.is_empty() {
                return None;
            }
            Some(Value::Array(items.drain(range).collect()))
        }
        _ => None,
    }
}
