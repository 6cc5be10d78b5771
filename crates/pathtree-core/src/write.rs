//! Auto-vivifying writes.
//!
//! A write runs in two phases. Navigation walks every step but the last,
//! creating whatever structure is missing and replacing nodes whose shape does
//! not fit the next step: a key step needs an object, a bracket step needs an
//! array. Then exactly one terminal assignment stores the caller's value into
//! the slot named by the last step, overwriting any placeholder left there.
//!
//! Shape mismatches are never errors on this path. A scalar sitting where an
//! object is needed is discarded and replaced, and lists grow with nulls to
//! reach an index past their end.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::container::Container;
use crate::error::{Error, Result};
use crate::path::{AsPath, IndexOp, Path, Step};
use crate::value::{coerce_array, coerce_object, kind_name, resolve_index, slice_bounds};

impl Container {
    /// Store `value` at `path`, creating missing structure along the way.
    ///
    /// # Errors
    ///
    /// - [`Error::Path`] if the path does not parse.
    /// - [`Error::RootNotIndexable`] if the path starts with a bracket.
    /// - [`Error::SliceInPath`] if a slice appears before the last step.
    /// - [`Error::SliceAssignment`] if the last step is a slice and `value` is not an array.
    /// - [`Error::IndexOutOfRange`] if a negative index reaches before the start of a list.
    /// - [`Error::IndexLimit`] if an index exceeds [`Options::max_index`](crate::Options).
    ///
    /// Every error is raised before the tree is touched: a failed call leaves
    /// the container exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtree_core::Container;
    /// use serde_json::json;
    ///
    /// let mut c = Container::default();
    /// c.set_value("a.b[2].c", json!("X")).unwrap();
    /// assert_eq!(c.root(), &json!({"a": {"b": [null, null, {"c": "X"}]}}));
    /// ```
    pub fn set_value<P: AsPath + ?Sized>(&mut self, path: &P, value: Value) -> Result<()> {
        let path = path.as_path()?;
        check_write_path(&path, self.options.max_index)?;

        let steps = path.steps();
        let Some((terminal, init)) = steps.split_last() else {
            return Ok(());
        };
        if matches!(terminal, Step::Op(IndexOp::Slice { .. })) && !value.is_array() {
            return Err(Error::SliceAssignment {
                found: kind_name(&value),
            });
        }

        check_negative_indices(&self.root, &steps)?;

        let max_index = self.options.max_index;
        let mut slot = &mut self.root;
        for step in init {
            slot = descend(slot, *step, max_index)?;
        }
        assign(slot, *terminal, value, max_index)
    }
}

/// Reject paths that cannot be written before anything is touched.
fn check_write_path(path: &Path, max_index: usize) -> Result<()> {
    if path.segments().first().is_some_and(|segment| segment.key.is_none()) {
        return Err(Error::RootNotIndexable);
    }
    if path.has_interior_slice() {
        return Err(Error::SliceInPath {
            path: path.to_string(),
        });
    }
    for segment in path.segments() {
        for op in &segment.ops {
            if let IndexOp::Index(i) = *op {
                match usize::try_from(i) {
                    Ok(idx) if idx > max_index => {
                        return Err(Error::IndexLimit {
                            index: idx,
                            max: max_index,
                        });
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Follow `steps` through the current tree without changing it and fail if a
/// negative index would reach before the start of its list.
///
/// The walk mirrors what navigation will do. Once a step lands on a missing,
/// null or wrongly shaped node, that node would be replaced by an empty
/// container, so every list from there on has length zero.
fn check_negative_indices(root: &Value, steps: &[Step<'_>]) -> Result<()> {
    let mut node = Some(root);
    for step in steps {
        node = match *step {
            Step::Key(key) => node.and_then(Value::as_object).and_then(|map| map.get(key)),
            Step::Op(IndexOp::Index(i)) => {
                let items = node.and_then(Value::as_array);
                let len = items.map_or(0, Vec::len);
                let idx = if i < 0 {
                    resolve_index(i, len).ok_or(Error::IndexOutOfRange { index: i, len })?
                } else {
                    usize::try_from(i).unwrap_or(usize::MAX)
                };
                items.and_then(|items| items.get(idx))
            }
            Step::Op(IndexOp::Slice { .. }) => None,
        };
    }
    Ok(())
}

/// Move one step down, leaving a container placeholder in the child slot so the
/// next step has something to work with.
fn descend<'v>(slot: &'v mut Value, step: Step<'_>, max_index: usize) -> Result<&'v mut Value> {
    match step {
        Step::Key(key) => {
            let map = coerce_object(slot);
            let child = map.entry(key).or_insert(Value::Null);
            if !child.is_object() && !child.is_array() {
                trace!(key, "placeholder object");
                *child = Value::Object(Map::new());
            }
            Ok(child)
        }
        Step::Op(IndexOp::Index(i)) => {
            let items = coerce_array(slot);
            let idx = grow_to(items, i, max_index)?;
            let child = &mut items[idx];
            if child.is_null() {
                trace!(index = idx, "placeholder object");
                *child = Value::Object(Map::new());
            }
            Ok(child)
        }
        Step::Op(op @ IndexOp::Slice { .. }) => Err(Error::SliceInPath {
            path: op.to_string(),
        }),
    }
}

/// The single terminal write.
fn assign(slot: &mut Value, step: Step<'_>, value: Value, max_index: usize) -> Result<()> {
    match step {
        Step::Key(key) => {
            coerce_object(slot).insert(key.to_string(), value);
        }
        Step::Op(IndexOp::Index(i)) => {
            let items = coerce_array(slot);
            let idx = grow_to(items, i, max_index)?;
            items[idx] = value;
        }
        Step::Op(IndexOp::Slice { start, end }) => {
            let items = coerce_array(slot);
            let range = slice_bounds(start, end, items.len());
            let replacement = match value {
                Value::Array(values) => values,
                other => {
                    return Err(Error::SliceAssignment {
                        found: kind_name(&other),
                    })
                }
            };
            debug!(
                start = range.start,
                end = range.end,
                with = replacement.len(),
                "splicing list"
            );
            items.splice(range, replacement);
        }
    }
    Ok(())
}

/// Resolve `index` for writing, padding the list with nulls when it points past
/// the end.
fn grow_to(items: &mut Vec<Value>, index: i64, max_index: usize) -> Result<usize> {
    let len = items.len();
    if index < 0 {
        return resolve_index(index, len).ok_or(Error::IndexOutOfRange { index, len });
    }
    let idx = usize::try_from(index).unwrap_or(usize::MAX);
    if idx > max_index {
        return Err(Error::IndexLimit {
            index: idx,
            max: max_index,
        });
    }
    if idx >= len {
        debug!(from = len, to = idx + 1, "growing list");
        items.resize(idx + 1, Value::Null);
    }
    Ok(idx)
}
