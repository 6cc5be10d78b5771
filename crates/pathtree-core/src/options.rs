//! Container configuration.

use serde::{Deserialize, Serialize};

/// Tunables for a [`Container`](crate::Container).
///
/// Deserializes from a partial JSON object; missing fields take their defaults.
///
/// ```
/// use pathtree_core::Options;
///
/// let opts: Options = serde_json::from_str(r#"{"indent": 4}"#).unwrap();
/// assert_eq!(opts.indent, 4);
/// assert_eq!(opts.max_index, Options::default().max_index);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Spaces per nesting level in `dumps`/`dump` output. Zero means compact JSON.
    pub indent: usize,
    /// Largest list index a write may create. Writing past the end of a list pads
    /// it with nulls, so this caps how much a single `set_value` can allocate.
    pub max_index: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: 2,
            max_index: 1 << 20,
        }
    }
}
