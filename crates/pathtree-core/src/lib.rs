//! # pathtree-core
//!
//! A mutable in-memory tree of JSON objects, arrays and scalars, read and
//! edited through short path strings.
//!
//! Paths are dot-separated keys with bracketed operations: `rfps[2].data.title`,
//! `items[-1]`, `rows[1:3]`. Reads return a default on any mismatch. Writes
//! create whatever is missing, pad lists with nulls, and replace nodes of the
//! wrong shape. Deletes are no-ops when the target is absent.
//!
//! ## Quick start
//!
//! ```rust
//! use pathtree_core::Container;
//! use serde_json::json;
//!
//! let mut c = Container::new(Some("offer".into()), None).unwrap();
//! c.set_value("rfps[1].data.title", json!("Backend rewrite")).unwrap();
//!
//! assert_eq!(
//!     c.get_value("rfps[-1].data.title", json!(null)).unwrap(),
//!     json!("Backend rewrite")
//! );
//! assert_eq!(c.get_value("rfps[0].data", json!("n/a")).unwrap(), json!("n/a"));
//!
//! c.delete_entry("rfps[0]").unwrap();
//! assert_eq!(c.root(), &json!({"rfps": [{"data": {"title": "Backend rewrite"}}]}));
//! ```
//!
//! ## Modules
//!
//! - [`path`] — path grammar, [`Path`] and [`IndexOp`]
//! - [`container`] — the [`Container`] type and its constructors
//! - [`value`] — shape coercion, index and slice normalization
//! - [`options`] — [`Options`] (indent, write index limit)
//! - [`error`] — [`PathError`] and [`Error`]
//!
//! Reading, writing, deleting and serialization are `Container` methods defined
//! in the private `read`, `write`, `remove` and `serialize` modules.

pub mod container;
pub mod error;
pub mod options;
pub mod path;
pub mod value;

mod read;
mod remove;
mod serialize;
mod write;

pub use container::Container;
pub use error::{Error, PathError, Result};
pub use options::Options;
pub use path::{AsPath, IndexOp, Path, Segment};
