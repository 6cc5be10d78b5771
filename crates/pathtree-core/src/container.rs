//! The [`Container`]: an owned, mutable JSON object tree addressed by path strings.
//!
//! Reading, writing, deleting and serialization live in their own modules as
//! further `impl Container` blocks; this module holds the type and its
//! constructors.

use std::fmt;
use std::fs;
use std::path::Path as FsPath;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::value::kind_name;

/// A named tree of JSON values whose root is always an object.
///
/// Not synchronized: share it across threads behind your own lock.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    name: Option<String>,
    pub(crate) root: Value,
    pub(crate) options: Options,
}

impl Container {
    /// Create a container, optionally seeded with existing data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] if `data` is present but is not a JSON object.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtree_core::Container;
    /// use serde_json::json;
    ///
    /// let c = Container::new(Some("cv".into()), Some(json!({"name": "Ada"}))).unwrap();
    /// assert_eq!(c.name(), Some("cv"));
    ///
    /// assert!(Container::new(None, Some(json!([1, 2]))).is_err());
    /// ```
    pub fn new(name: Option<String>, data: Option<Value>) -> Result<Self> {
        match data {
            None => Ok(Self::from_map(name, Map::new())),
            Some(Value::Object(map)) => Ok(Self::from_map(name, map)),
            Some(other) => Err(Error::NotAnObject {
                found: kind_name(&other),
            }),
        }
    }

    pub fn from_map(name: Option<String>, data: Map<String, Value>) -> Self {
        Self {
            name,
            root: Value::Object(data),
            options: Options::default(),
        }
    }

    /// Parse a JSON document into a container.
    pub fn from_json_str(name: Option<String>, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::new(name, Some(value))
    }

    /// Read a JSON file into a container named after the file stem.
    pub fn load(file: impl AsRef<FsPath>) -> Result<Self> {
        let file = file.as_ref();
        let text = fs::read_to_string(file).map_err(|source| Error::Io {
            path: file.to_path_buf(),
            source,
        })?;
        let name = file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
        Self::from_json_str(name, &text)
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The root value. Always a [`Value::Object`].
    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_inner(self) -> Map<String, Value> {
        match self.root {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::from_map(None, Map::new())
    }
}

impl From<Map<String, Value>> for Container {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(None, map)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.dumps().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
