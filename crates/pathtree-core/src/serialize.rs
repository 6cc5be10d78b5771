//! JSON output for containers.

use std::fs;
use std::path::{Path as FsPath, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::container::Container;
use crate::error::{Error, Result};

impl Container {
    /// Serialize the tree to JSON, indented by [`Options::indent`](crate::Options)
    /// spaces per level (compact when the indent is zero).
    ///
    /// ```
    /// use pathtree_core::Container;
    /// use serde_json::json;
    ///
    /// let c = Container::new(None, Some(json!({"a": [1]}))).unwrap();
    /// assert_eq!(c.dumps().unwrap(), "{\n  \"a\": [\n    1\n  ]\n}");
    /// ```
    pub fn dumps(&self) -> Result<String> {
        if self.options.indent == 0 {
            return Ok(serde_json::to_string(&self.root)?);
        }
        let indent = " ".repeat(self.options.indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write [`dumps`](Self::dumps) output to `dir/file_name`, creating `dir` if
    /// needed. Without a file name the container's name plus `.json` is used.
    ///
    /// Returns the path written.
    ///
    /// # Errors
    ///
    /// [`Error::Unnamed`] when neither a file name nor a container name is
    /// available, and [`Error::Io`] when the directory or file cannot be written.
    pub fn dump(&self, dir: impl AsRef<FsPath>, file_name: Option<&str>) -> Result<PathBuf> {
        let file_name = match (file_name, self.name()) {
            (Some(file_name), _) => file_name.to_string(),
            (None, Some(name)) => format!("{name}.json"),
            (None, None) => return Err(Error::Unnamed),
        };
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let target = dir.join(file_name);
        let text = self.dumps()?;
        fs::write(&target, text).map_err(|source| Error::Io {
            path: target.clone(),
            source,
        })?;
        debug!(path = %target.display(), "container written");
        Ok(target)
    }
}
