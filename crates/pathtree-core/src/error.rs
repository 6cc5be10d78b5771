//! Error types for path parsing and container operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while parsing a path string.
///
/// Every variant is fatal to the call that triggered it: a path that does not
/// parse never reaches the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path yielded no segments (`""`, `"."`, `".."`).
    #[error("empty path")]
    Empty,

    /// A `[` was opened but never closed.
    #[error("unclosed bracket in segment '{segment}'")]
    Unclosed { segment: String },

    /// Text after the first bracket group that is not itself a bracket group,
    /// or a `]` with no matching `[`.
    #[error("unexpected characters in segment '{segment}'")]
    Stray { segment: String },

    /// A bracket group whose content is neither an integer nor a `start:end` slice.
    #[error("invalid index '[{group}]' in segment '{segment}'")]
    InvalidIndex { segment: String, group: String },

    /// A hand-built segment with neither a key nor any bracket operation.
    #[error("segment has no key and no index")]
    EmptySegment,

    /// A hand-built key that is empty or contains `.`, `[` or `]`, so it could
    /// not be written back as path text.
    #[error("invalid key '{key}'")]
    InvalidKey { key: String },
}

/// Errors that can occur while operating on a [`Container`](crate::Container).
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Path(#[from] PathError),

    /// The root of a container must be an object.
    #[error("container data must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// The first segment of a write path has no key, so it would index the root.
    #[error("the root is an object and cannot be indexed")]
    RootNotIndexable,

    /// A slice was used somewhere other than the last operation of a mutating path.
    #[error("slice in non-terminal position of '{path}'")]
    SliceInPath { path: String },

    /// Slice assignment needs an array to splice in.
    #[error("slice assignment requires an array value, found {found}")]
    SliceAssignment { found: &'static str },

    /// A negative index reaches before the start of the list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// A write would grow a list past the configured limit.
    #[error("index {index} exceeds the maximum writable index {max}")]
    IndexLimit { index: usize, max: usize },

    /// `dump` was called without a file name on a container that has no name.
    #[error("container has no name and no file name was given")]
    Unnamed,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout pathtree-core.
pub type Result<T> = std::result::Result<T, Error>;
