//! Path grammar: dot-separated keys with bracketed index and slice operations.
//!
//! ```text
//! path      := segment ('.' segment)*
//! segment   := key? bracket*
//! bracket   := '[' (index | slice) ']'
//! index     := '-'? digit+
//! slice     := index? ':' index?
//! ```
//!
//! Examples: `abc`, `abc.def[2].ghi`, `abc[-1]`, `abc[2:5]`, `rows[0][1:]`.
//!
//! There is no escaping: a literal `.`, `[` or `]` cannot appear inside a key.
//! Empty dot-segments (`a..b`, a leading or trailing `.`) are skipped, and a path
//! that yields no segments at all is [`PathError::Empty`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PathError;

/// One bracketed operation within a segment.
///
/// Negative values count from the end of the list. They are kept as written
/// and only normalized against a concrete length when the path is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexOp {
    /// `[i]`
    Index(i64),
    /// `[start:end]`, either side optional.
    Slice { start: Option<i64>, end: Option<i64> },
}

impl IndexOp {
    pub fn is_slice(&self) -> bool {
        matches!(self, IndexOp::Slice { .. })
    }
}

impl fmt::Display for IndexOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexOp::Index(i) => write!(f, "[{i}]"),
            IndexOp::Slice { start, end } => {
                f.write_str("[")?;
                if let Some(s) = start {
                    write!(f, "{s}")?;
                }
                f.write_str(":")?;
                if let Some(e) = end {
                    write!(f, "{e}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// A single dot-separated piece of a path: an optional object key followed by
/// zero or more index operations applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub key: Option<String>,
    pub ops: Vec<IndexOp>,
}

impl Segment {
    /// A key-only segment.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ops: Vec::new(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(key) = &self.key {
            f.write_str(key)?;
        }
        for op in &self.ops {
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// A parsed, non-empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parse a path string.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] when no segments remain after skipping empty
    /// ones, and the other [`PathError`] variants for malformed bracket groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtree_core::{IndexOp, Path};
    ///
    /// let path = Path::parse("rfps[2].data.title").unwrap();
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.segments()[0].key.as_deref(), Some("rfps"));
    /// assert_eq!(path.segments()[0].ops, vec![IndexOp::Index(2)]);
    /// ```
    pub fn parse(path: &str) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        for raw in path.split('.') {
            if let Some(segment) = parse_segment(raw)? {
                segments.push(segment);
            }
        }
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self { segments })
    }

    /// Build a path from already-parsed segments.
    ///
    /// The segments must be ones [`Path::parse`] could have produced, so that
    /// the result prints as text that parses back to the same path.
    ///
    /// # Errors
    ///
    /// [`PathError::Empty`] for no segments, [`PathError::EmptySegment`] for a
    /// segment with neither key nor operations, and [`PathError::InvalidKey`]
    /// for an empty key or one containing `.`, `[` or `]`.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        for segment in &segments {
            match &segment.key {
                Some(key) if key.is_empty() || key.contains(['.', '[', ']']) => {
                    return Err(PathError::InvalidKey { key: key.clone() });
                }
                None if segment.ops.is_empty() => return Err(PathError::EmptySegment),
                _ => {}
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; a `Path` holds at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment and everything before it.
    pub fn split_last(&self) -> (&Segment, &[Segment]) {
        match self.segments.split_last() {
            Some(split) => split,
            None => unreachable!("Path is never empty"),
        }
    }

    /// True if any slice appears before the final operation of the final segment.
    ///
    /// Such paths can be read but not written or deleted through.
    pub fn has_interior_slice(&self) -> bool {
        let steps = self.steps();
        match steps.split_last() {
            Some((_, init)) => init
                .iter()
                .any(|step| matches!(step, Step::Op(op) if op.is_slice())),
            None => false,
        }
    }

    /// Flatten the path into the individual navigation steps, in walk order.
    pub(crate) fn steps(&self) -> Vec<Step<'_>> {
        let mut steps = Vec::new();
        for segment in &self.segments {
            if let Some(key) = &segment.key {
                steps.push(Step::Key(key));
            }
            steps.extend(segment.ops.iter().copied().map(Step::Op));
        }
        steps
    }
}

/// A single navigation step: an object lookup or one bracket operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step<'p> {
    Key(&'p str),
    Op(IndexOp),
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => f.write_str(key),
            Step::Op(op) => write!(f, "{op}"),
        }
    }
}

/// Anything that can be turned into a [`Path`]: path strings or parsed paths.
///
/// Container methods are generic over this so callers can pass `"a.b[0]"`
/// directly, or parse once and reuse the [`Path`].
pub trait AsPath {
    fn as_path(&self) -> Result<Cow<'_, Path>, PathError>;
}

impl AsPath for str {
    fn as_path(&self) -> Result<Cow<'_, Path>, PathError> {
        Path::parse(self).map(Cow::Owned)
    }
}

impl AsPath for String {
    fn as_path(&self) -> Result<Cow<'_, Path>, PathError> {
        self.as_str().as_path()
    }
}

impl AsPath for Path {
    fn as_path(&self) -> Result<Cow<'_, Path>, PathError> {
        Ok(Cow::Borrowed(self))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Path::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Split one dot-segment into its key and bracket groups.
///
/// Returns `Ok(None)` for a segment with neither, so callers can skip it.
fn parse_segment(raw: &str) -> Result<Option<Segment>, PathError> {
    let (key, mut rest) = match raw.find('[') {
        Some(pos) => raw.split_at(pos),
        None => (raw, ""),
    };
    if key.contains(']') {
        return Err(PathError::Stray {
            segment: raw.to_string(),
        });
    }

    let mut ops = Vec::new();
    while !rest.is_empty() {
        let Some(inner) = rest.strip_prefix('[') else {
            return Err(PathError::Stray {
                segment: raw.to_string(),
            });
        };
        let Some(close) = inner.find(']') else {
            return Err(PathError::Unclosed {
                segment: raw.to_string(),
            });
        };
        let group = &inner[..close];
        ops.push(parse_group(group).ok_or_else(|| PathError::InvalidIndex {
            segment: raw.to_string(),
            group: group.to_string(),
        })?);
        rest = &inner[close + 1..];
    }

    if key.is_empty() && ops.is_empty() {
        return Ok(None);
    }
    Ok(Some(Segment {
        key: (!key.is_empty()).then(|| key.to_string()),
        ops,
    }))
}

/// Parse the content of one `[...]` group.
fn parse_group(group: &str) -> Option<IndexOp> {
    match group.split_once(':') {
        Some((start, end)) => {
            if end.contains(':') {
                return None;
            }
            Some(IndexOp::Slice {
                start: parse_bound(start)?,
                end: parse_bound(end)?,
            })
        }
        None => parse_int(group).map(IndexOp::Index),
    }
}

/// A slice bound: empty means open-ended, otherwise it must be an integer.
fn parse_bound(bound: &str) -> Option<Option<i64>> {
    if bound.is_empty() {
        Some(None)
    } else {
        parse_int(bound).map(Some)
    }
}

/// `'-'? digit+`. `str::parse` would also take a leading `+`.
fn parse_int(text: &str) -> Option<i64> {
    if text.starts_with('+') {
        return None;
    }
    text.parse().ok()
}
