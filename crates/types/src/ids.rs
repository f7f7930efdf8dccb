//! Newtype wrapper for leaf addresses inside the data packet.
//!
//! A `LeafPath` is a '/'-delimited sequence of element names starting at the
//! data root, e.g. `formular/ap[1]/bezeichnung`. Wrapping it prevents mixing
//! up paths with the rendered values that get written into them.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// The address of one leaf element, relative to (and including) the data root.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LeafPath(Arc<str>);

impl LeafPath {
    /// Creates a new LeafPath from a string
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self(path.into())
    }

    /// Returns the string representation of this path
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates the non-empty segments of the path, root first.
    pub fn segments(&self) -> impl Iterator<Item = PathSegment<'_>> {
        self.0
            .split('/')
            .filter(|s| !s.is_empty())
            .map(PathSegment::parse)
    }

    /// Appends a child segment, producing the path of a descendant.
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}/{}", self.0, segment).into())
    }

    /// Lower-cased copy used for case-insensitive keyword matching.
    pub fn lowered(&self) -> String {
        self.0.to_lowercase()
    }
}

impl From<String> for LeafPath {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for LeafPath {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for LeafPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeafPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One segment of a [`LeafPath`]: an element name with an optional
/// zero-based position among same-named siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegment<'a> {
    pub name: &'a str,
    pub index: Option<usize>,
}

impl<'a> PathSegment<'a> {
    /// Splits `name[3]` into its name and index. Anything that does not end in
    /// a well-formed `[digits]` suffix is taken as a plain name.
    pub fn parse(segment: &'a str) -> Self {
        if let Some(body) = segment.strip_suffix(']')
            && let Some(open) = body.rfind('[')
            && open > 0
            && let Ok(index) = body[open + 1..].parse::<usize>()
        {
            return PathSegment { name: &body[..open], index: Some(index) };
        }
        PathSegment { name: segment, index: None }
    }
}

impl fmt::Display for PathSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]", self.name, i),
            None => write!(f, "{}", self.name),
        }
    }
}
