//! Structural paths: where in the tree a finding occurred.

use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::value::Key;

/// One step into a tree: an index into a sequence or a key into a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Index(usize),
    Key(Key),
}

/// An ordered sequence of segments locating a node; empty at the root.
///
/// The engine threads one `Path` through its walk, pushing a segment before
/// descending and popping after; findings carry a clone of the path at the
/// moment they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// The empty path, addressing the root of the tree.
    pub fn root() -> Path {
        Path(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Path {
        Path(segments)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Path {
        Path(iter.into_iter().collect())
    }
}

/// Text keys matching `^[A-Za-z_][A-Za-z0-9_]*$` render with dot notation.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Path {
    /// JSONPath-flavored rendering: `$` for the root, `$.name` for bare
    /// text keys, `$[2]` for indices, `$["odd key"]` / `$[true]` for
    /// everything else.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
                PathSegment::Key(Key::Text(s)) if is_bare_key(s) => write!(f, ".{}", s)?,
                PathSegment::Key(key) => write!(f, "[{}]", key)?,
            }
        }
        Ok(())
    }
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathSegment::Index(i) => serializer.serialize_u64(*i as u64),
            PathSegment::Key(key) => key.serialize(serializer),
        }
    }
}

impl Serialize for Path {
    /// Serializes as a flat array of segments, e.g. `["user", 2, "name"]`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}
