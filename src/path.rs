//! Paths for locating values in the data tree.
//!
//! This module provides [`Path`] and [`PathSegment`] for addressing values in
//! nested `serde_json::Value` trees, together with typed lookup and assignment.

use std::fmt::{self, Display};

use serde_json::{Map, Value};

/// A segment of a data path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g., `user`, `email`)
    Field(String),
    /// An array position (e.g., `0`, `42`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// A path to a value in a nested data tree.
///
/// `Path` renders with `.` between every segment, so the element `0` of
/// `items` followed by its `name` key reads `items.0.name`. The root path
/// renders as the empty string.
///
/// # Example
///
/// ```rust
/// use rulebook::Path;
///
/// let path = Path::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "users.0.email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Returns `self` followed by every segment of `tail`.
    ///
    /// Joining onto the root path yields `tail` unchanged, which is what keeps
    /// lifted nested errors free of a leading separator.
    pub fn join(&self, tail: &Path) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(tail.segments.iter().cloned());
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Finds the value at this path.
    ///
    /// A field segment only descends into objects and an index segment only
    /// into arrays; anything else, including a missing entry, is absent.
    pub fn lookup<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| match (segment, current) {
                (PathSegment::Field(name), Value::Object(map)) => map.get(name),
                (PathSegment::Index(idx), Value::Array(items)) => items.get(*idx),
                _ => None,
            })
    }

    /// Stores `value` at this path inside `target`.
    ///
    /// Missing or non-container intermediates are replaced by an object (for a
    /// field segment) or an array (for an index segment). Arrays shorter than
    /// an index are padded with `null`.
    pub fn assign(&self, target: &mut Value, value: Value) {
        let mut slot = target;
        for segment in &self.segments {
            slot = match segment {
                PathSegment::Field(name) => {
                    if !slot.is_object() {
                        *slot = Value::Object(Map::new());
                    }
                    &mut slot[name.as_str()]
                }
                PathSegment::Index(idx) => {
                    match &mut *slot {
                        Value::Array(items) if items.len() <= *idx => {
                            items.resize(*idx + 1, Value::Null);
                        }
                        Value::Array(_) => {}
                        other => *other = Value::Array(vec![Value::Null; *idx + 1]),
                    }
                    &mut slot[*idx]
                }
            };
        }
        *slot = value;
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_path_is_empty() {
        let path = Path::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_index_renders_dotted() {
        let path = Path::root().push_field("items").push_index(3).push_field("name");
        assert_eq!(path.to_string(), "items.3.name");
        assert_eq!(Path::from_index(0).to_string(), "0");
    }

    #[test]
    fn test_path_immutability() {
        let base = Path::root().push_field("users");
        let path_a = base.push_index(0);
        let path_b = base.push_index(1);

        assert_eq!(base.to_string(), "users");
        assert_eq!(path_a.to_string(), "users.0");
        assert_eq!(path_b.to_string(), "users.1");
    }

    #[test]
    fn test_join_onto_root_is_identity() {
        let tail = Path::from_field("b");
        assert_eq!(Path::root().join(&tail), tail);
        assert_eq!(Path::from_field("a").join(&tail).to_string(), "a.b");
    }

    #[test]
    fn test_parent_and_last() {
        let path = Path::root().push_field("users").push_index(0);
        assert_eq!(path.last(), Some(&PathSegment::Index(0)));
        assert_eq!(path.parent().unwrap().to_string(), "users");
        assert!(Path::root().parent().is_none());
    }

    #[test]
    fn test_lookup() {
        let data = json!({"a": {"b": [10, {"c": "x"}]}});

        let path = Path::root().push_field("a").push_field("b").push_index(1).push_field("c");
        assert_eq!(path.lookup(&data), Some(&json!("x")));
        assert_eq!(Path::root().lookup(&data), Some(&data));
        assert_eq!(Path::from_field("missing").lookup(&data), None);
    }

    #[test]
    fn test_lookup_mismatched_containers_is_absent() {
        let data = json!({"a": "text", "list": [1]});

        assert_eq!(Path::from_field("a").push_field("b").lookup(&data), None);
        assert_eq!(Path::from_field("list").push_field("0").lookup(&data), None);
        assert_eq!(Path::from_index(0).lookup(&data), None);
    }

    #[test]
    fn test_assign_creates_intermediates() {
        let mut target = Value::Null;
        Path::root()
            .push_field("items")
            .push_index(1)
            .push_field("name")
            .assign(&mut target, json!("x"));

        assert_eq!(target, json!({"items": [null, {"name": "x"}]}));
    }

    #[test]
    fn test_assign_root_replaces_target() {
        let mut target = json!({"old": true});
        Path::root().assign(&mut target, json!([]));
        assert_eq!(target, json!([]));
    }
}
