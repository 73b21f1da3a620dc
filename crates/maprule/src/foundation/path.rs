//! Field paths for error attribution.
//!
//! A [`FieldPath`] is built up while the schema tree is walked: mapping
//! children extend it with their key, sequence items with their index.
//! Fields never learn their own position; the path travels down the call.
//!
//! ```rust
//! use maprule::foundation::FieldPath;
//!
//! let path = FieldPath::named("user").key("tags").index(2);
//! assert_eq!(path.to_string(), "user.tags[2]");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Label used when a failing field has neither a name nor a position.
pub const ROOT_LABEL: &str = "value";

/// One step from a container to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A mapping key.
    Key(String),
    /// A sequence index.
    Index(usize),
}

/// Location of a value inside the validated document.
///
/// The optional root name is the display label of the top-level field; it is
/// not part of the document and is ignored when coercions are written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    root: Option<String>,
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Empty, unnamed path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty path whose root is displayed as `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            root: Some(name.into()),
            segments: Vec::new(),
        }
    }

    /// Path for a top-level field with an optional display label.
    #[must_use]
    pub fn root(name: Option<&str>) -> Self {
        name.map_or_else(Self::new, Self::named)
    }

    /// Returns a copy of this path extended by a mapping key.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }

    /// Returns a copy of this path extended by a sequence index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self {
            root: self.root.clone(),
            segments,
        }
    }

    /// Display label of the root field, if any.
    #[must_use]
    pub fn root_name(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Steps from the validated document to this location.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// True when the path points at the validated document itself.
    #[must_use]
    pub fn is_document_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path as shown in messages; falls back to [`ROOT_LABEL`] when empty.
    #[must_use]
    pub fn label(&self) -> String {
        if self.root.is_none() && self.segments.is_empty() {
            ROOT_LABEL.to_owned()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if let Some(root) = &self.root {
            f.write_str(root)?;
            first = false;
        }
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) if first => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
            first = false;
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_root_starts_with_first_key() {
        let path = FieldPath::new().key("address").key("city");
        assert_eq!(path.to_string(), "address.city");
    }

    #[test]
    fn indices_attach_without_separator() {
        let path = FieldPath::named("tags").index(1);
        assert_eq!(path.to_string(), "tags[1]");

        let path = FieldPath::new().index(0).key("name");
        assert_eq!(path.to_string(), "[0].name");
    }

    #[test]
    fn empty_path_uses_root_label() {
        assert_eq!(FieldPath::new().label(), ROOT_LABEL);
        assert_eq!(FieldPath::named("age").label(), "age");
    }

    #[test]
    fn child_paths_do_not_share_state() {
        let parent = FieldPath::named("user");
        let a = parent.key("a");
        let b = parent.key("b");
        assert_eq!(a.to_string(), "user.a");
        assert_eq!(b.to_string(), "user.b");
        assert!(parent.is_document_root());
    }

    #[test]
    fn root_name_is_not_a_segment() {
        let path = FieldPath::named("price");
        assert!(path.segments().is_empty());
        assert_eq!(path.root_name(), Some("price"));
    }
}
