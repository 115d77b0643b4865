//! The JSON wire data model.
//!
//! Every serializer in this crate targets [`WireValue`], which is
//! `serde_json::Value` built with the `preserve_order` feature so that object
//! fields keep their insertion order. [`WirePath`] locates a value inside a
//! nested wire document and is attached to every decode error.

use std::fmt;

/// A JSON value: string, number, bool, null, ordered object or array.
pub type WireValue = serde_json::Value;

/// An insertion-ordered JSON object.
pub type WireObject = serde_json::Map<String, WireValue>;

/// Returns the JSON kind name of a wire value, used in error messages.
pub fn kind_of(value: &WireValue) -> &'static str {
    match value {
        WireValue::Null => "null",
        WireValue::Bool(_) => "boolean",
        WireValue::Number(n) if n.is_u64() || n.is_i64() => "integer",
        WireValue::Number(_) => "number",
        WireValue::String(_) => "string",
        WireValue::Array(_) => "array",
        WireValue::Object(_) => "object",
    }
}

/// One step in a [`WirePath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object key.
    Field(String),
    /// An array position.
    Index(usize),
}

/// Location of a value inside a wire document, rendered as `$.entries[2].name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WirePath {
    segments: Vec<PathSegment>,
}

impl WirePath {
    /// The document root (`$`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns `true` if this path points at the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the path segments from outermost to innermost.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Prepends an object key. Used while an error bubbles up out of a field.
    pub fn prepend_field(&mut self, name: impl Into<String>) {
        self.segments.insert(0, PathSegment::Field(name.into()));
    }

    /// Prepends an array position. Used while an error bubbles up out of an element.
    pub fn prepend_index(&mut self, index: usize) {
        self.segments.insert(0, PathSegment::Index(index));
    }

    /// Returns a new path with `name` appended.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    /// Returns a new path with `index` appended.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }
}

impl fmt::Display for WirePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_display() {
        assert_eq!(WirePath::root().to_string(), "$");
        assert!(WirePath::root().is_root());
    }

    #[test]
    fn test_nested_display() {
        let path = WirePath::root().field("entries").index(2).field("name");
        assert_eq!(path.to_string(), "$.entries[2].name");
    }

    #[test]
    fn test_prepend_builds_outward() {
        let mut path = WirePath::root().field("name");
        path.prepend_index(2);
        path.prepend_field("entries");
        assert_eq!(path, WirePath::root().field("entries").index(2).field("name"));
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!(true)), "boolean");
        assert_eq!(kind_of(&json!(7)), "integer");
        assert_eq!(kind_of(&json!(-7)), "integer");
        assert_eq!(kind_of(&json!(1.5)), "number");
        assert_eq!(kind_of(&json!("x")), "string");
        assert_eq!(kind_of(&json!([])), "array");
        assert_eq!(kind_of(&json!({})), "object");
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let mut obj = WireObject::new();
        obj.insert("zeta".to_string(), json!(1));
        obj.insert("alpha".to_string(), json!(2));
        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
