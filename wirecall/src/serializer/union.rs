//! Tagged union encoding.
//!
//! A variant without a payload travels as its bare tag (`"add"`); a variant
//! with a payload travels as a single-key object (`{"update": {...}}`).

use super::Serializer;
use crate::error::DecodeError;
use crate::wire::{WireObject, WirePath, WireValue};

/// Encodes a payload-less variant.
pub fn encode_tag(tag: &str) -> WireValue {
    WireValue::String(tag.to_string())
}

/// Encodes a variant carrying `payload`.
pub fn encode_variant(tag: &str, payload: WireValue) -> WireValue {
    let mut object = WireObject::new();
    object.insert(tag.to_string(), payload);
    WireValue::Object(object)
}

/// Reader for either union shape.
///
/// ## Examples
///
/// ```rust
/// use serde_json::json;
/// use wirecall::serializer::{StringSerializer, UnionReader};
///
/// let wire = json!({"path": "/a/b"});
/// let reader = UnionReader::new(&wire).unwrap();
/// assert_eq!(reader.tag(), "path");
/// assert_eq!(reader.payload(&StringSerializer).unwrap(), "/a/b");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnionReader<'a> {
    tag: &'a str,
    payload: Option<&'a WireValue>,
}

impl<'a> UnionReader<'a> {
    /// Splits a wire union into its tag and optional payload.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError::Mismatch`] unless `wire` is a string or an
    /// object with exactly one key.
    pub fn new(wire: &'a WireValue) -> Result<Self, DecodeError> {
        match wire {
            WireValue::String(tag) => Ok(Self {
                tag: tag.as_str(),
                payload: None,
            }),
            WireValue::Object(object) if object.len() == 1 => {
                let (tag, payload) = object
                    .iter()
                    .next()
                    .ok_or_else(|| DecodeError::mismatch("tag or single-key object", wire))?;
                Ok(Self {
                    tag: tag.as_str(),
                    payload: Some(payload),
                })
            }
            WireValue::Object(object) => Err(DecodeError::invalid(
                "single-key object",
                format!("object with {} keys", object.len()),
            )),
            other => Err(DecodeError::mismatch("tag or single-key object", other)),
        }
    }

    /// Returns the variant tag.
    pub fn tag(&self) -> &'a str {
        self.tag
    }

    /// Returns `true` if the variant carries a payload.
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// Decodes the payload; errors are reported under the tag.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError::Mismatch`] if the variant arrived as a bare tag,
    /// or the serializer's error for the payload.
    pub fn payload<S: Serializer>(&self, serializer: &S) -> Result<S::Value, DecodeError> {
        let payload = self.payload.ok_or_else(|| {
            DecodeError::invalid(format!("object for '{}'", self.tag), "bare tag")
        })?;
        serializer.decode(payload).map_err(|e| e.at_field(self.tag))
    }

    /// Checks that a payload-less variant did not arrive with a payload.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError::Mismatch`] if a payload is present.
    pub fn expect_bare(&self) -> Result<(), DecodeError> {
        match self.payload {
            None => Ok(()),
            Some(_) => Err(DecodeError::invalid(
                format!("bare tag '{}'", self.tag),
                "object",
            )),
        }
    }

    /// Builds the error for a tag the caller does not recognise.
    pub fn unknown_tag(&self) -> DecodeError {
        DecodeError::UnknownTag {
            tag: self.tag.to_string(),
            path: WirePath::root(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::U64Serializer;
    use serde_json::json;

    #[test]
    fn test_encode_shapes() {
        assert_eq!(encode_tag("add"), json!("add"));
        assert_eq!(
            encode_variant("update", json!({"rev": "1234"})),
            json!({"update": {"rev": "1234"}})
        );
    }

    #[test]
    fn test_bare_tag() {
        let wire = json!("add");
        let reader = UnionReader::new(&wire).unwrap();
        assert_eq!(reader.tag(), "add");
        assert!(!reader.has_payload());
        assert!(reader.expect_bare().is_ok());
        assert!(reader.payload(&U64Serializer).is_err());
    }

    #[test]
    fn test_payload_error_path() {
        let wire = json!({"limit": "ten"});
        let reader = UnionReader::new(&wire).unwrap();
        let err = reader.payload(&U64Serializer).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "$.limit");
        assert!(reader.expect_bare().is_err());
    }

    #[test]
    fn test_rejects_multi_key_object() {
        let wire = json!({"a": 1, "b": 2});
        let err = UnionReader::new(&wire).unwrap_err();
        assert_eq!(
            err.to_string(),
            "$: expected single-key object, got object with 2 keys"
        );
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(UnionReader::new(&json!(3)).is_err());
        assert!(UnionReader::new(&json!({})).is_err());
    }

    #[test]
    fn test_unknown_tag() {
        let wire = json!("delete_everything");
        let err = UnionReader::new(&wire).unwrap().unknown_tag().at_field("mode");
        assert_eq!(err.to_string(), "$.mode: unknown tag 'delete_everything'");
    }
}
