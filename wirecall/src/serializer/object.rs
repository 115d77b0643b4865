//! Record assembly and reading.
//!
//! Records are encoded sparsely: a field whose value is absent is left out of
//! the wire object instead of being written as `null`. On decode an explicit
//! `null` and a missing key mean the same thing for optional fields.

use super::Serializer;
use crate::error::DecodeError;
use crate::wire::{WireObject, WirePath, WireValue};

/// A named field with its encoded value, or `None` when the value is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    value: Option<WireValue>,
}

impl Field {
    /// A field that always has a value.
    pub fn required<S: Serializer>(name: impl Into<String>, serializer: &S, value: &S::Value) -> Self {
        Self {
            name: name.into(),
            value: Some(serializer.encode(value)),
        }
    }

    /// A field that is dropped from the object when `value` is `None`.
    pub fn optional<S: Serializer>(
        name: impl Into<String>,
        serializer: &S,
        value: Option<&S::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.map(|v| serializer.encode(v)),
        }
    }

    /// A field from an already-encoded value.
    pub fn encoded(name: impl Into<String>, value: Option<WireValue>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the encoded value, if present.
    pub fn value(&self) -> Option<&WireValue> {
        self.value.as_ref()
    }
}

/// Builds a wire object from fields in order, dropping fields without a value.
///
/// A later field with the same name replaces the earlier value but keeps the
/// earlier position.
pub fn assemble_object(fields: impl IntoIterator<Item = Field>) -> WireValue {
    let mut object = WireObject::new();
    for field in fields {
        if let Some(value) = field.value {
            object.insert(field.name, value);
        }
    }
    WireValue::Object(object)
}

/// Fluent front end over [`Field`] and [`assemble_object`].
///
/// ## Examples
///
/// ```rust
/// use wirecall::serializer::{ObjectBuilder, StringSerializer, U64Serializer};
///
/// let country: Option<String> = None;
/// let wire = ObjectBuilder::new()
///     .required("email", &StringSerializer, &"a@example.com".to_string())
///     .optional("country", &StringSerializer, country.as_ref())
///     .required("quota", &U64Serializer, &1024)
///     .build();
///
/// assert_eq!(wire.to_string(), r#"{"email":"a@example.com","quota":1024}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectBuilder {
    fields: Vec<Field>,
}

impl ObjectBuilder {
    /// Starts an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field that always has a value.
    pub fn required<S: Serializer>(mut self, name: &str, serializer: &S, value: &S::Value) -> Self {
        self.fields.push(Field::required(name, serializer, value));
        self
    }

    /// Adds a field that is omitted when `value` is `None`.
    pub fn optional<S: Serializer>(
        mut self,
        name: &str,
        serializer: &S,
        value: Option<&S::Value>,
    ) -> Self {
        self.fields.push(Field::optional(name, serializer, value));
        self
    }

    /// Adds a prebuilt field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Assembles the wire object.
    pub fn build(self) -> WireValue {
        assemble_object(self.fields)
    }
}

/// Field-by-field reader over a wire object.
///
/// Errors from field serializers come back with the field name prepended to
/// their path.
#[derive(Debug, Clone, Copy)]
pub struct ObjectReader<'a> {
    object: &'a WireObject,
}

impl<'a> ObjectReader<'a> {
    /// Wraps a wire value that must be an object.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError::Mismatch`] if `wire` is not an object.
    pub fn new(wire: &'a WireValue) -> Result<Self, DecodeError> {
        wire.as_object()
            .map(|object| Self { object })
            .ok_or_else(|| DecodeError::mismatch("object", wire))
    }

    /// Decodes a field that must be present.
    ///
    /// A present `null` is handed to the serializer, so a required field typed
    /// with a [`NullableSerializer`](super::NullableSerializer) accepts it.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError::MissingField`] if the key is absent, or the
    /// serializer's error for the field value.
    pub fn required<S: Serializer>(&self, name: &str, serializer: &S) -> Result<S::Value, DecodeError> {
        let wire = self
            .object
            .get(name)
            .ok_or_else(|| DecodeError::missing_field(name))?;
        serializer.decode(wire).map_err(|e| e.at_field(name))
    }

    /// Decodes a field that may be absent. Absent and `null` both yield `None`.
    ///
    /// ## Errors
    ///
    /// Returns the serializer's error for a present, non-null value.
    pub fn optional<S: Serializer>(
        &self,
        name: &str,
        serializer: &S,
    ) -> Result<Option<S::Value>, DecodeError> {
        match self.object.get(name) {
            None | Some(WireValue::Null) => Ok(None),
            Some(wire) => serializer.decode(wire).map(Some).map_err(|e| e.at_field(name)),
        }
    }

    /// Returns `true` if the key is present with a non-null value.
    pub fn has(&self, name: &str) -> bool {
        matches!(self.object.get(name), Some(v) if !v.is_null())
    }

    /// Rejects keys that are not in `known`, for strict decoding.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError::UnknownField`] for the first unknown key.
    pub fn deny_unknown(&self, known: &[&str]) -> Result<(), DecodeError> {
        match self.object.keys().find(|key| !known.contains(&key.as_str())) {
            Some(key) => Err(DecodeError::UnknownField {
                path: WirePath::root().field(key.clone()),
            }),
            None => Ok(()),
        }
    }
}
