//! Serializer trait and implementations.
//!
//! A [`Serializer`] converts values of its associated `Value` type to and from
//! the JSON wire model. Serializers are stateless or carry fixed configuration
//! (a timestamp format), and compose by ownership: an [`ArraySerializer`] owns
//! its element serializer, a [`NullableSerializer`] owns its inner serializer.
//!
//! Records and unions are not serializers of their own. Generated bindings
//! implement [`Serializer`] for their record types using [`ObjectBuilder`] and
//! [`ObjectReader`], and for their union types using [`encode_tag`],
//! [`encode_variant`] and [`UnionReader`].
//!
//! ## Examples
//!
//! ```rust
//! use wirecall::serializer::{ArraySerializer, NullableSerializer, Serializer, U64Serializer};
//!
//! let sizes = ArraySerializer::new(NullableSerializer::new(U64Serializer));
//! let wire = sizes.encode(&vec![Some(3), None]);
//! assert_eq!(wire, serde_json::json!([3, null]));
//! assert_eq!(sizes.decode(&wire).unwrap(), vec![Some(3), None]);
//! ```

mod array;
mod nullable;
mod object;
mod primitive;
mod union;
mod validated;

pub use array::ArraySerializer;
pub use nullable::NullableSerializer;
pub use object::{Field, ObjectBuilder, ObjectReader, assemble_object};
pub use primitive::{
    BinarySerializer, BoolSerializer, DEFAULT_TIMESTAMP_FORMAT, F64Serializer, I64Serializer,
    StringSerializer, TimestampSerializer, U64Serializer, VoidSerializer,
};
pub use union::{UnionReader, encode_tag, encode_variant};
pub use validated::ValidatedSerializer;

use crate::error::DecodeError;
use crate::wire::WireValue;

/// Converts values of type [`Serializer::Value`] to and from wire values.
///
/// Implementations must satisfy the round-trip law: for every value accepted
/// by the paired validator, `decode(&encode(&x))` equals `x`, except where the
/// wire format is deliberately lossy (timestamps keep whole seconds).
pub trait Serializer: Send + Sync {
    /// The value type this serializer handles.
    type Value;

    /// Encodes a value into its wire form.
    fn encode(&self, value: &Self::Value) -> WireValue;

    /// Decodes a wire value.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError`] naming the expected shape, what was found and
    /// where, if the wire value does not match.
    fn decode(&self, wire: &WireValue) -> Result<Self::Value, DecodeError>;

    /// Encodes a value as JSON text.
    fn to_json(&self, value: &Self::Value) -> String {
        self.encode(value).to_string()
    }

    /// Decodes a value from JSON text.
    ///
    /// An empty (or all-whitespace) input is read as wire `null`, which is how
    /// routes without a result body answer.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError::Json`] if the input is not JSON, or any decode
    /// error the serializer raises for the parsed value.
    fn from_json(&self, text: &[u8]) -> Result<Self::Value, DecodeError> {
        let wire = if text.iter().all(u8::is_ascii_whitespace) {
            WireValue::Null
        } else {
            serde_json::from_slice(text)?
        };
        self.decode(&wire)
    }
}

impl<S: Serializer + ?Sized> Serializer for &S {
    type Value = S::Value;

    fn encode(&self, value: &Self::Value) -> WireValue {
        (**self).encode(value)
    }

    fn decode(&self, wire: &WireValue) -> Result<Self::Value, DecodeError> {
        (**self).decode(wire)
    }
}
