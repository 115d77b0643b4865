use super::Serializer;
use crate::error::DecodeError;
use crate::wire::WireValue;

/// Optional-value serializer wrapping an inner serializer.
///
/// `None` encodes as wire `null` and wire `null` decodes as `None`; anything
/// else goes through the inner serializer.
#[derive(Debug, Clone, Default)]
pub struct NullableSerializer<S> {
    inner: S,
}

impl<S: Serializer> NullableSerializer<S> {
    /// Wraps `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the inner serializer.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Serializer> Serializer for NullableSerializer<S> {
    type Value = Option<S::Value>;

    fn encode(&self, value: &Self::Value) -> WireValue {
        match value {
            Some(v) => self.inner.encode(v),
            None => WireValue::Null,
        }
    }

    fn decode(&self, wire: &WireValue) -> Result<Self::Value, DecodeError> {
        match wire {
            WireValue::Null => Ok(None),
            other => self.inner.decode(other).map(Some),
        }
    }
}
