use super::Serializer;
use crate::error::DecodeError;
use crate::validator::Validator;
use crate::wire::WireValue;

/// A serializer that validates every value it decodes.
///
/// Use it for values arriving from untrusted input: the decoded value is
/// only returned if it satisfies the paired validator. Encoding is passed
/// straight through, since outgoing values are validated before they are
/// encoded.
#[derive(Debug, Clone, Default)]
pub struct ValidatedSerializer<S, V> {
    serializer: S,
    validator: V,
}

impl<S, V> ValidatedSerializer<S, V>
where
    S: Serializer,
    V: Validator<Value = S::Value>,
{
    /// Pairs `serializer` with `validator`.
    pub fn new(serializer: S, validator: V) -> Self {
        Self {
            serializer,
            validator,
        }
    }

    /// Returns the validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<S, V> Serializer for ValidatedSerializer<S, V>
where
    S: Serializer,
    V: Validator<Value = S::Value>,
{
    type Value = S::Value;

    fn encode(&self, value: &Self::Value) -> WireValue {
        self.serializer.encode(value)
    }

    fn decode(&self, wire: &WireValue) -> Result<Self::Value, DecodeError> {
        let value = self.serializer.decode(wire)?;
        self.validator.validate(&value)?;
        Ok(value)
    }
}
