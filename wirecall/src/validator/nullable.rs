use super::Validator;
use crate::error::ValidationError;

/// Optional-value validator: checks the inner value only when present.
#[derive(Debug, Clone, Default)]
pub struct NullableValidator<V> {
    inner: V,
}

impl<V: Validator> NullableValidator<V> {
    /// Wraps `inner`.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: Validator> Validator for NullableValidator<V> {
    type Value = Option<V::Value>;

    fn validate(&self, value: &Self::Value) -> Result<(), ValidationError> {
        match value {
            Some(v) => self.inner.validate(v),
            None => Ok(()),
        }
    }
}
