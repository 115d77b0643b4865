//! Validator trait and implementations.
//!
//! A [`Validator`] checks that a value satisfies declared structural
//! constraints without changing it. Every bound is optional: `None` leaves
//! that side unconstrained. Bounds are inclusive, and the first failing bound
//! is reported.
//!
//! Callers run a validator before encoding a request, and again (through
//! [`ValidatedSerializer`](crate::serializer::ValidatedSerializer)) before
//! accepting a decoded value from the network.
//!
//! ## Examples
//!
//! ```rust
//! use wirecall::validator::{ArrayValidator, StringValidator, Validator};
//!
//! let names = StringValidator::new(Some(1), Some(8), Some("^[a-z]+$")).unwrap();
//! let list = ArrayValidator::new(names, Some(2), Some(4)).unwrap();
//!
//! assert!(list.validate(&vec!["ann".into(), "bob".into()]).is_ok());
//! assert!(list.validate(&vec!["ann".into()]).is_err());
//! ```

mod array;
mod binary;
mod comparable;
mod nullable;
mod string;

use std::marker::PhantomData;

pub use array::ArrayValidator;
pub use binary::BinaryValidator;
pub use comparable::ComparableValidator;
pub use nullable::NullableValidator;
pub use string::StringValidator;

use crate::error::{ConfigError, ValidationError};

/// Checks that values of type [`Validator::Value`] satisfy declared constraints.
pub trait Validator: Send + Sync {
    /// The value type this validator checks.
    type Value;

    /// Validates `value`.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError`] describing the first failing constraint.
    fn validate(&self, value: &Self::Value) -> Result<(), ValidationError>;
}

impl<V: Validator + ?Sized> Validator for &V {
    type Value = V::Value;

    fn validate(&self, value: &Self::Value) -> Result<(), ValidationError> {
        (**self).validate(value)
    }
}

/// Validator for types without declared constraints; always passes.
pub struct EmptyValidator<T>(PhantomData<fn(&T)>);

impl<T> EmptyValidator<T> {
    /// Creates the validator.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for EmptyValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyValidator<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EmptyValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EmptyValidator")
    }
}

impl<T> Validator for EmptyValidator<T> {
    type Value = T;

    fn validate(&self, _value: &T) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Validates one field of a record, naming the field in any failure.
///
/// Record validators written by bindings chain calls to this for each field.
///
/// ## Errors
///
/// Returns [`ValidationError::Field`] wrapping the field's failure.
pub fn validate_field<V: Validator>(
    name: &str,
    validator: &V,
    value: &V::Value,
) -> Result<(), ValidationError> {
    validator.validate(value).map_err(|e| e.in_field(name))
}

/// Rejects a lower bound that exceeds its upper bound.
pub(crate) fn check_bounds<T: PartialOrd + std::fmt::Debug>(
    min: Option<&T>,
    max: Option<&T>,
) -> Result<(), ConfigError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ConfigError::invalid_bounds(min, max)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_validator_always_passes() {
        let v = EmptyValidator::<String>::new();
        assert!(v.validate(&String::new()).is_ok());
        assert!(v.validate(&"anything".to_string()).is_ok());
    }

    #[test]
    fn test_validate_field_names_field() {
        let v = StringValidator::new(Some(3), None, None).unwrap();
        let err = validate_field("email", &v, &"ab".to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "field 'email': \"ab\" must be at least 3 characters"
        );
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(Some(&1), Some(&1)).is_ok());
        assert!(check_bounds::<u32>(None, Some(&1)).is_ok());
        assert!(check_bounds(Some(&2), Some(&1)).is_err());
    }

    #[test]
    fn test_reference_is_a_validator() {
        fn run<V: Validator>(v: V, value: &V::Value) -> bool {
            v.validate(value).is_ok()
        }
        let v = ComparableValidator::new(Some(1u64), Some(3)).unwrap();
        assert!(run(&v, &2));
        assert!(!run(&v, &4));
    }
}
