use std::cmp::Ordering;
use std::fmt::Debug;

use super::{Validator, check_bounds};
use crate::error::{ConfigError, ValidationError};

/// Range validator for ordered values: `min_value <= value <= max_value`.
///
/// Used for integers, floats and any other `PartialOrd` type. A value that
/// does not compare with a bound (a float NaN) fails that bound.
#[derive(Debug, Clone)]
pub struct ComparableValidator<T> {
    min_value: Option<T>,
    max_value: Option<T>,
}

impl<T: PartialOrd + Debug> ComparableValidator<T> {
    /// Creates a validator with inclusive bounds.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] if `min_value > max_value`.
    pub fn new(min_value: Option<T>, max_value: Option<T>) -> Result<Self, ConfigError> {
        check_bounds(min_value.as_ref(), max_value.as_ref())?;
        Ok(Self {
            min_value,
            max_value,
        })
    }

    /// Returns the lower bound.
    pub fn min_value(&self) -> Option<&T> {
        self.min_value.as_ref()
    }

    /// Returns the upper bound.
    pub fn max_value(&self) -> Option<&T> {
        self.max_value.as_ref()
    }
}

impl<T> Validator for ComparableValidator<T>
where
    T: PartialOrd + Debug + Send + Sync,
{
    type Value = T;

    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if let Some(min) = &self.min_value {
            if matches!(value.partial_cmp(min), Some(Ordering::Less) | None) {
                return Err(ValidationError::BelowMinimum {
                    value: format!("{value:?}"),
                    min: format!("{min:?}"),
                });
            }
        }

        if let Some(max) = &self.max_value {
            if matches!(value.partial_cmp(max), Some(Ordering::Greater) | None) {
                return Err(ValidationError::AboveMaximum {
                    value: format!("{value:?}"),
                    max: format!("{max:?}"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_bounds() {
        let v = ComparableValidator::new(Some(1u64), Some(10)).unwrap();
        assert!(v.validate(&1).is_ok());
        assert!(v.validate(&10).is_ok());

        let err = v.validate(&0).unwrap_err();
        assert_eq!(err.to_string(), "0 must be at least 1");

        let err = v.validate(&11).unwrap_err();
        assert_eq!(err.to_string(), "11 must be at most 10");
    }

    #[test]
    fn test_one_sided() {
        let v = ComparableValidator::new(Some(-5i64), None).unwrap();
        assert!(v.validate(&i64::MAX).is_ok());
        assert!(v.validate(&-6).is_err());
    }

    #[test]
    fn test_float_nan_fails() {
        let v = ComparableValidator::new(Some(0.0f64), Some(1.0)).unwrap();
        assert!(v.validate(&0.5).is_ok());
        assert!(v.validate(&f64::NAN).is_err());
    }

    #[test]
    fn test_inverted_bounds() {
        let result = ComparableValidator::new(Some(3), Some(2));
        assert!(matches!(result, Err(ConfigError::InvalidBounds { .. })));
    }

    #[test]
    fn test_accessors() {
        let v = ComparableValidator::new(None, Some(9u32)).unwrap();
        assert_eq!(v.min_value(), None);
        assert_eq!(v.max_value(), Some(&9));
    }
}
