use std::fmt::Debug;

use super::{Validator, check_bounds};
use crate::error::{ConfigError, ValidationError};

/// Sequence validator: item count bounds, then every element.
#[derive(Debug, Clone)]
pub struct ArrayValidator<V> {
    element: V,
    min_items: Option<usize>,
    max_items: Option<usize>,
}

impl<V: Validator> ArrayValidator<V> {
    /// Creates a validator with inclusive item count bounds.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] if `min_items > max_items`.
    pub fn new(
        element: V,
        min_items: Option<usize>,
        max_items: Option<usize>,
    ) -> Result<Self, ConfigError> {
        check_bounds(min_items.as_ref(), max_items.as_ref())?;
        Ok(Self {
            element,
            min_items,
            max_items,
        })
    }

    /// Validates elements only, with no count bounds.
    pub fn unbounded(element: V) -> Self {
        Self {
            element,
            min_items: None,
            max_items: None,
        }
    }

    /// Returns the lower bound.
    pub fn min_items(&self) -> Option<usize> {
        self.min_items
    }

    /// Returns the upper bound.
    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }
}

impl<V> Validator for ArrayValidator<V>
where
    V: Validator,
    V::Value: Debug,
{
    type Value = Vec<V::Value>;

    fn validate(&self, value: &Self::Value) -> Result<(), ValidationError> {
        if let Some(min) = self.min_items {
            if value.len() < min {
                return Err(ValidationError::TooFewItems {
                    value: format!("{value:?}"),
                    min,
                });
            }
        }

        if let Some(max) = self.max_items {
            if value.len() > max {
                return Err(ValidationError::TooManyItems {
                    value: format!("{value:?}"),
                    max,
                });
            }
        }

        for (i, item) in value.iter().enumerate() {
            self.element.validate(item).map_err(|e| e.in_element(i))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{ComparableValidator, EmptyValidator};

    fn two_to_four() -> ArrayValidator<EmptyValidator<u64>> {
        ArrayValidator::new(EmptyValidator::new(), Some(2), Some(4)).unwrap()
    }

    #[test]
    fn test_lengths_within_bounds_pass() {
        let v = two_to_four();
        for len in 2..=4 {
            assert!(v.validate(&vec![0; len]).is_ok(), "length {len} should pass");
        }
    }

    #[test]
    fn test_too_few() {
        let err = two_to_four().validate(&vec![7]).unwrap_err();
        assert_eq!(err.to_string(), "[7] must have at least 2 items");
        assert!(err.is_lower_bound());
    }

    #[test]
    fn test_too_many() {
        let err = two_to_four().validate(&vec![1, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(err.to_string(), "[1, 2, 3, 4, 5] must have at most 4 items");
        assert!(err.is_upper_bound());
    }

    #[test]
    fn test_element_failure_reports_index() {
        let v = ArrayValidator::unbounded(ComparableValidator::new(None, Some(10u64)).unwrap());
        let err = v.validate(&vec![1, 10, 11]).unwrap_err();
        assert_eq!(err.to_string(), "item 2: 11 must be at most 10");
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = ArrayValidator::new(EmptyValidator::<u64>::new(), Some(5), Some(1));
        assert!(matches!(result, Err(ConfigError::InvalidBounds { .. })));
    }

    #[test]
    fn test_accessors() {
        let v = two_to_four();
        assert_eq!(v.min_items(), Some(2));
        assert_eq!(v.max_items(), Some(4));
    }
}
