use super::{Validator, check_bounds};
use crate::error::{ConfigError, ValidationError};

/// Byte-length validator for binary values.
#[derive(Debug, Clone, Default)]
pub struct BinaryValidator {
    min_bytes: Option<usize>,
    max_bytes: Option<usize>,
}

impl BinaryValidator {
    /// Creates a validator with inclusive byte-length bounds.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] if `min_bytes > max_bytes`.
    pub fn new(min_bytes: Option<usize>, max_bytes: Option<usize>) -> Result<Self, ConfigError> {
        check_bounds(min_bytes.as_ref(), max_bytes.as_ref())?;
        Ok(Self {
            min_bytes,
            max_bytes,
        })
    }
}

impl Validator for BinaryValidator {
    type Value = Vec<u8>;

    fn validate(&self, value: &Vec<u8>) -> Result<(), ValidationError> {
        let len = value.len();
        match (self.min_bytes, self.max_bytes) {
            (Some(min), _) if len < min => Err(ValidationError::TooFewBytes { len, min }),
            (_, Some(max)) if len > max => Err(ValidationError::TooManyBytes { len, max }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let v = BinaryValidator::new(Some(1), Some(4)).unwrap();
        assert!(v.validate(&vec![0]).is_ok());
        assert!(v.validate(&vec![0; 4]).is_ok());

        let err = v.validate(&vec![]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "binary value of 0 bytes must have at least 1 bytes"
        );
        assert!(matches!(
            v.validate(&vec![0; 5]),
            Err(ValidationError::TooManyBytes { len: 5, max: 4 })
        ));
    }

    #[test]
    fn test_inverted_bounds() {
        assert!(BinaryValidator::new(Some(2), Some(1)).is_err());
    }
}
