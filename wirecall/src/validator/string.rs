use regex::Regex;

use super::{Validator, check_bounds};
use crate::error::{ConfigError, ValidationError};

/// String validator: character-count bounds and an optional pattern.
///
/// Length counts Unicode scalar values, not bytes. The pattern must match
/// somewhere in the string; anchor it (`^...$`) to require a full match.
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl StringValidator {
    /// Creates a validator, compiling `pattern` if one is given.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] if `min_length > max_length`,
    /// or [`ConfigError::InvalidPattern`] if the pattern does not compile.
    pub fn new(
        min_length: Option<usize>,
        max_length: Option<usize>,
        pattern: Option<&str>,
    ) -> Result<Self, ConfigError> {
        check_bounds(min_length.as_ref(), max_length.as_ref())?;
        let pattern = pattern.map(Regex::new).transpose()?;
        Ok(Self {
            min_length,
            max_length,
            pattern,
        })
    }

    /// A validator with no constraints.
    pub fn unconstrained() -> Self {
        Self {
            min_length: None,
            max_length: None,
            pattern: None,
        }
    }

    /// Returns the pattern source, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl Validator for StringValidator {
    type Value = String;

    fn validate(&self, value: &String) -> Result<(), ValidationError> {
        let length = value.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(ValidationError::TooShort {
                    value: value.clone(),
                    min,
                });
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(ValidationError::TooLong {
                    value: value.clone(),
                    max,
                });
            }
        }

        if let Some(re) = &self.pattern {
            if !re.is_match(value) {
                return Err(ValidationError::PatternMismatch {
                    value: value.clone(),
                    pattern: re.as_str().to_string(),
                });
            }
        }

        Ok(())
    }
}
