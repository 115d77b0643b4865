//! Declared-constraint violations.

use thiserror::Error;

/// Errors raised by [`Validator::validate`](crate::validator::Validator::validate).
///
/// Each message names the offending value, the bound that failed and the
/// bound's configured value. Values are rendered as text at the point of
/// failure so the error owns no borrowed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Sequence has fewer items than `min_items`.
    #[error("{value} must have at least {min} items")]
    TooFewItems {
        /// Debug rendering of the sequence.
        value: String,
        /// Configured lower bound.
        min: usize,
    },

    /// Sequence has more items than `max_items`.
    #[error("{value} must have at most {max} items")]
    TooManyItems {
        /// Debug rendering of the sequence.
        value: String,
        /// Configured upper bound.
        max: usize,
    },

    /// String is shorter than `min_length` characters.
    #[error("\"{value}\" must be at least {min} characters")]
    TooShort {
        /// The string.
        value: String,
        /// Configured lower bound.
        min: usize,
    },

    /// String is longer than `max_length` characters.
    #[error("\"{value}\" must be at most {max} characters")]
    TooLong {
        /// The string.
        value: String,
        /// Configured upper bound.
        max: usize,
    },

    /// String does not contain a match for `pattern`.
    #[error("\"{value}\" must match pattern \"{pattern}\"")]
    PatternMismatch {
        /// The string.
        value: String,
        /// The configured regular expression.
        pattern: String,
    },

    /// Byte string is shorter than `min_bytes`.
    #[error("binary value of {len} bytes must have at least {min} bytes")]
    TooFewBytes {
        /// Actual length.
        len: usize,
        /// Configured lower bound.
        min: usize,
    },

    /// Byte string is longer than `max_bytes`.
    #[error("binary value of {len} bytes must have at most {max} bytes")]
    TooManyBytes {
        /// Actual length.
        len: usize,
        /// Configured upper bound.
        max: usize,
    },

    /// Value is below `min_value`.
    #[error("{value} must be at least {min}")]
    BelowMinimum {
        /// Debug rendering of the value.
        value: String,
        /// Debug rendering of the bound.
        min: String,
    },

    /// Value is above `max_value`.
    #[error("{value} must be at most {max}")]
    AboveMaximum {
        /// Debug rendering of the value.
        value: String,
        /// Debug rendering of the bound.
        max: String,
    },

    /// An element of a sequence failed validation.
    #[error("item {index}: {source}")]
    Element {
        /// Position of the failing element.
        index: usize,
        /// Why it failed.
        #[source]
        source: Box<ValidationError>,
    },

    /// A record field failed validation.
    #[error("field '{field}': {source}")]
    Field {
        /// Name of the failing field.
        field: String,
        /// Why it failed.
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Wraps this error as the failure of element `index`.
    pub fn in_element(self, index: usize) -> Self {
        Self::Element {
            index,
            source: Box::new(self),
        }
    }

    /// Wraps this error as the failure of field `field`.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping element and field wrappers.
    pub fn root_cause(&self) -> &ValidationError {
        match self {
            Self::Element { source, .. } | Self::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns `true` for lower-bound failures of any kind.
    pub fn is_lower_bound(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::TooFewItems { .. }
                | Self::TooShort { .. }
                | Self::TooFewBytes { .. }
                | Self::BelowMinimum { .. }
        )
    }

    /// Returns `true` for upper-bound failures of any kind.
    pub fn is_upper_bound(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::TooManyItems { .. }
                | Self::TooLong { .. }
                | Self::TooManyBytes { .. }
                | Self::AboveMaximum { .. }
        )
    }
}
