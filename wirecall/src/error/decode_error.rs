//! Wire shape mismatches raised while decoding.

use thiserror::Error;

use super::ValidationError;
use crate::wire::{WirePath, WireValue, kind_of};

/// Errors raised by [`Serializer::decode`](crate::serializer::Serializer::decode).
///
/// Every variant except [`DecodeError::Json`] carries the [`WirePath`] of the
/// offending value. Composite serializers prepend their own segment as the
/// error travels outward, so the final path points from the document root to
/// the failing field or element.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The wire value has the wrong shape or content for the target type.
    #[error("{path}: expected {expected}, got {actual}")]
    Mismatch {
        /// What the serializer expected (e.g. `string`, `timestamp in format ...`).
        expected: String,
        /// What was found on the wire.
        actual: String,
        /// Location of the value.
        path: WirePath,
    },

    /// A required object field is absent.
    #[error("{path}: missing required field")]
    MissingField {
        /// Location of the missing field.
        path: WirePath,
    },

    /// An object contains a field the strict reader does not know.
    #[error("{path}: unknown field")]
    UnknownField {
        /// Location of the unknown field.
        path: WirePath,
    },

    /// A union carries a tag that is not one of its variants.
    #[error("{path}: unknown tag '{tag}'")]
    UnknownTag {
        /// The tag found on the wire.
        tag: String,
        /// Location of the union value.
        path: WirePath,
    },

    /// The value decoded but violates its declared constraints.
    #[error("{path}: {source}")]
    Constraint {
        /// Location of the value.
        path: WirePath,
        /// The failed constraint.
        #[source]
        source: ValidationError,
    },

    /// The input text is not JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Creates a mismatch at the root, describing `actual` by its JSON kind.
    pub fn mismatch(expected: impl Into<String>, actual: &WireValue) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            actual: kind_of(actual).to_string(),
            path: WirePath::root(),
        }
    }

    /// Creates a mismatch at the root with a free-form description of what was found.
    pub fn invalid(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            actual: actual.into(),
            path: WirePath::root(),
        }
    }

    /// Creates a missing-field error for `name`.
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::MissingField {
            path: WirePath::root().field(name),
        }
    }

    /// Returns the location of the failure, if known.
    pub fn path(&self) -> Option<&WirePath> {
        match self {
            Self::Mismatch { path, .. }
            | Self::MissingField { path }
            | Self::UnknownField { path }
            | Self::UnknownTag { path, .. }
            | Self::Constraint { path, .. } => Some(path),
            Self::Json(_) => None,
        }
    }

    fn path_mut(&mut self) -> Option<&mut WirePath> {
        match self {
            Self::Mismatch { path, .. }
            | Self::MissingField { path }
            | Self::UnknownField { path }
            | Self::UnknownTag { path, .. }
            | Self::Constraint { path, .. } => Some(path),
            Self::Json(_) => None,
        }
    }

    /// Prepends an object key to the error path.
    pub fn at_field(mut self, name: &str) -> Self {
        if let Some(path) = self.path_mut() {
            path.prepend_field(name);
        }
        self
    }

    /// Prepends an array index to the error path.
    pub fn at_index(mut self, index: usize) -> Self {
        if let Some(path) = self.path_mut() {
            path.prepend_index(index);
        }
        self
    }

    /// Returns `true` if the value decoded but failed validation.
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }
}

impl From<ValidationError> for DecodeError {
    fn from(source: ValidationError) -> Self {
        Self::Constraint {
            path: WirePath::root(),
            source,
        }
    }
}
