//! Construction-time configuration errors.

use thiserror::Error;

/// Errors in transport or capability configuration.
///
/// These occur while building a transport, a validator or a route, and
/// typically indicate programmer errors or a bad environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A URL parsed but cannot serve as a base for route paths.
    #[error("URL cannot be used as a base: {url}")]
    NotABaseUrl {
        /// The rejected URL.
        url: String,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable: {var}")]
    MissingEnv {
        /// The variable name.
        var: &'static str,
    },

    /// The configured timeout is not a positive number of milliseconds.
    #[error("Invalid timeout: {value}")]
    InvalidTimeout {
        /// The rejected value.
        value: String,
    },

    /// A lower bound is greater than its upper bound.
    #[error("Invalid bounds: minimum {min} is greater than maximum {max}")]
    InvalidBounds {
        /// Rendering of the lower bound.
        min: String,
        /// Rendering of the upper bound.
        max: String,
    },

    /// A timestamp format string contains an unknown specifier.
    #[error("Invalid timestamp format: {format}")]
    InvalidTimestampFormat {
        /// The rejected format string.
        format: String,
    },

    /// A string pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The HTTP client could not be constructed.
    #[error("HTTP client construction failed: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Creates a missing environment variable error.
    pub fn missing_env(var: &'static str) -> Self {
        Self::MissingEnv { var }
    }

    /// Creates an inverted-bounds error.
    pub fn invalid_bounds(min: impl std::fmt::Debug, max: impl std::fmt::Debug) -> Self {
        Self::InvalidBounds {
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }
}
