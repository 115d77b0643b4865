//! Transport-level failures.

use thiserror::Error;

/// A failure reported by a [`Transport`](crate::transport::Transport).
///
/// Either no response arrived at all (`status` is `None`), or the transport
/// saw a status but could not complete the exchange, e.g. the body stream
/// broke. Ordinary non-2xx responses are not failures; transports return them
/// as [`RawResponse`](crate::transport::RawResponse) for classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "transport failure (status {}): {}",
    .status.map(|s| s.to_string()).unwrap_or_else(|| "none".to_string()),
    .message.as_deref().unwrap_or("no message")
)]
pub struct TransportFailure {
    /// HTTP status, when one was received.
    pub status: Option<u16>,
    /// Human-readable description.
    pub message: Option<String>,
}

impl TransportFailure {
    /// A failure with no response, e.g. connection refused or timeout.
    pub fn no_response(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: Some(message.into()),
        }
    }

    /// A failure after a status was received.
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: Some(message.into()),
        }
    }
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            message: Some(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_response_display() {
        let err = TransportFailure::no_response("connection refused");
        assert_eq!(err.status, None);
        assert_eq!(
            err.to_string(),
            "transport failure (status none): connection refused"
        );
    }

    #[test]
    fn test_with_status_display() {
        let err = TransportFailure::with_status(502, "body stream closed");
        assert_eq!(
            err.to_string(),
            "transport failure (status 502): body stream closed"
        );
    }

    #[test]
    fn test_empty_failure_display() {
        let err = TransportFailure {
            status: None,
            message: None,
        };
        assert_eq!(err.to_string(), "transport failure (status none): no message");
    }
}
