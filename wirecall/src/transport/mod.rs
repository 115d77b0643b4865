//! Transport capability.
//!
//! The dispatcher never talks HTTP directly. It hands a [`TransportRequest`]
//! to a [`Transport`] and gets back either a [`RawResponse`] (any status) or a
//! [`TransportFailure`]. [`HttpTransport`] is the `reqwest` implementation;
//! tests and alternative stacks provide their own.

mod http;

use std::future::Future;

use bytes::Bytes;

pub use http::HttpTransport;

use crate::error::TransportFailure;
use crate::method::{Host, RestMethod};

/// One outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Host the route is served from.
    pub host: Host,
    /// HTTP method.
    pub method: RestMethod,
    /// Route path, starting with `/`.
    pub path: String,
    /// JSON body, if the route takes an argument.
    pub body: Option<Bytes>,
}

/// A response with its status, whatever the status is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends requests and reports what came back.
///
/// Implementations return every HTTP response as [`RawResponse`], including
/// 4xx and 5xx; [`TransportFailure`] is reserved for exchanges that did not
/// complete. Each call produces exactly one result.
///
/// ## Examples
///
/// ```rust,ignore
/// use wirecall::transport::{RawResponse, Transport, TransportRequest};
/// use wirecall::error::TransportFailure;
///
/// struct Canned;
///
/// impl Transport for Canned {
///     async fn send(&self, _request: TransportRequest) -> Result<RawResponse, TransportFailure> {
///         Ok(RawResponse::new(200, r#"{"name":"x"}"#))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends `request` and waits for the response.
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportFailure>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(300, "").is_success());
        assert!(!RawResponse::new(409, "").is_success());
    }

    #[test]
    fn test_raw_response_text_is_lossy() {
        let response = RawResponse::new(500, vec![b'o', b'k', 0xFF]);
        assert_eq!(response.text(), "ok\u{FFFD}");
    }
}
