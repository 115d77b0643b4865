//! Sending encoded requests and classifying what comes back.
//!
//! [`classify`] is the pure status table. [`Dispatcher`] wraps a
//! [`Transport`], sends one request per call and classifies the result.

use bytes::Bytes;

use crate::error::{TransportFailure, ValidationError};
use crate::outcome::{CallOutcome, UNCLASSIFIED_MESSAGE};
use crate::route::Route;
use crate::serializer::Serializer;
use crate::transport::{RawResponse, Transport, TransportRequest};
use crate::validator::Validator;
use crate::wire::WireValue;

/// Maps a transport result to a [`CallOutcome`].
///
/// | status | outcome |
/// |---|---|
/// | 2xx | `Success`, decoded with `response` |
/// | 400 | `BadInput(body)` |
/// | 409 | `RouteError`, decoded with `error` |
/// | 429 | `RateLimited` |
/// | 500-599 | `ServerError(code, body)` |
/// | other | `TransportError(Some(code), "An error occurred.")` |
/// | none | `TransportError(None, message)` |
///
/// A body that fails to decode against its serializer becomes
/// `TransportError` carrying the status and the decode message. A failure
/// that carries a 400, 429 or 5xx status is classified as that error response
/// with an empty body; any other failure with a status keeps its own message
/// in `TransportError`.
///
/// ## Examples
///
/// ```rust
/// use wirecall::CallOutcome;
/// use wirecall::dispatch::classify;
/// use wirecall::serializer::StringSerializer;
/// use wirecall::transport::RawResponse;
///
/// let outcome = classify(
///     Ok(RawResponse::new(429, "")),
///     &StringSerializer,
///     &StringSerializer,
/// );
/// assert_eq!(outcome, CallOutcome::RateLimited);
/// ```
pub fn classify<R, E>(
    result: Result<RawResponse, TransportFailure>,
    response: &R,
    error: &E,
) -> CallOutcome<R::Value, E::Value>
where
    R: Serializer,
    E: Serializer,
{
    match result {
        Err(TransportFailure {
            status: None,
            message,
        }) => CallOutcome::TransportError(None, message),
        Err(TransportFailure {
            status: Some(status),
            message,
        }) => match status {
            400 | 429 | 500..=599 => classify_error_status(status, &[], error),
            _ => CallOutcome::TransportError(Some(status), message),
        },
        Ok(raw) if raw.is_success() => match response.from_json(&raw.body) {
            Ok(value) => CallOutcome::Success(value),
            Err(e) => {
                tracing::warn!(status = raw.status, error = %e, "result body failed to decode");
                CallOutcome::TransportError(Some(raw.status), Some(e.to_string()))
            }
        },
        Ok(raw) => classify_error_status(raw.status, &raw.body, error),
    }
}

fn classify_error_status<R, E>(status: u16, body: &[u8], error: &E) -> CallOutcome<R, E::Value>
where
    E: Serializer,
{
    match status {
        500..=599 => CallOutcome::ServerError(status, body_text(body)),
        400 => CallOutcome::BadInput(body_text(body)),
        429 => CallOutcome::RateLimited,
        409 => match error.from_json(body) {
            Ok(value) => CallOutcome::RouteError(value),
            Err(e) => {
                tracing::warn!(status, error = %e, "route error body failed to decode");
                CallOutcome::TransportError(Some(status), Some(e.to_string()))
            }
        },
        _ => CallOutcome::TransportError(Some(status), Some(UNCLASSIFIED_MESSAGE.to_string())),
    }
}

fn body_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Sends route requests over a [`Transport`].
///
/// Holds no per-request state; share it by reference across tasks.
///
/// ## Examples
///
/// ```rust,ignore
/// use wirecall::{Dispatcher, HttpTransport, Route, TransportConfig};
/// use wirecall::serializer::{StringSerializer, VoidSerializer};
///
/// let dispatcher = Dispatcher::new(HttpTransport::new(TransportConfig::from_env()?)?);
/// let route = Route::builder().id("check/user").path("/check/user").build();
/// let outcome = dispatcher
///     .dispatch(&route, None, &VoidSerializer, &StringSerializer)
///     .await;
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    /// Creates a dispatcher that owns `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends an already-encoded request body and classifies the response.
    ///
    /// The transport is called exactly once.
    pub async fn dispatch<R, E>(
        &self,
        route: &Route,
        body: Option<&WireValue>,
        response: &R,
        error: &E,
    ) -> CallOutcome<R::Value, E::Value>
    where
        R: Serializer,
        E: Serializer,
    {
        let request = TransportRequest {
            host: route.host(),
            method: route.method(),
            path: route.path().to_string(),
            body: body.map(|wire| Bytes::from(wire.to_string())),
        };

        tracing::debug!(route = route.id(), has_body = request.body.is_some(), "dispatching");
        let result = self.transport.send(request).await;

        let outcome = classify(result, response, error);
        tracing::debug!(
            route = route.id(),
            status = ?outcome.status_code(),
            outcome = outcome.kind(),
            "classified response"
        );
        outcome
    }

    /// Validates and encodes `request`, then dispatches it.
    ///
    /// ## Errors
    ///
    /// Returns the [`ValidationError`] if `request` violates `validator`;
    /// nothing is sent in that case.
    pub async fn call<S, V, R, E>(
        &self,
        route: &Route,
        request: &S::Value,
        serializer: &S,
        validator: &V,
        response: &R,
        error: &E,
    ) -> Result<CallOutcome<R::Value, E::Value>, ValidationError>
    where
        S: Serializer,
        V: Validator<Value = S::Value>,
        R: Serializer,
        E: Serializer,
    {
        if let Err(e) = validator.validate(request) {
            tracing::debug!(route = route.id(), error = %e, "request rejected before sending");
            return Err(e);
        }
        let body = serializer.encode(request);
        Ok(self.dispatch(route, Some(&body), response, error).await)
    }
}
