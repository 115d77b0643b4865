//! The result of one remote call.

use std::fmt::Debug;

use crate::error::CallError;

/// Message used for statuses that have no dedicated outcome.
pub const UNCLASSIFIED_MESSAGE: &str = "An error occurred.";

/// Outcome of a single dispatched call.
///
/// Exactly one variant is produced per request, and every HTTP status maps to
/// exactly one variant. Failures are ordinary values: callers match on all six
/// variants, or convert with [`CallOutcome::into_result`] to use `?`.
///
/// ## Type Parameters
///
/// - `R`: The route's result type.
/// - `E`: The route's domain error type.
///
/// ## Examples
///
/// ```rust
/// use wirecall::CallOutcome;
///
/// fn describe(outcome: CallOutcome<String, String>) -> String {
///     match outcome {
///         CallOutcome::Success(name) => format!("hello {name}"),
///         CallOutcome::RouteError(e) => format!("route refused: {e}"),
///         CallOutcome::BadInput(msg) => format!("bad input: {msg}"),
///         CallOutcome::RateLimited => "slow down".to_string(),
///         CallOutcome::ServerError(code, msg) => format!("{code}: {msg}"),
///         CallOutcome::TransportError(code, msg) => format!("{code:?}: {msg:?}"),
///     }
/// }
///
/// assert_eq!(describe(CallOutcome::Success("x".into())), "hello x");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome<R, E> {
    /// The route's result (2xx).
    Success(R),
    /// The route's domain error payload (409).
    RouteError(E),
    /// The server rejected the request as malformed (400); body as text.
    BadInput(String),
    /// The caller is being rate limited (429).
    RateLimited,
    /// The server failed (5xx); status and body as text.
    ServerError(u16, String),
    /// Anything else, including no response at all.
    TransportError(Option<u16>, Option<String>),
}

impl<R, E> CallOutcome<R, E> {
    /// Returns `true` for [`CallOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if repeating the call later may succeed.
    ///
    /// Nothing in this crate retries; this is informational for callers that do.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ServerError(..))
    }

    /// Returns the HTTP status this outcome was classified from, when it is
    /// implied by the variant or was recorded.
    ///
    /// `Success` and `TransportError(None, _)` carry no status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Success(_) => None,
            Self::RouteError(_) => Some(409),
            Self::BadInput(_) => Some(400),
            Self::RateLimited => Some(429),
            Self::ServerError(code, _) => Some(*code),
            Self::TransportError(code, _) => *code,
        }
    }

    /// Short lowercase name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::RouteError(_) => "route_error",
            Self::BadInput(_) => "bad_input",
            Self::RateLimited => "rate_limited",
            Self::ServerError(..) => "server_error",
            Self::TransportError(..) => "transport_error",
        }
    }

    /// Returns the success value, discarding any failure.
    pub fn success(self) -> Option<R> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the domain error, if this is a route error.
    pub fn route_error(self) -> Option<E> {
        match self {
            Self::RouteError(err) => Some(err),
            _ => None,
        }
    }

    /// Maps the success value.
    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> CallOutcome<T, E> {
        match self {
            Self::Success(value) => CallOutcome::Success(f(value)),
            Self::RouteError(err) => CallOutcome::RouteError(err),
            Self::BadInput(msg) => CallOutcome::BadInput(msg),
            Self::RateLimited => CallOutcome::RateLimited,
            Self::ServerError(code, msg) => CallOutcome::ServerError(code, msg),
            Self::TransportError(code, msg) => CallOutcome::TransportError(code, msg),
        }
    }
}

impl<R, E: Debug> CallOutcome<R, E> {
    /// Converts into a `Result`, moving every failure variant into [`CallError`].
    ///
    /// ## Errors
    ///
    /// Returns the [`CallError`] matching any non-success variant.
    pub fn into_result(self) -> Result<R, CallError<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::RouteError(err) => Err(CallError::Route(err)),
            Self::BadInput(msg) => Err(CallError::BadInput(msg)),
            Self::RateLimited => Err(CallError::RateLimited),
            Self::ServerError(code, message) => Err(CallError::Server { code, message }),
            Self::TransportError(code, message) => Err(CallError::Transport { code, message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Outcome = CallOutcome<u64, String>;

    #[test]
    fn test_success_accessors() {
        let outcome: Outcome = CallOutcome::Success(7);
        assert!(outcome.is_success());
        assert_eq!(outcome.status_code(), None);
        assert_eq!(outcome.kind(), "success");
        assert_eq!(outcome.clone().success(), Some(7));
        assert_eq!(outcome.into_result(), Ok(7));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Outcome::RouteError("c".into()).status_code(), Some(409));
        assert_eq!(Outcome::BadInput("b".into()).status_code(), Some(400));
        assert_eq!(Outcome::RateLimited.status_code(), Some(429));
        assert_eq!(Outcome::ServerError(503, String::new()).status_code(), Some(503));
        assert_eq!(Outcome::TransportError(None, None).status_code(), None);
        assert_eq!(Outcome::TransportError(Some(418), None).status_code(), Some(418));
    }

    #[test]
    fn test_retryable() {
        assert!(Outcome::RateLimited.is_retryable());
        assert!(Outcome::ServerError(500, "boom".into()).is_retryable());
        assert!(!Outcome::BadInput("bad".into()).is_retryable());
        assert!(!Outcome::Success(1).is_retryable());
    }

    #[test]
    fn test_into_result_failures() {
        assert_eq!(
            Outcome::RouteError("conflict".into()).into_result(),
            Err(CallError::Route("conflict".to_string()))
        );
        assert_eq!(
            Outcome::ServerError(500, "boom".into()).into_result(),
            Err(CallError::Server {
                code: 500,
                message: "boom".to_string()
            })
        );
        assert_eq!(
            Outcome::TransportError(Some(418), Some(UNCLASSIFIED_MESSAGE.into())).into_result(),
            Err(CallError::Transport {
                code: Some(418),
                message: Some("An error occurred.".to_string())
            })
        );
    }

    #[test]
    fn test_map_keeps_failures() {
        let ok: Outcome = CallOutcome::Success(2);
        assert_eq!(ok.map(|v| v * 10), CallOutcome::Success(20));

        let limited: Outcome = CallOutcome::RateLimited;
        assert_eq!(limited.map(|v| v * 10), CallOutcome::RateLimited);
    }

    #[test]
    fn test_route_error_accessor() {
        let outcome: Outcome = CallOutcome::RouteError("no_account".into());
        assert_eq!(outcome.route_error(), Some("no_account".to_string()));
    }
}
