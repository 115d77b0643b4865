//! Call failures as an error type.

use std::fmt::Debug;

use thiserror::Error;

/// The failure variants of [`CallOutcome`](crate::outcome::CallOutcome),
/// produced by [`CallOutcome::into_result`](crate::outcome::CallOutcome::into_result)
/// so that callers who do not need exhaustive handling can use `?`.
///
/// ## Examples
///
/// ```rust,ignore
/// use wirecall::error::CallError;
///
/// fn report<E: std::fmt::Debug>(err: CallError<E>) {
///     match err {
///         CallError::Route(e) => eprintln!("Route error: {e:?}"),
///         CallError::BadInput(msg) => eprintln!("Bad input: {msg}"),
///         CallError::RateLimited => eprintln!("Slow down"),
///         CallError::Server { code, message } => eprintln!("{code}: {message}"),
///         CallError::Transport { .. } => eprintln!("{err}"),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError<E: Debug> {
    /// Domain error payload returned by the route (HTTP 409).
    #[error("Route error: {0:?}")]
    Route(E),

    /// The server rejected the request as malformed (HTTP 400).
    #[error("Bad input: {0}")]
    BadInput(String),

    /// The caller is being rate limited (HTTP 429).
    #[error("Rate limited")]
    RateLimited,

    /// The server failed (HTTP 5xx).
    #[error("Server error {code}: {message}")]
    Server {
        /// The 5xx status.
        code: u16,
        /// Response body as text.
        message: String,
    },

    /// Any other failure, including no response.
    #[error(
        "Transport error (status {}): {}",
        .code.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string()),
        .message.as_deref().unwrap_or("no message")
    )]
    Transport {
        /// Status, when one was received.
        code: Option<u16>,
        /// Description, when available.
        message: Option<String>,
    },
}

impl<E: Debug> CallError<E> {
    /// Returns `true` if repeating the call later may succeed.
    ///
    /// Nothing in this crate retries; this is informational for callers that do.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Server { .. })
    }
}
