//! Wirecall Runtime Library
//!
//! Runtime support for generated bindings to JSON-over-HTTP RPC APIs. Each
//! remote operation ("route") takes one argument, returns one result, and may
//! fail with a route-specific domain error sent back with HTTP 409.
//!
//! ## Core Types
//!
//! - [`Serializer`] - Converts a value type to and from the JSON wire model
//! - [`Validator`] - Checks declared constraints before a value is sent or accepted
//! - [`Route`] - A named remote operation (host, path, verb)
//! - [`Transport`] - Sends one request and reports the raw response
//! - [`HttpTransport`] - `reqwest` implementation of [`Transport`]
//! - [`Dispatcher`] - Sends a route request and classifies the response
//! - [`CallOutcome`] - The six-way result of one call
//!
//! ## Data Flow
//!
//! caller value → validator checks it → serializer encodes it → dispatcher
//! sends it → dispatcher classifies the status and decodes the body with the
//! route's result or error serializer → [`CallOutcome`] returned to the caller.
//!
//! ## Examples
//!
//! ```rust
//! use wirecall::prelude::*;
//! use wirecall::dispatch::classify;
//! use wirecall::transport::RawResponse;
//!
//! let tags = ArraySerializer::new(StringSerializer);
//! let limits = ArrayValidator::new(StringValidator::unconstrained(), Some(1), Some(3)).unwrap();
//!
//! let request = vec!["draft".to_string()];
//! limits.validate(&request).unwrap();
//! assert_eq!(tags.to_json(&request), r#"["draft"]"#);
//!
//! let outcome = classify(
//!     Ok(RawResponse::new(409, r#""too_many_tags""#)),
//!     &VoidSerializer,
//!     &StringSerializer,
//! );
//! assert_eq!(outcome, CallOutcome::RouteError("too_many_tags".to_string()));
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod method;
pub mod outcome;
pub mod prelude;
pub mod route;
pub mod serializer;
pub mod transport;
pub mod validator;
pub mod wire;

// Re-export main types at crate root
pub use config::TransportConfig;
pub use dispatch::{Dispatcher, classify};
pub use error::{CallError, ConfigError, DecodeError, TransportFailure, ValidationError};
pub use method::{Host, RestMethod};
pub use outcome::CallOutcome;
pub use route::{Route, RouteBuilder};
pub use serializer::Serializer;
pub use transport::{HttpTransport, RawResponse, Transport, TransportRequest};
pub use validator::Validator;
pub use wire::{WireObject, WirePath, WireValue};
