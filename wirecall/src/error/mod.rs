//! Error types.
//!
//! - [`ValidationError`]: a value violates a declared constraint.
//! - [`DecodeError`]: a wire value does not match the shape a serializer expects.
//! - [`ConfigError`]: a transport, route or validator was configured incorrectly.
//! - [`TransportFailure`]: the transport could not complete an exchange.
//! - [`CallError`]: the failure half of a call outcome, for use with `?`.

mod call_error;
mod config_error;
mod decode_error;
mod transport_failure;
mod validation_error;

pub use call_error::CallError;
pub use config_error::ConfigError;
pub use decode_error::DecodeError;
pub use transport_failure::TransportFailure;
pub use validation_error::ValidationError;
