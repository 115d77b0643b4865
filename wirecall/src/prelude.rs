//! Convenient re-exports for writing route bindings.
//!
//! Brings every serializer, validator and helper a binding needs into scope.
//!
//! ## Examples
//!
//! ```
//! use wirecall::prelude::*;
//!
//! let name = ValidatedSerializer::new(
//!     StringSerializer,
//!     StringValidator::new(Some(1), Some(32), None).unwrap(),
//! );
//! assert!(name.decode(&serde_json::json!("")).is_err());
//! ```

pub use crate::dispatch::Dispatcher;
pub use crate::error::{CallError, DecodeError, ValidationError};
pub use crate::method::{Host, RestMethod};
pub use crate::outcome::CallOutcome;
pub use crate::route::Route;
pub use crate::serializer::{
    ArraySerializer, BinarySerializer, BoolSerializer, F64Serializer, Field, I64Serializer,
    NullableSerializer, ObjectBuilder, ObjectReader, Serializer, StringSerializer,
    TimestampSerializer, U64Serializer, UnionReader, ValidatedSerializer, VoidSerializer,
    encode_tag, encode_variant,
};
pub use crate::transport::Transport;
pub use crate::validator::{
    ArrayValidator, BinaryValidator, ComparableValidator, EmptyValidator, NullableValidator,
    StringValidator, Validator, validate_field,
};
pub use crate::wire::WireValue;
