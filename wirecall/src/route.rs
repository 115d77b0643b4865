//! Route definition with type-state builder pattern.
//!
//! A [`Route`] names one remote operation: where it lives (host and path) and
//! which verb it uses. The [`RouteBuilder`] uses a type-state pattern so a
//! route cannot be built without its id and path.

use std::marker::PhantomData;

use crate::method::{Host, RestMethod};

/// Marker types for builder state tracking.
pub mod builder_state {
    /// Marker for a field that has not been set.
    pub struct Missing;
    /// Marker for a field that has been set.
    pub struct Present;
}

use builder_state::{Missing, Present};

/// A remote operation.
///
/// ## Examples
///
/// ```rust
/// use wirecall::{Host, RestMethod, Route};
///
/// let route = Route::builder()
///     .id("users/get_current_account")
///     .path("/users/get_current_account")
///     .description("Information about the current user's account")
///     .build();
///
/// assert_eq!(route.host(), Host::Api);
/// assert_eq!(route.method(), RestMethod::Post);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: String,
    host: Host,
    method: RestMethod,
    path: String,
    description: Option<String>,
}

impl Route {
    /// Creates a new route builder.
    pub fn builder() -> RouteBuilder<Missing, Missing> {
        RouteBuilder::new()
    }

    /// Returns the route's identifier, used in logs.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the host the route is served from.
    pub fn host(&self) -> Host {
        self.host
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Type-state builder for [`Route`].
///
/// ## Type Parameters
///
/// - `Id`: State of the id field (`Missing` or `Present`).
/// - `Path`: State of the path field (`Missing` or `Present`).
pub struct RouteBuilder<Id, Path> {
    id: String,
    host: Host,
    method: RestMethod,
    path: String,
    description: Option<String>,
    _phantom: PhantomData<(Id, Path)>,
}

impl RouteBuilder<Missing, Missing> {
    /// Creates a builder for a `POST` route on [`Host::Api`].
    pub fn new() -> Self {
        Self {
            id: String::new(),
            host: Host::default(),
            method: RestMethod::default(),
            path: String::new(),
            description: None,
            _phantom: PhantomData,
        }
    }
}

impl Default for RouteBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

// Id setter - transitions Id from Missing to Present
impl<P> RouteBuilder<Missing, P> {
    /// Sets the route id.
    pub fn id(self, id: impl Into<String>) -> RouteBuilder<Present, P> {
        RouteBuilder {
            id: id.into(),
            host: self.host,
            method: self.method,
            path: self.path,
            description: self.description,
            _phantom: PhantomData,
        }
    }
}

// Path setter - transitions Path from Missing to Present
impl<I> RouteBuilder<I, Missing> {
    /// Sets the path. A leading `/` is added if missing.
    pub fn path(self, path: impl Into<String>) -> RouteBuilder<I, Present> {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        RouteBuilder {
            id: self.id,
            host: self.host,
            method: self.method,
            path,
            description: self.description,
            _phantom: PhantomData,
        }
    }
}

// Optional setters - available in any state
impl<I, P> RouteBuilder<I, P> {
    /// Sets the host. Defaults to [`Host::Api`].
    pub fn host(self, host: Host) -> Self {
        Self { host, ..self }
    }

    /// Sets the HTTP method. Defaults to [`RestMethod::Post`].
    pub fn method(self, method: RestMethod) -> Self {
        Self { method, ..self }
    }

    /// Sets a description.
    pub fn description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }
}

impl RouteBuilder<Present, Present> {
    /// Builds the route. Only available once id and path are set.
    pub fn build(self) -> Route {
        Route {
            id: self.id,
            host: self.host,
            method: self.method,
            path: self.path,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let route = Route::builder().id("ping").path("/ping").build();
        assert_eq!(route.id(), "ping");
        assert_eq!(route.host(), Host::Api);
        assert_eq!(route.method(), RestMethod::Post);
        assert_eq!(route.path(), "/ping");
        assert_eq!(route.description(), None);
    }

    #[test]
    fn test_builder_order_independence() {
        let route = Route::builder()
            .path("files/upload")
            .host(Host::Content)
            .description("Upload a file")
            .method(RestMethod::Put)
            .id("files/upload")
            .build();

        assert_eq!(route.path(), "/files/upload");
        assert_eq!(route.host(), Host::Content);
        assert_eq!(route.method(), RestMethod::Put);
        assert_eq!(route.description(), Some("Upload a file"));
    }

    #[test]
    fn test_clone_and_eq() {
        let route = Route::builder().id("a").path("/a").build();
        assert_eq!(route.clone(), route);
    }
}
