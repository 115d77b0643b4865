//! HTTP verbs and route hosts.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// HTTP methods a route can use.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use wirecall::RestMethod;
///
/// assert_eq!(RestMethod::from_str("POST").unwrap(), RestMethod::Post);
/// assert_eq!(RestMethod::Get.to_string(), "GET");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET
    Get,
    /// HTTP POST, the verb RPC-style routes use
    #[default]
    Post,
    /// HTTP PUT
    Put,
    /// HTTP PATCH
    Patch,
    /// HTTP DELETE
    Delete,
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        match method {
            RestMethod::Get => reqwest::Method::GET,
            RestMethod::Post => reqwest::Method::POST,
            RestMethod::Put => reqwest::Method::PUT,
            RestMethod::Patch => reqwest::Method::PATCH,
            RestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// The base host a route is served from.
///
/// Metadata calls, content transfer and change notification may live on
/// different hosts; each maps to a base URL in
/// [`TransportConfig`](crate::config::TransportConfig).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Host {
    /// Metadata and RPC routes.
    #[default]
    Api,
    /// Upload and download routes.
    Content,
    /// Long-poll notification routes.
    Notify,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_method_round_trips_through_strings() {
        for method in RestMethod::iter() {
            assert_eq!(RestMethod::from_str(&method.to_string()).unwrap(), method);
        }
    }

    #[test]
    fn test_method_into_reqwest() {
        assert_eq!(reqwest::Method::from(RestMethod::Post), reqwest::Method::POST);
        assert_eq!(reqwest::Method::from(RestMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn test_host_names() {
        assert_eq!(Host::Api.to_string(), "api");
        assert_eq!(Host::from_str("notify").unwrap(), Host::Notify);
        assert_eq!(Host::default(), Host::Api);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RestMethod::Patch).unwrap(), "\"PATCH\"");
        assert_eq!(serde_json::to_string(&Host::Content).unwrap(), "\"content\"");
        assert_eq!(
            serde_json::from_str::<RestMethod>("\"DELETE\"").unwrap(),
            RestMethod::Delete
        );
        assert_eq!(serde_json::from_str::<Host>("\"notify\"").unwrap(), Host::Notify);
        assert!(serde_json::from_str::<RestMethod>("\"post\"").is_err());
    }
}
