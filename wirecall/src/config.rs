//! Transport configuration.
//!
//! A [`TransportConfig`] is owned by the transport built from it; there is no
//! process-wide client or shared header state.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::method::Host;

/// Environment variable holding the bearer token.
pub const ENV_ACCESS_TOKEN: &str = "WIRECALL_ACCESS_TOKEN";
/// Environment variable holding the [`Host::Api`] base URL.
pub const ENV_API_URL: &str = "WIRECALL_API_URL";
/// Environment variable holding the [`Host::Content`] base URL.
pub const ENV_CONTENT_URL: &str = "WIRECALL_CONTENT_URL";
/// Environment variable holding the [`Host::Notify`] base URL.
pub const ENV_NOTIFY_URL: &str = "WIRECALL_NOTIFY_URL";
/// Environment variable holding the request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "WIRECALL_TIMEOUT_MS";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("wirecall/", env!("CARGO_PKG_VERSION"));

/// Access token, base URLs and HTTP options for one transport.
#[derive(Clone)]
pub struct TransportConfig {
    access_token: String,
    api_url: Url,
    content_url: Option<Url>,
    notify_url: Option<Url>,
    timeout: Option<Duration>,
    user_agent: String,
}

impl TransportConfig {
    /// Creates a configuration with every host served from `api_url`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] or [`ConfigError::NotABaseUrl`] if
    /// `api_url` cannot serve as a base URL.
    pub fn new(access_token: impl Into<String>, api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            access_token: access_token.into(),
            api_url: parse_base_url(api_url)?,
            content_url: None,
            notify_url: None,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Loads configuration from the environment, reading a `.env` file first
    /// when one exists.
    ///
    /// [`ENV_ACCESS_TOKEN`] and [`ENV_API_URL`] are required;
    /// [`ENV_CONTENT_URL`], [`ENV_NOTIFY_URL`] and [`ENV_TIMEOUT_MS`] are optional.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] for an absent required variable, or
    /// the URL/timeout error for a malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let token =
            lookup(ENV_ACCESS_TOKEN).ok_or_else(|| ConfigError::missing_env(ENV_ACCESS_TOKEN))?;
        let api_url = lookup(ENV_API_URL).ok_or_else(|| ConfigError::missing_env(ENV_API_URL))?;
        let mut config = Self::new(token, &api_url)?;

        if let Some(url) = lookup(ENV_CONTENT_URL) {
            config = config.content_url(&url)?;
        }
        if let Some(url) = lookup(ENV_NOTIFY_URL) {
            config = config.notify_url(&url)?;
        }
        if let Some(ms) = lookup(ENV_TIMEOUT_MS) {
            let millis = match ms.trim().parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidTimeout { value: ms }),
            };
            config = config.timeout(Duration::from_millis(millis));
        }

        Ok(config)
    }

    /// Serves [`Host::Content`] routes from `url`.
    ///
    /// ## Errors
    ///
    /// Returns an error if `url` cannot serve as a base URL.
    pub fn content_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.content_url = Some(parse_base_url(url)?);
        Ok(self)
    }

    /// Serves [`Host::Notify`] routes from `url`.
    ///
    /// ## Errors
    ///
    /// Returns an error if `url` cannot serve as a base URL.
    pub fn notify_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.notify_url = Some(parse_base_url(url)?);
        Ok(self)
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the bearer token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the base URL for `host`, falling back to the API URL.
    pub fn base_url(&self, host: Host) -> &Url {
        match host {
            Host::Api => &self.api_url,
            Host::Content => self.content_url.as_ref().unwrap_or(&self.api_url),
            Host::Notify => self.notify_url.as_ref().unwrap_or(&self.api_url),
        }
    }

    /// Returns the full URL for `path` on `host`.
    ///
    /// The base URL's own path is kept: `https://h/2` + `/users/x` gives
    /// `https://h/2/users/x`.
    pub fn url_for(&self, host: Host, path: &str) -> String {
        let base = self.base_url(host).as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Returns the request timeout, if set.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the `User-Agent` header value.
    pub fn agent(&self) -> &str {
        &self.user_agent
    }
}

// The token stays out of debug output.
impl std::fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportConfig")
            .field("access_token", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .field("content_url", &self.content_url.as_ref().map(Url::as_str))
            .field("notify_url", &self.notify_url.as_ref().map(Url::as_str))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn parse_base_url(url: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(url)?;
    if parsed.cannot_be_a_base() {
        return Err(ConfigError::NotABaseUrl {
            url: url.to_string(),
        });
    }
    Ok(parsed)
}
