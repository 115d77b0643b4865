//! `reqwest` transport.

use reqwest::header::{CONTENT_TYPE, HeaderValue};

use super::{RawResponse, Transport, TransportRequest};
use crate::config::TransportConfig;
use crate::error::{ConfigError, TransportFailure};

/// HTTP transport owning its own `reqwest` client and configuration.
///
/// Every request carries `Authorization: Bearer <token>` from the
/// configuration it was built with. Two transports with different tokens can
/// coexist in one process.
///
/// ## Examples
///
/// ```rust,ignore
/// use wirecall::config::TransportConfig;
/// use wirecall::transport::HttpTransport;
///
/// let config = TransportConfig::new("sk-xxx", "https://api.example.com/2")?;
/// let transport = HttpTransport::new(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl HttpTransport {
    /// Builds the HTTP client described by `config`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if `reqwest` cannot build a client
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(config: TransportConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(config.agent());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ConfigError::HttpClient)?;
        Ok(Self { client, config })
    }

    /// Builds a transport from [`TransportConfig::from_env`].
    ///
    /// ## Errors
    ///
    /// Returns any configuration or client construction error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(TransportConfig::from_env()?)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportFailure> {
        let url = self.config.url_for(request.host, &request.path);
        tracing::debug!(method = %request.method, url = %url, "sending request");

        let mut req_builder = self
            .client
            .request(request.method.into(), &url)
            .bearer_auth(self.config.access_token());

        if let Some(body) = request.body {
            req_builder = req_builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = req_builder.send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "request failed without a response");
            TransportFailure::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(url = %url, status, error = %e, "failed to read response body");
            TransportFailure::with_status(status, e.to_string())
        })?;

        tracing::debug!(url = %url, status, bytes = body.len(), "received response");
        Ok(RawResponse { status, body })
    }
}
