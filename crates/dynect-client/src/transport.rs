//! Pluggable HTTP transport.

use async_trait::async_trait;
use dynect_core::{DynectError, Method, Result};
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::debug;

/// A fully-built request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP verb
    pub method: Method,

    /// Absolute URL, including the trailing separator
    pub url: String,

    /// Header name/value pairs
    pub headers: Vec<(String, String)>,

    /// Encoded JSON body; `None` when nothing is sent
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value of the first header matching `name` (case-insensitive)
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Number of headers matching `name` (case-insensitive)
    #[must_use]
    pub fn header_count(&self, name: &str) -> usize {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .count()
    }
}

/// Carries one request to the service and returns the raw response body.
///
/// Implementations return the body for every HTTP status; only a failure to
/// complete the exchange is an error.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and read the full response body
    async fn send(&self, request: HttpRequest) -> Result<String>;
}

/// [`Transport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: HttpClient,
}

impl ReqwestTransport {
    /// Build a transport with the given timeout and User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .map_err(|e| DynectError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Wrap an already configured `reqwest` client
    #[must_use]
    pub const fn from_client(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<String> {
        let mut builder = self.http.request(to_reqwest(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DynectError::Transport(format!("request timed out: {e}"))
            } else {
                DynectError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        response
            .text()
            .await
            .map_err(|e| DynectError::Transport(format!("failed to read response body: {e}")))
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}
