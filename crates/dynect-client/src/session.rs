//! Authenticated session against the DynECT API.

use crate::api::*;
use crate::config::{
    Credentials, AUTH_TOKEN_HEADER, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, JSON_CONTENT_TYPE,
};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use dynect_core::{
    flatten_value, strip_references, DynectError, Envelope, Method, ResourcePath, Result,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, warn};

/// A session with the DynECT API.
///
/// Holds the base endpoint, the token issued by [`connect`](Self::connect)
/// and the raw body of the most recent response. Every operation performs
/// at most one request and never retries.
///
/// Clones share the same token and response cache. Exchanges made through
/// one session and its clones run one at a time, so the cache always holds
/// the body of the exchange that finished last.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    transport: Box<dyn Transport>,
    base_url: String,
    exchange: AsyncMutex<()>,
    token: Mutex<Option<String>>,
    last_response: Mutex<Option<String>>,
}

impl Session {
    /// Create an unauthenticated session against the public endpoint
    pub fn new() -> Result<Self> {
        SessionBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Log in and keep the issued token for later requests.
    ///
    /// A refusal by the service is returned as [`DynectError::Rejected`] and
    /// leaves the session unauthenticated.
    pub async fn connect(&self, credentials: &Credentials) -> Result<()> {
        let body = payload(credentials)?;
        let _exchange = self.inner.exchange.lock().await;
        let envelope = self
            .send(&ResourcePath::session(), Method::Post, Some(body))
            .await?;
        let envelope = self.accept(envelope)?;

        let token = envelope
            .data
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| DynectError::Decode("login response carried no token".to_string()))?;

        *lock(&self.inner.token) = Some(token.to_string());
        info!(customer = %credentials.customer_name, user = %credentials.user_name, "session established");
        Ok(())
    }

    /// Log out.
    ///
    /// The local token is dropped whatever the outcome; the service decides
    /// whether the token is actually invalidated.
    pub async fn disconnect(&self) -> Result<()> {
        let exchange = self.inner.exchange.lock().await;
        let result = self.send(&ResourcePath::session(), Method::Delete, None).await;
        lock(&self.inner.token).take();
        drop(exchange);

        self.accept(result?)?;
        info!("session closed");
        Ok(())
    }

    /// Returns true while a token is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        lock(&self.inner.token).is_some()
    }

    /// The current session token, if logged in
    #[must_use]
    pub fn token(&self) -> Option<String> {
        lock(&self.inner.token).clone()
    }

    /// Raw body of the most recent response.
    ///
    /// `None` before the first call and after a call whose exchange failed.
    #[must_use]
    pub fn last_response(&self) -> Option<String> {
        lock(&self.inner.last_response).clone()
    }

    /// Base endpoint every resource path is appended to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Access zone endpoints
    #[must_use]
    pub fn zones(&self) -> ZoneApi<'_> {
        ZoneApi::new(self)
    }

    /// Access node endpoints
    #[must_use]
    pub fn nodes(&self) -> NodeApi<'_> {
        NodeApi::new(self)
    }

    /// Access typed record endpoints
    #[must_use]
    pub fn records(&self) -> RecordApi<'_> {
        RecordApi::new(self)
    }

    /// Access HTTP redirect endpoints
    #[must_use]
    pub fn redirects(&self) -> RedirectApi<'_> {
        RedirectApi::new(self)
    }

    /// Access bulk zone file endpoints
    #[must_use]
    pub fn zone_files(&self) -> ZoneFileApi<'_> {
        ZoneFileApi::new(self)
    }

    /// Access job endpoints
    #[must_use]
    pub fn jobs(&self) -> JobApi<'_> {
        JobApi::new(self)
    }

    /// Send one request and decode the response envelope.
    ///
    /// The body is sent only when `payload` is a non-empty value. The status
    /// field of the envelope is not interpreted here, and neither is the HTTP
    /// status line.
    ///
    /// Waits for any exchange already in flight on this session or a clone.
    pub async fn execute(
        &self,
        path: &ResourcePath,
        method: Method,
        payload: Option<Value>,
    ) -> Result<Envelope> {
        let _exchange = self.inner.exchange.lock().await;
        self.send(path, method, payload).await
    }

    /// One exchange; the caller holds the exchange lock
    async fn send(
        &self,
        path: &ResourcePath,
        method: Method,
        payload: Option<Value>,
    ) -> Result<Envelope> {
        lock(&self.inner.last_response).take();

        let url = format!("{}/{}/", self.inner.base_url, path);
        let token = self.token();
        let body = match payload.filter(|value| !is_empty_payload(value)) {
            Some(value) => Some(serde_json::to_string(&value)?),
            None => None,
        };

        debug!(
            method = %method,
            url = %url,
            has_body = body.is_some(),
            authenticated = token.is_some(),
            "sending request"
        );

        let mut headers = vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())];
        if let Some(token) = token {
            headers.push((AUTH_TOKEN_HEADER.to_string(), token));
        }

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };

        let raw = self.inner.transport.send(request).await?;
        debug!(bytes = raw.len(), "response body read");
        *lock(&self.inner.last_response) = Some(raw.clone());

        Envelope::from_body(&raw)
    }

    /// Send a state-changing request; succeed only on a `success` status
    pub(crate) async fn mutate(
        &self,
        path: &ResourcePath,
        method: Method,
        payload: Option<Value>,
    ) -> Result<()> {
        let envelope = self.execute(path, method, payload).await?;
        self.accept(envelope).map(drop)
    }

    /// Read one object and flatten its `rdata` into the top level
    pub(crate) async fn read_object(&self, path: &ResourcePath) -> Result<Map<String, Value>> {
        let envelope = self.execute(path, Method::Get, None).await?;
        let envelope = self.accept(envelope)?;
        flatten_value(&envelope.data)
    }

    /// Read a list of references, stripped down to bare identifiers.
    ///
    /// An empty successful listing yields an empty list.
    pub(crate) async fn read_references(
        &self,
        path: &ResourcePath,
        prefix: &str,
    ) -> Result<Vec<String>> {
        let envelope = self.execute(path, Method::Get, None).await?;
        let envelope = self.accept(envelope)?;
        if envelope.data_is_empty() {
            return Ok(Vec::new());
        }
        strip_references(&envelope.data, prefix)
    }

    pub(crate) fn accept(&self, envelope: Envelope) -> Result<Envelope> {
        envelope.into_success().map_err(|e| {
            warn!(error = %e, base_url = %self.inner.base_url, "request rejected by service");
            e
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.inner.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`Session`]
pub struct SessionBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    transport: Option<Box<dyn Transport>>,
}

impl SessionBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("dynect-rust/{}", env!("CARGO_PKG_VERSION")),
            transport: None,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout of the default transport
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header of the default transport
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Use a custom transport instead of the `reqwest` one
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the session
    pub fn build(self) -> Result<Session> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| DynectError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DynectError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                self.base_url,
                parsed.scheme()
            )));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(ReqwestTransport::new(self.timeout, &self.user_agent)?),
        };

        Ok(Session {
            inner: Arc::new(SessionInner {
                transport,
                base_url: self.base_url.trim_end_matches('/').to_string(),
                exchange: AsyncMutex::new(()),
                token: Mutex::new(None),
                last_response: Mutex::new(None),
            }),
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a request body as a JSON value
pub(crate) fn payload<T: Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).map_err(DynectError::Json)
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
