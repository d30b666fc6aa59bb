//! HTTP redirect endpoints.

use crate::session::payload;
use crate::Session;
use dynect_core::{CreateRedirectRequest, Method, RedirectCode, ResourcePath, Result};
use serde_json::{Map, Value};

/// HTTP redirect endpoints
pub struct RedirectApi<'a> {
    session: &'a Session,
}

impl<'a> RedirectApi<'a> {
    pub(crate) const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Redirect HTTP requests for `fqdn` to `target`.
    ///
    /// With `keep_uri` the requested path is appended to the target.
    pub async fn create(
        &self,
        zone: &str,
        fqdn: &str,
        target: &str,
        code: RedirectCode,
        keep_uri: bool,
    ) -> Result<()> {
        let request = CreateRedirectRequest::new(target, code, keep_uri);
        self.session
            .mutate(
                &ResourcePath::http_redirect(zone, Some(fqdn)),
                Method::Post,
                Some(payload(&request)?),
            )
            .await
    }

    /// Delete the redirect at `fqdn`
    pub async fn delete(&self, zone: &str, fqdn: &str) -> Result<()> {
        self.session
            .mutate(
                &ResourcePath::http_redirect(zone, Some(fqdn)),
                Method::Delete,
                None,
            )
            .await
    }

    /// Get the details of the redirect at `fqdn`
    pub async fn get(&self, zone: &str, fqdn: &str) -> Result<Map<String, Value>> {
        self.session
            .read_object(&ResourcePath::http_redirect(zone, Some(fqdn)))
            .await
    }

    /// List the names redirected within a zone
    pub async fn list(&self, zone: &str) -> Result<Vec<String>> {
        let path = ResourcePath::http_redirect(zone, None);
        self.session
            .read_references(&path, &path.reference_prefix())
            .await
    }
}
