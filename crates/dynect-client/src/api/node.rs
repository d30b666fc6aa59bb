//! Node API endpoints.

use crate::Session;
use dynect_core::{DynectError, Method, ResourcePath, Result};

/// Node API endpoints
pub struct NodeApi<'a> {
    session: &'a Session,
}

impl<'a> NodeApi<'a> {
    pub(crate) const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Delete a node, its records and every node beneath it
    pub async fn delete(&self, zone: &str, fqdn: &str) -> Result<()> {
        self.session
            .mutate(&ResourcePath::node(zone, fqdn), Method::Delete, None)
            .await
    }

    /// List the node names of a zone, optionally only those under `fqdn`
    pub async fn list(&self, zone: &str, fqdn: Option<&str>) -> Result<Vec<String>> {
        let envelope = self
            .session
            .execute(&ResourcePath::node_list(zone, fqdn), Method::Get, None)
            .await?;
        let envelope = self.session.accept(envelope)?;

        if envelope.data_is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_value(envelope.data)
            .map_err(|e| DynectError::Decode(format!("node list: {e}")))
    }
}
