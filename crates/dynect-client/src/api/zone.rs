//! Zone API endpoints.

use crate::session::payload;
use crate::Session;
use dynect_core::{
    CreateZoneRequest, DynectError, Method, ResourcePath, Result, ZoneChange, ZoneChangeRequest,
};
use serde_json::{Map, Value};

/// Zone API endpoints
pub struct ZoneApi<'a> {
    session: &'a Session,
}

impl<'a> ZoneApi<'a> {
    pub(crate) const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Create a new zone.
    ///
    /// `contact` is the administrative email address of the zone; an empty
    /// contact or name is rejected without contacting the service.
    pub async fn create(&self, contact: &str, name: &str, ttl: u32) -> Result<()> {
        if contact.trim().is_empty() {
            return Err(DynectError::Validation("zone contact is required".to_string()));
        }
        if name.trim().is_empty() {
            return Err(DynectError::Validation("zone name is required".to_string()));
        }

        let request = CreateZoneRequest {
            rname: contact.to_string(),
            zone: name.to_string(),
            ttl,
        };
        self.session
            .mutate(&ResourcePath::zone(name), Method::Post, Some(payload(&request)?))
            .await
    }

    /// Delete a zone
    pub async fn delete(&self, zone: &str) -> Result<()> {
        self.session
            .mutate(&ResourcePath::zone(zone), Method::Delete, None)
            .await
    }

    /// Apply a publish, freeze or thaw to a zone
    pub async fn change(&self, zone: &str, change: ZoneChange) -> Result<()> {
        self.session
            .mutate(
                &ResourcePath::zone(zone),
                Method::Put,
                Some(payload(&ZoneChangeRequest(change))?),
            )
            .await
    }

    /// Publish pending changes of a zone
    pub async fn publish(&self, zone: &str) -> Result<()> {
        self.change(zone, ZoneChange::Publish).await
    }

    /// Freeze a zone, preventing changes
    pub async fn freeze(&self, zone: &str) -> Result<()> {
        self.change(zone, ZoneChange::Freeze).await
    }

    /// Thaw a zone, permitting changes
    pub async fn thaw(&self, zone: &str) -> Result<()> {
        self.change(zone, ZoneChange::Thaw).await
    }

    /// Get the details of a zone
    pub async fn get(&self, zone: &str) -> Result<Map<String, Value>> {
        self.session.read_object(&ResourcePath::zone(zone)).await
    }

    /// List the names of all zones
    pub async fn list(&self) -> Result<Vec<String>> {
        let path = ResourcePath::zones();
        self.session
            .read_references(&path, &path.reference_prefix())
            .await
    }
}
