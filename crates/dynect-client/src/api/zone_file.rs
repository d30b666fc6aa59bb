//! Bulk zone file endpoints.

use crate::session::payload;
use crate::Session;
use dynect_core::{BulkMethod, ResourcePath, Result, ZoneFileRequest};

/// Bulk zone file endpoints
pub struct ZoneFileApi<'a> {
    session: &'a Session,
}

impl<'a> ZoneFileApi<'a> {
    pub(crate) const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Create a zone from a master-format zone file
    pub async fn create(&self, zone: &str, contents: &str) -> Result<()> {
        self.upload(zone, BulkMethod::Create, contents).await
    }

    /// Replace the contents of a zone with a master-format zone file
    pub async fn update(&self, zone: &str, contents: &str) -> Result<()> {
        self.upload(zone, BulkMethod::Update, contents).await
    }

    async fn upload(&self, zone: &str, bulk: BulkMethod, contents: &str) -> Result<()> {
        let request = ZoneFileRequest {
            file: contents.to_string(),
        };
        self.session
            .mutate(
                &ResourcePath::zone_file(zone),
                bulk.method(),
                Some(payload(&request)?),
            )
            .await
    }
}
