//! Typed DNS record endpoints.
//!
//! One set of operations serves every [`RecordKind`]; the kind selects the
//! `{KIND}Record` collection of the path. Kinds given as strings are checked
//! against the supported list before anything is sent.

use crate::session::payload;
use crate::Session;
use dynect_core::{
    IntoRecordKind, Method, Rdata, RecordKind, RecordRequest, ResourcePath, Result,
};
use serde_json::{Map, Value};
use tracing::warn;

/// Typed DNS record endpoints
pub struct RecordApi<'a> {
    session: &'a Session,
}

impl<'a> RecordApi<'a> {
    pub(crate) const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Get one record, with its rdata fields flattened into the result.
    ///
    /// Without an `id` the node must hold exactly one record of that kind.
    /// When it holds several the service answers with a list of references,
    /// which is reported as
    /// [`DynectError::Decode`](dynect_core::DynectError::Decode); use
    /// [`list`](Self::list) to find the ids first.
    pub async fn get(
        &self,
        kind: impl IntoRecordKind,
        zone: &str,
        fqdn: &str,
        id: Option<&str>,
    ) -> Result<Map<String, Value>> {
        let kind = checked(kind)?;
        self.session
            .read_object(&ResourcePath::record(kind, zone, fqdn, id))
            .await
    }

    /// List the ids of the records of one kind at a node
    pub async fn list(
        &self,
        kind: impl IntoRecordKind,
        zone: &str,
        fqdn: &str,
    ) -> Result<Vec<String>> {
        let kind = checked(kind)?;
        let path = ResourcePath::record(kind, zone, fqdn, None);
        self.session
            .read_references(&path, &path.reference_prefix())
            .await
    }

    /// Add a record to a node
    pub async fn add(
        &self,
        kind: impl IntoRecordKind,
        zone: &str,
        fqdn: &str,
        record: &RecordRequest,
    ) -> Result<()> {
        let kind = checked(kind)?;
        self.session
            .mutate(
                &ResourcePath::record(kind, zone, fqdn, None),
                Method::Post,
                Some(payload(record)?),
            )
            .await
    }

    /// Update a record.
    ///
    /// Without an `id` the service replaces every record of that kind at the
    /// node with `record`.
    pub async fn update(
        &self,
        kind: impl IntoRecordKind,
        zone: &str,
        fqdn: &str,
        id: Option<&str>,
        record: &RecordRequest,
    ) -> Result<()> {
        let kind = checked(kind)?;
        self.session
            .mutate(
                &ResourcePath::record(kind, zone, fqdn, id),
                Method::Put,
                Some(payload(record)?),
            )
            .await
    }

    /// Delete a record
    pub async fn delete(
        &self,
        kind: impl IntoRecordKind,
        zone: &str,
        fqdn: &str,
        id: &str,
    ) -> Result<()> {
        let kind = checked(kind)?;
        self.session
            .mutate(
                &ResourcePath::record(kind, zone, fqdn, Some(id)),
                Method::Delete,
                None,
            )
            .await
    }

    /// Add an `A` record
    pub async fn add_a(&self, zone: &str, fqdn: &str, address: &str, ttl: u32) -> Result<()> {
        let record = RecordRequest::new(Rdata::a(address)).ttl(ttl);
        self.add(RecordKind::A, zone, fqdn, &record).await
    }

    /// Replace the `A` records of a node with a single address
    pub async fn update_a(&self, zone: &str, fqdn: &str, address: &str, ttl: u32) -> Result<()> {
        let record = RecordRequest::new(Rdata::a(address)).ttl(ttl);
        self.update(RecordKind::A, zone, fqdn, None, &record).await
    }

    /// Add a `CNAME` record pointing `fqdn` at `target`
    pub async fn add_cname(&self, zone: &str, fqdn: &str, target: &str, ttl: u32) -> Result<()> {
        let record = RecordRequest::new(Rdata::cname(target)).ttl(ttl);
        self.add(RecordKind::Cname, zone, fqdn, &record).await
    }

    /// Add an `MX` record
    pub async fn add_mx(
        &self,
        zone: &str,
        fqdn: &str,
        exchange: &str,
        preference: u16,
        ttl: u32,
    ) -> Result<()> {
        let record = RecordRequest::new(Rdata::mx(exchange, preference)).ttl(ttl);
        self.add(RecordKind::Mx, zone, fqdn, &record).await
    }
}

fn checked(kind: impl IntoRecordKind) -> Result<RecordKind> {
    kind.into_record_kind().map_err(|e| {
        warn!(error = %e, "record kind refused");
        e
    })
}
