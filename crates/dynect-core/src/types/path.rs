use crate::types::RecordKind;
use serde::{Deserialize, Serialize};

/// HTTP verb used for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Read a resource
    Get,
    /// Create a resource
    Post,
    /// Update a resource
    Put,
    /// Remove a resource
    Delete,
}

impl Method {
    /// Wire name of the verb
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of resource a path addresses; its first path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Login session
    Session,
    /// DNS zone
    Zone,
    /// Node (FQDN) within a zone
    Node,
    /// Listing of nodes within a zone
    NodeList,
    /// Typed DNS record
    Record(RecordKind),
    /// HTTP redirect service
    HttpRedirect,
    /// Asynchronous job
    Job,
    /// Bulk zone file
    ZoneFile,
}

impl ResourceKind {
    /// Path segment naming this resource kind
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Session => "Session",
            Self::Zone => "Zone",
            Self::Node => "Node",
            Self::NodeList => "NodeList",
            Self::Record(kind) => kind.path_segment(),
            Self::HttpRedirect => "HTTPRedirect",
            Self::Job => "Job",
            Self::ZoneFile => "ZoneFile",
        }
    }
}

/// Structured address of a remote resource.
///
/// Segments are always laid out as `Kind/zone/fqdn/id`. Only trailing
/// segments may be absent, which the constructors enforce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    kind: ResourceKind,
    segments: Vec<String>,
}

impl ResourcePath {
    /// The login session resource
    #[must_use]
    pub const fn session() -> Self {
        Self {
            kind: ResourceKind::Session,
            segments: Vec::new(),
        }
    }

    /// The collection of all zones
    #[must_use]
    pub const fn zones() -> Self {
        Self {
            kind: ResourceKind::Zone,
            segments: Vec::new(),
        }
    }

    /// A single zone
    #[must_use]
    pub fn zone(zone: &str) -> Self {
        Self::with(ResourceKind::Zone, [zone])
    }

    /// A node within a zone
    #[must_use]
    pub fn node(zone: &str, fqdn: &str) -> Self {
        Self::with(ResourceKind::Node, [zone, fqdn])
    }

    /// Nodes of a zone, optionally below a given node
    #[must_use]
    pub fn node_list(zone: &str, fqdn: Option<&str>) -> Self {
        let mut path = Self::with(ResourceKind::NodeList, [zone]);
        path.push(fqdn);
        path
    }

    /// Records of one kind at a node, or a single record when `id` is given
    #[must_use]
    pub fn record(kind: RecordKind, zone: &str, fqdn: &str, id: Option<&str>) -> Self {
        let mut path = Self::with(ResourceKind::Record(kind), [zone, fqdn]);
        path.push(id);
        path
    }

    /// HTTP redirects of a zone, or the one at `fqdn`
    #[must_use]
    pub fn http_redirect(zone: &str, fqdn: Option<&str>) -> Self {
        let mut path = Self::with(ResourceKind::HttpRedirect, [zone]);
        path.push(fqdn);
        path
    }

    /// A job by identifier
    #[must_use]
    pub fn job(job_id: &str) -> Self {
        Self::with(ResourceKind::Job, [job_id])
    }

    /// The bulk zone file of a zone
    #[must_use]
    pub fn zone_file(zone: &str) -> Self {
        Self::with(ResourceKind::ZoneFile, [zone])
    }

    /// Resource kind addressed by this path
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Prefix the service puts in front of child references of this path.
    ///
    /// List responses name each child as `/REST/<this path>/<child>/`.
    #[must_use]
    pub fn reference_prefix(&self) -> String {
        format!("/REST/{self}/")
    }

    fn with<const N: usize>(kind: ResourceKind, segments: [&str; N]) -> Self {
        Self {
            kind,
            segments: segments.iter().map(ToString::to_string).collect(),
        }
    }

    fn push(&mut self, segment: Option<&str>) {
        if let Some(segment) = segment.filter(|s| !s.is_empty()) {
            self.segments.push(segment.to_string());
        }
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.segment())?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
