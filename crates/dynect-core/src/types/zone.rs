use crate::types::Method;
use serde::{Deserialize, Serialize};

/// Default TTL for new zones, in seconds
pub const DEFAULT_ZONE_TTL: u32 = 3600;

/// Request to create a zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateZoneRequest {
    /// Administrative contact email
    pub rname: String,

    /// Zone name
    pub zone: String,

    /// Default TTL of the zone
    pub ttl: u32,
}

/// State changes applied to a whole zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneChange {
    /// Publish pending changes
    Publish,
    /// Block further changes
    Freeze,
    /// Allow changes again
    Thaw,
}

impl ZoneChange {
    /// Field name the service expects for this change
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Freeze => "freeze",
            Self::Thaw => "thaw",
        }
    }
}

impl std::fmt::Display for ZoneChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for a [`ZoneChange`], e.g. `{"publish": "TRUE"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneChangeRequest(pub ZoneChange);

impl Serialize for ZoneChangeRequest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.as_str(), "TRUE")?;
        map.end()
    }
}

/// Verb used for a bulk zone file upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkMethod {
    /// Create the zone from the file
    Create,
    /// Replace the zone contents with the file
    Update,
}

impl BulkMethod {
    /// HTTP verb carrying this upload
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::Create => Method::Post,
            Self::Update => Method::Put,
        }
    }
}

/// Body of a bulk zone file upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneFileRequest {
    /// Zone file contents in master file format
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zone_change_body() {
        assert_eq!(
            serde_json::to_value(ZoneChangeRequest(ZoneChange::Publish)).unwrap(),
            json!({"publish": "TRUE"})
        );
        assert_eq!(
            serde_json::to_value(ZoneChangeRequest(ZoneChange::Thaw)).unwrap(),
            json!({"thaw": "TRUE"})
        );
    }

    #[test]
    fn test_create_zone_body() {
        let request = CreateZoneRequest {
            rname: "admin@example.com".to_string(),
            zone: "example.com".to_string(),
            ttl: DEFAULT_ZONE_TTL,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"rname": "admin@example.com", "zone": "example.com", "ttl": 3600})
        );
    }

    #[test]
    fn test_bulk_methods() {
        assert_eq!(BulkMethod::Create.method(), Method::Post);
        assert_eq!(BulkMethod::Update.method(), Method::Put);
    }
}
