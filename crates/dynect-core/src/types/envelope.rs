use crate::{DynectError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status reported by every response envelope
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponseStatus {
    /// The request was carried out
    Success,
    /// The request failed
    Failure,
    /// The request became a job that has not finished yet
    Incomplete,
    /// Any other status string
    Other(String),
}

impl ResponseStatus {
    /// Returns true only for `success`
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Wire name of the status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Incomplete => "incomplete",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ResponseStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "incomplete" => Self::Incomplete,
            _ => Self::Other(s),
        }
    }
}

impl From<ResponseStatus> for String {
    fn from(status: ResponseStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message attached to a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMessage {
    /// Human-readable text
    #[serde(default, rename = "INFO")]
    pub info: Option<String>,

    /// Subsystem that produced the message
    #[serde(default, rename = "SOURCE")]
    pub source: Option<String>,

    /// Severity level
    #[serde(default, rename = "LVL")]
    pub lvl: Option<String>,

    /// Error code, when the message reports an error
    #[serde(default, rename = "ERR_CD")]
    pub err_cd: Option<String>,
}

/// Decoded top-level response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Outcome of the request
    pub status: ResponseStatus,

    /// Response payload: an object, a list of references, or null
    #[serde(default)]
    pub data: Value,

    /// Job the request was tracked under
    #[serde(default, deserialize_with = "job_id_from_number_or_text")]
    pub job_id: Option<u64>,

    /// Informational and error messages
    #[serde(default, deserialize_with = "null_as_empty")]
    pub msgs: Vec<ServiceMessage>,
}

impl Envelope {
    /// Decode a raw response body
    pub fn from_body(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| DynectError::Decode(e.to_string()))
    }

    /// Returns true if the status is `success`
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the envelope if successful, a rejection otherwise
    pub fn into_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(DynectError::Rejected {
                status: self.status,
                messages: self.msgs,
            })
        }
    }

    /// Returns true if the payload is null, an empty list, or an empty object
    #[must_use]
    pub fn data_is_empty(&self) -> bool {
        match &self.data {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// Job ids arrive as numbers or as numeric strings; anything else is dropped
fn job_id_from_number_or_text<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum JobId {
        Number(u64),
        Text(String),
        Other(Value),
    }

    Ok(match Option::<JobId>::deserialize(deserializer)? {
        Some(JobId::Number(id)) => Some(id),
        Some(JobId::Text(text)) => text.trim().parse().ok(),
        Some(JobId::Other(_)) | None => None,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
