use thiserror::Error;

use crate::types::{ResponseStatus, ServiceMessage};

/// Result type alias for DynECT operations
pub type Result<T> = std::result::Result<T, DynectError>;

/// Errors that can occur when talking to the DynECT API
#[derive(Error, Debug)]
pub enum DynectError {
    /// The network exchange could not be completed
    #[error("transport failed: {0}")]
    Transport(String),

    /// The service answered with a status other than `success`
    #[error("service rejected the request ({status}){}", summarize(messages))]
    Rejected {
        /// Status reported in the response envelope
        status: ResponseStatus,
        /// Messages attached to the response envelope
        messages: Vec<ServiceMessage>,
    },

    /// Input rejected locally before any request was sent
    #[error("validation failed: {0}")]
    Validation(String),

    /// Record kind outside the supported allow-list
    #[error("unsupported record kind: {0}")]
    UnknownRecordKind(String),

    /// The response body was not a usable envelope
    #[error("unexpected response: {0}")]
    Decode(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl DynectError {
    /// Returns true if the service answered but refused the request
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns true if the input was refused before reaching the network
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownRecordKind(_))
    }

    /// Returns true if the network exchange failed
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Messages the service attached to a rejection, if any
    #[must_use]
    pub fn service_messages(&self) -> &[ServiceMessage] {
        match self {
            Self::Rejected { messages, .. } => messages,
            _ => &[],
        }
    }
}

fn summarize(messages: &[ServiceMessage]) -> String {
    let details: Vec<&str> = messages
        .iter()
        .filter_map(|m| m.info.as_deref())
        .collect();

    if details.is_empty() {
        String::new()
    } else {
        format!(": {}", details.join("; "))
    }
}
