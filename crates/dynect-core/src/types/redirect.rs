use serde::{Deserialize, Serialize};

/// HTTP status sent by a redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RedirectCode {
    /// 301 Moved Permanently
    Permanent,
    /// 302 Found
    #[default]
    Temporary,
}

impl RedirectCode {
    /// Numeric HTTP status
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Permanent => 301,
            Self::Temporary => 302,
        }
    }
}

impl Serialize for RedirectCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}

impl<'de> Deserialize<'de> for RedirectCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u16::deserialize(deserializer)? {
            301 => Ok(Self::Permanent),
            302 => Ok(Self::Temporary),
            other => Err(serde::de::Error::custom(format!(
                "unsupported redirect code {other}"
            ))),
        }
    }
}

/// Request to create an HTTP redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRedirectRequest {
    /// Status code to answer with
    pub code: RedirectCode,

    /// `Y` to append the requested URI to the target, `N` otherwise
    pub keep_uri: String,

    /// Full target URL
    pub url: String,
}

impl CreateRedirectRequest {
    /// Build a redirect body
    #[must_use]
    pub fn new(target: impl Into<String>, code: RedirectCode, keep_uri: bool) -> Self {
        Self {
            code,
            keep_uri: if keep_uri { "Y" } else { "N" }.to_string(),
            url: target.into(),
        }
    }
}
