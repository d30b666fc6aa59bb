use crate::{DynectError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

macro_rules! record_kinds {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// DNS record kinds the service manages
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RecordKind {
            $(
                #[doc = concat!("`", $name, "` record")]
                $variant,
            )+
        }

        impl RecordKind {
            /// Every supported record kind
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// DNS mnemonic of the kind (`A`, `MX`, ...)
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Path segment of the record collection (`ARecord`, `MXRecord`, ...)
            #[must_use]
            pub const fn path_segment(self) -> &'static str {
                match self {
                    $(Self::$variant => concat!($name, "Record"),)+
                }
            }
        }
    };
}

record_kinds! {
    A => "A",
    Aaaa => "AAAA",
    Cert => "CERT",
    Cname => "CNAME",
    Dhcid => "DHCID",
    Dname => "DNAME",
    Dnskey => "DNSKEY",
    Ds => "DS",
    Ipseckey => "IPSECKEY",
    Key => "KEY",
    Kx => "KX",
    Loc => "LOC",
    Mx => "MX",
    Naptr => "NAPTR",
    Ns => "NS",
    Nsap => "NSAP",
    Ptr => "PTR",
    Px => "PX",
    Rp => "RP",
    Soa => "SOA",
    Spf => "SPF",
    Srv => "SRV",
    Sshfp => "SSHFP",
    Txt => "TXT",
}

impl FromStr for RecordKind {
    type Err = DynectError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DynectError::UnknownRecordKind(s.to_string()))
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion into a checked [`RecordKind`].
///
/// Typed kinds pass through; strings are checked against the allow-list.
pub trait IntoRecordKind {
    /// Resolve to a supported record kind
    fn into_record_kind(self) -> Result<RecordKind>;
}

impl IntoRecordKind for RecordKind {
    fn into_record_kind(self) -> Result<RecordKind> {
        Ok(self)
    }
}

impl IntoRecordKind for &str {
    fn into_record_kind(self) -> Result<RecordKind> {
        self.parse()
    }
}

impl IntoRecordKind for String {
    fn into_record_kind(self) -> Result<RecordKind> {
        self.parse()
    }
}

impl IntoRecordKind for &String {
    fn into_record_kind(self) -> Result<RecordKind> {
        self.parse()
    }
}

/// Type-specific record data.
///
/// The shape depends on the record kind and is passed through to the
/// service untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rdata(Map<String, Value>);

impl Rdata {
    /// Empty rdata
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing field map
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Add or replace a field
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// `A` record data
    #[must_use]
    pub fn a(address: impl Into<String>) -> Self {
        Self::new().insert("address", address.into())
    }

    /// `AAAA` record data
    #[must_use]
    pub fn aaaa(address: impl Into<String>) -> Self {
        Self::new().insert("address", address.into())
    }

    /// `CNAME` record data
    #[must_use]
    pub fn cname(target: impl Into<String>) -> Self {
        Self::new().insert("cname", target.into())
    }

    /// `MX` record data
    #[must_use]
    pub fn mx(exchange: impl Into<String>, preference: u16) -> Self {
        Self::new()
            .insert("exchange", exchange.into())
            .insert("preference", preference)
    }

    /// `NS` record data
    #[must_use]
    pub fn ns(nsdname: impl Into<String>) -> Self {
        Self::new().insert("nsdname", nsdname.into())
    }

    /// `PTR` record data
    #[must_use]
    pub fn ptr(ptrdname: impl Into<String>) -> Self {
        Self::new().insert("ptrdname", ptrdname.into())
    }

    /// `TXT` record data
    #[must_use]
    pub fn txt(txtdata: impl Into<String>) -> Self {
        Self::new().insert("txtdata", txtdata.into())
    }

    /// `SRV` record data
    #[must_use]
    pub fn srv(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> Self {
        Self::new()
            .insert("priority", priority)
            .insert("weight", weight)
            .insert("port", port)
            .insert("target", target.into())
    }

    /// Look up a field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if no fields are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the underlying field map
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Rdata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Body for creating or replacing a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRequest {
    /// Type-specific data
    pub rdata: Rdata,

    /// TTL in seconds; 0 uses the zone default
    #[serde(default)]
    pub ttl: u32,
}

impl RecordRequest {
    /// Create a record body using the zone default TTL
    #[must_use]
    pub const fn new(rdata: Rdata) -> Self {
        Self { rdata, ttl: 0 }
    }

    /// Set the TTL
    #[must_use]
    pub const fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}
