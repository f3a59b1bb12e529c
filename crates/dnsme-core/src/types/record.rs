use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::common::{null_as_default, ApiPayload};

/// Default routing location for records
pub const DEFAULT_GTD_LOCATION: &str = "DEFAULT";

/// DNS record types supported by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Canonical name
    Cname,
    /// Mail exchange: `<priority> <target>`
    Mx,
    /// Name server
    Ns,
    /// Pointer
    Ptr,
    /// Service: `<priority> <weight> <port> <target>`
    Srv,
    /// Text
    Txt,
    /// HTTP redirection
    Httpred,
    /// A type this client does not know about
    Other(String),
}

impl RecordType {
    /// The upper-case name used on the wire
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Httpred => "HTTPRED",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for RecordType {
    fn from(s: String) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "NS" => Self::Ns,
            "PTR" => Self::Ptr,
            "SRV" => Self::Srv,
            "TXT" => Self::Txt,
            "HTTPRED" => Self::Httpred,
            _ => Self::Other(s),
        }
    }
}

impl From<RecordType> for String {
    fn from(t: RecordType) -> Self {
        match t {
            RecordType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for RecordType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for RecordType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// A single resource record within a zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record name; empty for the zone apex
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Record identifier; 0 for records that don't exist yet
    #[serde(default)]
    pub id: u64,

    /// Record type; empty on a reply that only carries errors
    #[serde(default, rename = "type")]
    pub record_type: RecordType,

    /// Record data, format depends on the type
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: String,

    /// Global Traffic Director location
    #[serde(default, rename = "gtdLocation", deserialize_with = "null_as_default")]
    pub gtd_location: String,

    /// Time to live in seconds
    #[serde(default)]
    pub ttl: u32,

    /// Password for dynamic DNS updates
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub password: Option<String>,

    /// Errors reported by the API for a failed operation
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub error: Vec<String>,
}

impl Record {
    /// Create a new (not yet stored) record
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        data: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            id: 0,
            record_type,
            data: data.into(),
            gtd_location: DEFAULT_GTD_LOCATION.to_string(),
            ttl,
            password: None,
            error: Vec::new(),
        }
    }

    /// Set the record identifier, turning a save into an update
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Set the Global Traffic Director location
    #[must_use]
    pub fn gtd_location(mut self, location: impl Into<String>) -> Self {
        self.gtd_location = location.into();
        self
    }

    /// Set the dynamic DNS password
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Returns true if the record has not been created yet
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Record name as shown in zone files (`@` for the apex)
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "@"
        } else {
            &self.name
        }
    }

    /// Fill in the data of a CNAME record the API returned without it.
    ///
    /// The API may omit CNAME data on reads but requires it on writes, so the
    /// zone itself (`<domain>.`) is substituted.
    pub fn normalize(&mut self, domain: &str) {
        if self.record_type == RecordType::Cname && self.data.is_empty() {
            self.data = format!("{domain}.");
        }
    }

    /// Copy of this record that will be created from scratch when saved
    #[must_use]
    pub fn as_new(&self) -> Self {
        Self {
            id: 0,
            error: Vec::new(),
            ..self.clone()
        }
    }
}

impl ApiPayload for Record {
    fn api_errors(&self) -> &[String] {
        &self.error
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.display_name(),
            self.ttl,
            self.record_type,
            self.data
        )
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
