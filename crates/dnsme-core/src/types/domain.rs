use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ApiPayload};

/// A DNS zone hosted by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Zone name, e.g. `example.com`
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Authoritative name servers assigned to the zone
    #[serde(default, rename = "nameServer", deserialize_with = "null_as_default")]
    pub name_servers: Vec<String>,

    /// Vanity name servers configured for the zone
    #[serde(
        default,
        rename = "vanityNameServers",
        deserialize_with = "null_as_default"
    )]
    pub vanity_name_servers: Vec<String>,

    /// Whether the zone uses the Global Traffic Director
    #[serde(default, rename = "gtdEnabled")]
    pub gtd_enabled: bool,

    /// Errors reported by the API for a failed operation
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub error: Vec<String>,
}

impl Domain {
    /// Create a domain definition with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the name servers
    #[must_use]
    pub fn name_servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_servers = servers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the vanity name servers
    #[must_use]
    pub fn vanity_name_servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vanity_name_servers = servers.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the Global Traffic Director
    #[must_use]
    pub const fn gtd_enabled(mut self, enabled: bool) -> Self {
        self.gtd_enabled = enabled;
        self
    }
}

impl ApiPayload for Domain {
    fn api_errors(&self) -> &[String] {
        &self.error
    }
}
