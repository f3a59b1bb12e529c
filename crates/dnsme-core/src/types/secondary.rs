use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ApiPayload};

/// A zone for which the provider acts as secondary name server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryDomain {
    /// Zone name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Master IP addresses zone transfers are accepted from
    #[serde(default, rename = "ip", deserialize_with = "null_as_default")]
    pub ips: Vec<String>,

    /// Errors reported by the API for a failed operation
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub error: Vec<String>,
}

impl SecondaryDomain {
    /// Create a secondary zone definition
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ips: ips.into_iter().map(Into::into).collect(),
            error: Vec::new(),
        }
    }
}

impl ApiPayload for SecondaryDomain {
    fn api_errors(&self) -> &[String] {
        &self.error
    }
}
