use serde::{Deserialize, Deserializer, Serialize};

use crate::{DnsmeError, Result};

/// A response payload that may carry a list of API error messages.
///
/// The API answers failed mutations with HTTP 200 and a populated `error`
/// array, so every payload that can carry one is checked before it is handed
/// back to the caller.
pub trait ApiPayload: Sized {
    /// Error messages reported by the API
    fn api_errors(&self) -> &[String];

    /// Convert a payload with a non-empty error list into [`DnsmeError::Api`]
    fn into_result(self) -> Result<Self> {
        let errors = self.api_errors();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(DnsmeError::from_messages(errors))
        }
    }
}

/// Bare error payload, used when a non-success status carries only errors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    /// Error messages
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: Vec<String>,
}

impl ApiPayload for ErrorPayload {
    fn api_errors(&self) -> &[String] {
        &self.error
    }
}

/// List of zone names as returned by `/domains/` and `/secondary/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainList {
    /// Zone names
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<String>,
}

impl DomainList {
    /// Returns the names sorted lexicographically
    #[must_use]
    pub fn sorted(mut self) -> Vec<String> {
        self.list.sort();
        self.list
    }
}

/// The API sends `null` for empty collections on some endpoints
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
