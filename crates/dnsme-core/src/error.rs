use thiserror::Error;

/// Result type alias for dnsme operations
pub type Result<T> = std::result::Result<T, DnsmeError>;

/// Errors that can occur when using the DNS Made Easy API
#[derive(Error, Debug)]
pub enum DnsmeError {
    /// The API rejected the key, secret or request date (HTTP 403)
    #[error("API access forbidden")]
    Forbidden,

    /// Resource not found (HTTP 404)
    #[error("not found: {resource}")]
    NotFound {
        /// Path of the resource that wasn't found
        resource: String,
    },

    /// The rate limit was still exhausted after the last allowed attempt
    #[error("API rate limit still exhausted after {attempts} attempts")]
    RetriesExhausted {
        /// Number of requests sent
        attempts: u32,
    },

    /// The API reported one or more validation errors in the response body
    #[error("{}", messages.join(" "))]
    Api {
        /// Error messages as returned by the API
        messages: Vec<String>,
    },

    /// A request without a response body came back with an unexpected status
    #[error("unexpected HTTP status {code}: {message}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, if any
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing an export document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl DnsmeError {
    /// Build an API error from the error list of a response payload
    #[must_use]
    pub fn from_messages(messages: &[String]) -> Self {
        Self::Api {
            messages: messages.to_vec(),
        }
    }

    /// Returns true if the request failed only because the rate limit never
    /// lifted, so the same call may succeed later.
    ///
    /// Transport errors are not included: the client already retried those
    /// while rate limited, otherwise they are fatal.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RetriesExhausted { .. })
    }

    /// Returns true if the resource does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Forbidden)
    }

    /// Returns the HTTP status code if one is known
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Forbidden => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_joins_messages() {
        let err = DnsmeError::from_messages(&[
            "Record name is invalid.".to_string(),
            "TTL is too low.".to_string(),
        ]);
        assert_eq!(err.to_string(), "Record name is invalid. TTL is too low.");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DnsmeError::Forbidden.status_code(), Some(403));
        assert_eq!(
            DnsmeError::NotFound {
                resource: "/domains/example.com".into()
            }
            .status_code(),
            Some(404)
        );
        assert_eq!(DnsmeError::Http("reset".into()).status_code(), None);
    }

    #[test]
    fn test_predicates() {
        assert!(DnsmeError::Forbidden.is_auth_error());
        assert!(DnsmeError::RetriesExhausted { attempts: 10 }.is_retryable());
        assert!(!DnsmeError::Forbidden.is_retryable());
        assert!(!DnsmeError::Http("connection refused".into()).is_retryable());
        assert!(DnsmeError::NotFound {
            resource: String::new()
        }
        .is_not_found());
    }
}
