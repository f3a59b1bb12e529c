//! Request authentication.
//!
//! Every request carries the API key, the current UTC date in RFC 1123 form
//! and a hex HMAC-SHA1 of that date string keyed by the secret. The server
//! rejects dates too far from its own clock with HTTP 403.

use chrono::{DateTime, Utc};
use dnsme_core::{DnsmeError, Result};
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use sha1::Sha1;
use std::fmt;

type HmacSha1 = Hmac<Sha1>;

// Header names are case-insensitive; `http` only accepts them lower-cased.

/// Header carrying the API key (`x-dnsme-apiKey`)
pub const API_KEY_HEADER: &str = "x-dnsme-apikey";

/// Header carrying the request date (`x-dnsme-requestDate`)
pub const REQUEST_DATE_HEADER: &str = "x-dnsme-requestdate";

/// Header carrying the HMAC of the request date
pub const HMAC_HEADER: &str = "x-dnsme-hmac";

/// Response header reporting the remaining request quota (`x-dnsme-requestsRemaining`)
pub const REQUESTS_REMAINING_HEADER: &str = "x-dnsme-requestsremaining";

/// API key pair used to sign requests
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
}

impl Credentials {
    /// Create a credential pair
    #[must_use]
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// The public API key
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Hex encoded HMAC-SHA1 of `request_date`, keyed by the secret
    pub fn sign(&self, request_date: &str) -> Result<String> {
        let mut mac = HmacSha1::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| DnsmeError::Config(format!("invalid secret key: {e}")))?;
        mac.update(request_date.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Authentication headers for a request sent at `now`
    pub fn headers(&self, now: DateTime<Utc>) -> Result<HeaderMap> {
        let date = request_date(now);
        let signature = self.sign(&date)?;

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(API_KEY_HEADER, header_value(&self.api_key, "API key")?);
        headers.insert(REQUEST_DATE_HEADER, header_value(&date, "request date")?);
        headers.insert(HMAC_HEADER, header_value(&signature, "signature")?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Format a timestamp the way the API expects it (RFC 1123, UTC)
#[must_use]
pub fn request_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S UTC").to_string()
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| DnsmeError::Config(format!("{what} contains characters not allowed in a header")))
}
