//! Main DNS Made Easy API client implementation.

use crate::api::*;
use crate::config::RetryConfig;
use crate::dump::DumpSink;
use crate::sign::{Credentials, REQUESTS_REMAINING_HEADER};
use chrono::Utc;
use dnsme_core::{ApiPayload, DnsmeError, ErrorPayload, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// The production API base URL
pub const DEFAULT_BASE_URL: &str = "http://api.dnsmadeeasy.com/V1.2";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sentinel for "no quota header seen yet"
const REMAINING_UNKNOWN: i64 = -1;

/// Main DNS Made Easy API client.
///
/// Clones share the underlying connection pool and the last observed
/// request quota.
#[derive(Clone)]
pub struct DnsmeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    credentials: Credentials,
    base_url: Url,
    retry_config: RetryConfig,
    requests_remaining: AtomicI64,
    dump: Option<DumpSink>,
}

/// Status and body of a response that is no longer rate limited
struct RawResponse {
    status: StatusCode,
    body: String,
}

impl DnsmeClient {
    /// Create a new client for the production API using default settings
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        DnsmeClientBuilder::new(api_key, secret_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> DnsmeClientBuilder {
        DnsmeClientBuilder::new(api_key, secret_key)
    }

    /// Access zone endpoints
    #[must_use]
    pub fn domains(&self) -> DomainApi<'_> {
        DomainApi::new(self)
    }

    /// Access secondary zone endpoints
    #[must_use]
    pub fn secondaries(&self) -> SecondaryApi<'_> {
        SecondaryApi::new(self)
    }

    /// Access the records of one zone
    #[must_use]
    pub fn records(&self, domain: impl Into<String>) -> RecordApi<'_> {
        RecordApi::new(self, domain.into())
    }

    /// Bulk export and import of zones with their records
    #[must_use]
    pub fn transfer(&self) -> TransferApi<'_> {
        TransferApi::new(self)
    }

    /// The API base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Remaining request quota reported by the most recent response
    #[must_use]
    pub fn requests_remaining(&self) -> Option<u64> {
        u64::try_from(self.inner.requests_remaining.load(Ordering::Relaxed)).ok()
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.get_with_query(segments, &[]).await
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(segments, params)?;
        let response = self.execute(Method::GET, &url, None).await?;
        Self::handle_response(&url, response)
    }

    /// Perform a PUT request with a JSON body and decode the reply
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(segments, &[])?;
        let body = serde_json::to_vec(body)?;
        let response = self.execute(Method::PUT, &url, Some(&body)).await?;
        Self::handle_response(&url, response)
    }

    /// Perform a PUT request with a JSON body whose reply has no body
    pub(crate) async fn put_empty<B: Serialize>(&self, segments: &[&str], body: &B) -> Result<()> {
        let url = self.build_url(segments, &[])?;
        let body = serde_json::to_vec(body)?;
        let response = self.execute(Method::PUT, &url, Some(&body)).await?;
        Self::handle_empty_response(&url, response)
    }

    /// Perform a POST request with a JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(segments, &[])?;
        let body = serde_json::to_vec(body)?;
        let response = self.execute(Method::POST, &url, Some(&body)).await?;
        Self::handle_response(&url, response)
    }

    /// Perform a DELETE request
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.build_url(segments, &[])?;
        let response = self.execute(Method::DELETE, &url, None).await?;
        Self::handle_empty_response(&url, response)
    }

    /// Append path segments and query parameters to the base URL.
    ///
    /// An empty last segment produces a trailing slash, as collection
    /// endpoints require.
    fn build_url(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| DnsmeError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Sign and send a request, pausing while the request quota is exhausted
    async fn execute(&self, method: Method, url: &Url, body: Option<&[u8]>) -> Result<RawResponse> {
        let retry = &self.inner.retry_config;
        let max_attempts = retry.attempts();

        for attempt in 1..=max_attempts {
            let request = self.build_request(&method, url, body)?;
            debug!(method = %method, url = %url, attempt, "sending request");

            if let Some(dump) = &self.inner.dump {
                dump.request(&request);
            }

            let response = match self.inner.http.execute(request).await {
                Ok(response) => response,
                Err(e) => {
                    if self.rate_limited() && attempt < max_attempts {
                        warn!(error = %e, attempt, max_attempts, "request failed while rate limited, retrying");
                        tokio::time::sleep(retry.backoff).await;
                        continue;
                    }
                    return Err(DnsmeError::Http(e.to_string()));
                }
            };

            let remaining = requests_remaining(response.headers());
            self.inner
                .requests_remaining
                .store(remaining.unwrap_or(REMAINING_UNKNOWN), Ordering::Relaxed);

            let status = response.status();
            let headers = response.headers().clone();
            let body = response
                .text()
                .await
                .map_err(|e| DnsmeError::Http(e.to_string()))?;

            if let Some(dump) = &self.inner.dump {
                dump.response(status, &headers, &body);
            }

            if remaining == Some(0) {
                if attempt < max_attempts {
                    warn!(
                        attempt,
                        max_attempts,
                        backoff_secs = retry.backoff.as_secs_f64(),
                        "API rate limit exceeded, pausing"
                    );
                    tokio::time::sleep(retry.backoff).await;
                    continue;
                }
                warn!(max_attempts, "API rate limit still exceeded, giving up");
                break;
            }

            return Ok(RawResponse { status, body });
        }

        Err(DnsmeError::RetriesExhausted {
            attempts: max_attempts,
        })
    }

    fn build_request(&self, method: &Method, url: &Url, body: Option<&[u8]>) -> Result<Request> {
        let headers = self.inner.credentials.headers(Utc::now())?;

        let mut builder = self
            .inner
            .http
            .request(method.clone(), url.clone())
            .headers(headers);

        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body.to_vec());
        }

        builder.build().map_err(|e| DnsmeError::Http(e.to_string()))
    }

    fn rate_limited(&self) -> bool {
        self.inner.requests_remaining.load(Ordering::Relaxed) == 0
    }

    /// Handle an API response that returns JSON
    fn handle_response<T: DeserializeOwned>(url: &Url, response: RawResponse) -> Result<T> {
        Self::check_status(url, &response)?;
        serde_json::from_str(&response.body).map_err(DnsmeError::Json)
    }

    /// Handle an API response that returns no body
    fn handle_empty_response(url: &Url, response: RawResponse) -> Result<()> {
        Self::check_status(url, &response)?;

        if response.status.is_success() {
            Ok(())
        } else {
            Err(DnsmeError::Status {
                code: response.status.as_u16(),
                message: response.body,
            })
        }
    }

    /// Classify 403/404 and surface error payloads of other failures.
    ///
    /// Any other status falls through to the caller's decoding.
    fn check_status(url: &Url, response: &RawResponse) -> Result<()> {
        match response.status {
            StatusCode::FORBIDDEN => Err(DnsmeError::Forbidden),
            StatusCode::NOT_FOUND => Err(DnsmeError::NotFound {
                resource: url.path().to_string(),
            }),
            status if !status.is_success() => {
                match serde_json::from_str::<ErrorPayload>(&response.body) {
                    Ok(payload) => payload.into_result().map(|_| ()),
                    Err(_) => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}

/// Parse the remaining quota; a missing or garbled header means unknown
fn requests_remaining(headers: &HeaderMap) -> Option<i64> {
    headers
        .get(REQUESTS_REMAINING_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
}

/// Builder for configuring a [`DnsmeClient`]
pub struct DnsmeClientBuilder {
    api_key: String,
    secret_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    retry_config: RetryConfig,
    dump: Option<DumpSink>,
}

impl DnsmeClientBuilder {
    /// Create a new builder with the given key pair
    #[must_use]
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("dnsme-rust/{}", env!("CARGO_PKG_VERSION")),
            retry_config: RetryConfig::default(),
            dump: None,
        }
    }

    /// Set the base URL (sandbox account, or a mock server in tests)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set retry configuration
    #[must_use]
    pub const fn retry(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Dump every raw request and response to stderr
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.dump = enabled.then(DumpSink::stderr);
        self
    }

    /// Dump every raw request and response to `out`
    #[must_use]
    pub fn dump_to(mut self, out: impl Write + Send + 'static) -> Self {
        self.dump = Some(DumpSink::new(Box::new(out)));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DnsmeClient> {
        let base_url = Url::parse(self.base_url.trim_end_matches('/'))
            .map_err(|e| DnsmeError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(DnsmeError::InvalidUrl(self.base_url));
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| DnsmeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(DnsmeClient {
            inner: Arc::new(ClientInner {
                http,
                credentials: Credentials::new(self.api_key, self.secret_key),
                base_url,
                retry_config: self.retry_config,
                requests_remaining: AtomicI64::new(REMAINING_UNKNOWN),
                dump: self.dump,
            }),
        })
    }
}
