//! Command implementations.

pub mod domains;
pub mod records;
pub mod secondary;
pub mod transfer;

use crate::config::Connection;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Endpoint and credentials
    pub connection: Connection,

    /// Output format
    pub output_format: OutputFormat,

    /// Dump raw HTTP traffic to stderr
    pub debug: bool,
}

impl Context {
    /// Create a client for the configured account.
    pub fn client(&self) -> anyhow::Result<dnsme::DnsmeClient> {
        let client = dnsme::DnsmeClient::builder(
            self.connection.api_key.as_str(),
            self.connection.secret_key.as_str(),
        )
        .base_url(self.connection.api_url.as_str())
        .debug(self.debug)
        .build()?;
        Ok(client)
    }
}
