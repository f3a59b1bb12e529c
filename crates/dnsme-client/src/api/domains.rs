//! Zone API endpoints.

use super::zone::ZoneEndpoint;
use crate::DnsmeClient;
use dnsme_core::{Domain, Result};

/// Zone API endpoints (`/domains`)
pub struct DomainApi<'a> {
    endpoint: ZoneEndpoint<'a, Domain>,
}

impl<'a> DomainApi<'a> {
    pub(crate) const fn new(client: &'a DnsmeClient) -> Self {
        Self {
            endpoint: ZoneEndpoint::new(client, "domains"),
        }
    }

    /// List the names of all zones, in API order
    pub async fn list(&self) -> Result<Vec<String>> {
        Ok(self.endpoint.list().await?.list)
    }

    /// List the names of all zones, sorted
    pub async fn list_sorted(&self) -> Result<Vec<String>> {
        Ok(self.endpoint.list().await?.sorted())
    }

    /// Get a zone
    pub async fn get(&self, name: &str) -> Result<Domain> {
        self.endpoint.get(name).await
    }

    /// Create a zone, or update the zone of the same name
    pub async fn create(&self, domain: &Domain) -> Result<Domain> {
        self.endpoint.put(&domain.name, domain).await
    }

    /// Delete a zone
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.endpoint.delete(name).await
    }
}
