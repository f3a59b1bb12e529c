//! Secondary zone API endpoints.

use super::zone::ZoneEndpoint;
use crate::DnsmeClient;
use dnsme_core::{Result, SecondaryDomain};

/// Secondary zone API endpoints (`/secondary`)
pub struct SecondaryApi<'a> {
    endpoint: ZoneEndpoint<'a, SecondaryDomain>,
}

impl<'a> SecondaryApi<'a> {
    pub(crate) const fn new(client: &'a DnsmeClient) -> Self {
        Self {
            endpoint: ZoneEndpoint::new(client, "secondary"),
        }
    }

    /// List the names of all secondary zones
    pub async fn list(&self) -> Result<Vec<String>> {
        Ok(self.endpoint.list().await?.list)
    }

    /// Get a secondary zone
    pub async fn get(&self, name: &str) -> Result<SecondaryDomain> {
        self.endpoint.get(name).await
    }

    /// Create a secondary zone.
    ///
    /// If the zone already exists its master IPs are replaced.
    pub async fn create(&self, secondary: &SecondaryDomain) -> Result<SecondaryDomain> {
        self.endpoint.put(&secondary.name, secondary).await
    }

    /// Delete a secondary zone
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.endpoint.delete(name).await
    }
}
