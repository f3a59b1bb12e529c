//! Record API endpoints.

use crate::DnsmeClient;
use dnsme_core::{ApiPayload, Record, RecordType, Result};
use tracing::debug;

/// Record API endpoints of one zone (`/domains/{domain}/records`)
pub struct RecordApi<'a> {
    client: &'a DnsmeClient,
    domain: String,
}

impl<'a> RecordApi<'a> {
    pub(crate) const fn new(client: &'a DnsmeClient, domain: String) -> Self {
        Self { client, domain }
    }

    /// The zone these records belong to
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// List every record of the zone
    pub async fn list(&self) -> Result<Vec<Record>> {
        self.query().send().await
    }

    /// List records matching a set of filters
    #[must_use]
    pub fn query(&self) -> RecordQueryBuilder<'_> {
        RecordQueryBuilder::new(self.client, &self.domain)
    }

    /// Get a record by id
    pub async fn get(&self, id: u64) -> Result<Record> {
        let id = id.to_string();
        let mut record = self
            .client
            .get::<Record>(&["domains", &self.domain, "records", &id])
            .await?
            .into_result()?;
        record.normalize(&self.domain);
        Ok(record)
    }

    /// Create or update a record.
    ///
    /// A record with id 0 is created and the stored record is returned. Any
    /// other id updates that record in place; the API answers updates with
    /// an empty body, so the submitted record is returned as is.
    pub async fn save(&self, record: &Record) -> Result<Record> {
        if record.is_new() {
            debug!(domain = %self.domain, record = %record, "creating record");
            let mut created = self
                .client
                .post::<Record, _>(&["domains", &self.domain, "records", ""], record)
                .await?
                .into_result()?;
            created.normalize(&self.domain);
            Ok(created)
        } else {
            debug!(domain = %self.domain, id = record.id, "updating record");
            let id = record.id.to_string();
            self.client
                .put_empty(&["domains", &self.domain, "records", &id], record)
                .await?;
            Ok(record.clone())
        }
    }

    /// Delete a record
    pub async fn delete(&self, id: u64) -> Result<()> {
        let id = id.to_string();
        self.client
            .delete(&["domains", &self.domain, "records", &id])
            .await
    }
}

/// Builder for filtered record listings
pub struct RecordQueryBuilder<'a> {
    client: &'a DnsmeClient,
    domain: &'a str,
    gtd_location: Option<String>,
    record_type: Option<RecordType>,
    name: Option<String>,
    name_contains: Option<String>,
    value: Option<String>,
    value_contains: Option<String>,
}

impl<'a> RecordQueryBuilder<'a> {
    const fn new(client: &'a DnsmeClient, domain: &'a str) -> Self {
        Self {
            client,
            domain,
            gtd_location: None,
            record_type: None,
            name: None,
            name_contains: None,
            value: None,
            value_contains: None,
        }
    }

    /// Only records in this Global Traffic Director location
    #[must_use]
    pub fn gtd_location(mut self, location: impl Into<String>) -> Self {
        self.gtd_location = Some(location.into());
        self
    }

    /// Only records of this type
    #[must_use]
    pub fn record_type(mut self, rtype: RecordType) -> Self {
        self.record_type = Some(rtype);
        self
    }

    /// Only records with exactly this name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Only records whose name contains this text
    #[must_use]
    pub fn name_contains(mut self, text: impl Into<String>) -> Self {
        self.name_contains = Some(text.into());
        self
    }

    /// Only records with exactly this value
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Only records whose value contains this text
    #[must_use]
    pub fn value_contains(mut self, text: impl Into<String>) -> Self {
        self.value_contains = Some(text.into());
        self
    }

    /// Query string parameters for the filters that are set
    fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("gtdLocation", self.gtd_location.as_deref()),
            ("type", self.record_type.as_ref().map(RecordType::as_str)),
            ("name", self.name.as_deref()),
            ("nameContains", self.name_contains.as_deref()),
            ("value", self.value.as_deref()),
            ("valueContains", self.value_contains.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
        .collect()
    }

    /// Execute the query
    pub async fn send(self) -> Result<Vec<Record>> {
        let params = self.params();
        let mut records: Vec<Record> = self
            .client
            .get_with_query(&["domains", self.domain, "records", ""], &params)
            .await?;

        for record in &mut records {
            record.normalize(self.domain);
        }

        Ok(records)
    }
}
