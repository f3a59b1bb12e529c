//! Bulk export and import of zones with their records.

use crate::DnsmeClient;
use dnsme_core::{
    read_export, write_export, Domain, ExportedDomain, ImportFailure, ImportReport, Result,
};
use std::io::{Read, Write};
use tracing::{info, warn};

/// Export/import of whole zones
pub struct TransferApi<'a> {
    client: &'a DnsmeClient,
}

impl<'a> TransferApi<'a> {
    pub(crate) const fn new(client: &'a DnsmeClient) -> Self {
        Self { client }
    }

    /// Fetch zones and their full record lists.
    ///
    /// With an empty `domains` slice every zone of the account is exported,
    /// sorted by name; otherwise the given zones are exported in the given
    /// order. The first failing read aborts the export.
    pub async fn export(&self, domains: &[String]) -> Result<Vec<ExportedDomain>> {
        let names = if domains.is_empty() {
            self.client.domains().list_sorted().await?
        } else {
            domains.to_vec()
        };

        let mut exported = Vec::with_capacity(names.len());
        for name in names {
            let domain = self.client.domains().get(&name).await?;
            let records = self.client.records(name.as_str()).list().await?;
            info!(domain = %name, records = records.len(), "exported domain");
            exported.push(ExportedDomain { domain, records });
        }

        Ok(exported)
    }

    /// Export zones and write the document to `writer`
    pub async fn export_to<W: Write>(&self, domains: &[String], writer: W) -> Result<()> {
        let exported = self.export(domains).await?;
        write_export(writer, &exported)
    }

    /// Apply an export document to the account, best effort.
    ///
    /// Zones that can't be read are created from their exported definition.
    /// Every record is created as a new record, its exported id is ignored.
    /// A zone that can't be created is skipped together with its records; a
    /// record that can't be created is skipped. Neither stops the import,
    /// both end up in [`ImportReport::failures`].
    pub async fn import(&self, domains: Vec<ExportedDomain>) -> ImportReport {
        let mut report = ImportReport::default();

        for ExportedDomain { domain, records } in domains {
            let name = domain.name.clone();

            match self.client.domains().get(&name).await {
                Ok(_) => report.domains_existing.push(name.clone()),
                Err(lookup) => {
                    info!(domain = %name, error = %lookup, "domain not readable, creating it");
                    let definition = Domain {
                        error: Vec::new(),
                        ..domain
                    };
                    if let Err(e) = self.client.domains().create(&definition).await {
                        warn!(domain = %name, error = %e, "couldn't create domain, skipping its records");
                        report.failures.push(ImportFailure {
                            domain: name,
                            record: None,
                            message: e.to_string(),
                        });
                        continue;
                    }
                    report.domains_created.push(name.clone());
                }
            }

            let api = self.client.records(name.as_str());
            for record in &records {
                match api.save(&record.as_new()).await {
                    Ok(_) => report.records_created += 1,
                    Err(e) => {
                        warn!(domain = %name, record = %record, error = %e, "error adding record");
                        report.failures.push(ImportFailure {
                            domain: name.clone(),
                            record: Some(record.to_string()),
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        info!(
            created = report.domains_created.len(),
            existing = report.domains_existing.len(),
            records = report.records_created,
            failures = report.failures.len(),
            "import finished"
        );

        report
    }

    /// Read an export document from `reader` and import it.
    ///
    /// Only an unreadable document is an error; failures of individual zones
    /// and records are reported in the returned [`ImportReport`].
    pub async fn import_from<R: Read>(&self, reader: R) -> Result<ImportReport> {
        let domains = read_export(reader)?;
        Ok(self.import(domains).await)
    }
}
