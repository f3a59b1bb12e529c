use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

use super::{Domain, Record};
use crate::Result;

/// A zone together with all of its records, as stored in an export document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedDomain {
    /// Zone definition
    pub domain: Domain,

    /// Records of the zone, in API order
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Write an export document as a single JSON array followed by a newline
pub fn write_export<W: Write>(mut writer: W, domains: &[ExportedDomain]) -> Result<()> {
    serde_json::to_writer(&mut writer, domains)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read an export document
pub fn read_export<R: Read>(reader: R) -> Result<Vec<ExportedDomain>> {
    Ok(serde_json::from_reader(reader)?)
}

/// One item that could not be applied during an import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFailure {
    /// Zone the failure belongs to
    pub domain: String,

    /// The record that failed, or `None` when the zone itself failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,

    /// Error message
    pub message: String,
}

impl fmt::Display for ImportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record {
            Some(record) => write!(
                f,
                "error adding record to domain {}: {record}: {}",
                self.domain, self.message
            ),
            None => write!(
                f,
                "couldn't create domain {}: {}",
                self.domain, self.message
            ),
        }
    }
}

/// Outcome of a best-effort import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Zones that had to be created
    pub domains_created: Vec<String>,

    /// Zones that already existed
    pub domains_existing: Vec<String>,

    /// Number of records created
    pub records_created: usize,

    /// Items that were not applied
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    /// Returns true if every zone and record was applied
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
