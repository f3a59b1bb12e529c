//! Command-line argument definitions using clap.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::output::OutputFormat;
use dnsme_core::{Record, RecordType, DEFAULT_GTD_LOCATION};

/// Command-line client for the DNS Made Easy API
///
/// Manage primary zones, secondary zones and records, or move whole zones
/// between accounts with export and import.
///
/// Credentials come from DNSME_API_KEY and DNSME_SECRET_KEY.
#[derive(Parser, Debug)]
#[command(name = "dnsme")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// API endpoint
    #[arg(long, env = "DNSME_API_URL", global = true)]
    pub api_url: Option<String>,

    /// API key
    #[arg(short = 'k', long, env = "DNSME_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Secret key used to sign requests
    #[arg(short = 's', long, env = "DNSME_SECRET_KEY", global = true, hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(short = 'c', long, env = "DNSME_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Dump raw HTTP requests and responses to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all primary zones
    List,

    /// Show a primary zone
    Info {
        /// Zone name
        domain: String,
    },

    /// Create a primary zone
    AddDomain(AddDomainArgs),

    /// Delete a primary zone
    DeleteDomain {
        /// Zone name
        domain: String,
    },

    /// List all secondary zones
    Secondaries,

    /// Show a secondary zone
    Secondary {
        /// Zone name
        domain: String,
    },

    /// Create a secondary zone
    AddSecondary {
        /// Zone name
        domain: String,

        /// Master name server addresses (comma-separated)
        #[arg(long = "ip", value_delimiter = ',', required = true)]
        ips: Vec<String>,
    },

    /// Delete a secondary zone
    DeleteSecondary {
        /// Zone name
        domain: String,
    },

    /// List the records of a zone
    Records(RecordsArgs),

    /// Show one record
    Record {
        /// Zone name
        domain: String,

        /// Record id
        #[arg(long)]
        id: u64,
    },

    /// Add a record to a zone
    AddRecord(RecordArgs),

    /// Replace an existing record
    UpdateRecord(UpdateRecordArgs),

    /// Delete a record
    DeleteRecord {
        /// Zone name
        domain: String,

        /// Record id
        #[arg(long)]
        id: u64,
    },

    /// Export zones with their records as JSON
    Export {
        /// Zones to export (all zones when omitted)
        domains: Vec<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Import zones from an export document
    Import {
        /// Read from a file ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        file: String,
    },
}

// ============================================================================
// Zone commands
// ============================================================================

#[derive(Args, Debug)]
pub struct AddDomainArgs {
    /// Zone name
    pub domain: String,

    /// Name servers (comma-separated)
    #[arg(long = "ns", value_delimiter = ',')]
    pub name_servers: Vec<String>,

    /// Vanity name servers (comma-separated)
    #[arg(long = "vanity-ns", value_delimiter = ',')]
    pub vanity_name_servers: Vec<String>,

    /// Enable Global Traffic Director
    #[arg(long)]
    pub gtd: bool,
}

// ============================================================================
// Record commands
// ============================================================================

#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// Zone name
    pub domain: String,

    /// Only this record type (A, AAAA, CNAME, MX, NS, PTR, SRV, TXT, HTTPRED)
    #[arg(short = 't', long = "type")]
    pub record_type: Option<String>,

    /// Only records with exactly this name
    #[arg(long)]
    pub name: Option<String>,

    /// Only records whose name contains this text
    #[arg(long)]
    pub name_contains: Option<String>,

    /// Only records with exactly this value
    #[arg(long)]
    pub value: Option<String>,

    /// Only records whose value contains this text
    #[arg(long)]
    pub value_contains: Option<String>,

    /// Only records in this GTD location
    #[arg(long)]
    pub gtd_location: Option<String>,
}

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Zone name
    pub domain: String,

    /// Record name, empty for the zone apex
    #[arg(long, default_value = "")]
    pub name: String,

    /// Record type
    #[arg(short = 't', long = "type")]
    pub record_type: Option<String>,

    /// Record value
    #[arg(long)]
    pub data: Option<String>,

    /// Time to live in seconds
    #[arg(long, default_value_t = 3600)]
    pub ttl: u32,

    /// GTD location
    #[arg(long, default_value = DEFAULT_GTD_LOCATION)]
    pub gtd_location: String,

    /// Password for HTTPRED records
    #[arg(long)]
    pub password: Option<String>,
}

impl RecordArgs {
    /// Build the record, rejecting a missing type or value and a zero TTL.
    pub fn to_record(&self) -> Result<Record> {
        let Some(record_type) = self.record_type.as_deref().filter(|t| !t.is_empty()) else {
            bail!("record type is required (--type)");
        };
        let Some(data) = self.data.as_deref().filter(|d| !d.is_empty()) else {
            bail!("record data is required (--data)");
        };
        if self.ttl == 0 {
            bail!("ttl must be greater than zero");
        }

        let mut record = Record::new(
            self.name.clone(),
            RecordType::from(record_type.to_string()),
            data,
            self.ttl,
        )
        .gtd_location(self.gtd_location.clone());

        if let Some(password) = &self.password {
            record = record.password(password.clone());
        }

        Ok(record)
    }
}

#[derive(Args, Debug)]
pub struct UpdateRecordArgs {
    /// Id of the record to replace
    #[arg(long)]
    pub id: u64,

    #[command(flatten)]
    pub record: RecordArgs,
}
