//! Output formatting for different formats.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};

use dnsme_core::{Domain, ImportReport, Record, SecondaryDomain};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, records as zone file lines
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" | "plain" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// One record as a zone file line: `name ttl type data ; id=<id>, gtd=<location>`
pub fn zone_line(record: &Record) -> String {
    let data = if record.data.is_empty() { "@" } else { record.data.as_str() };
    format!(
        "{} {} {} {} ; id={}, gtd={}",
        record.display_name(),
        record.ttl,
        record.record_type,
        data,
        record.id,
        record.gtd_location
    )
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_yaml<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_yaml::to_writer(&mut *out, value)?;
    Ok(())
}

#[derive(Serialize)]
struct NameRow<'a> {
    name: &'a str,
}

/// Render a list of zone names.
pub fn render_names<W: Write>(out: &mut W, format: OutputFormat, names: &[String]) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, names),
        OutputFormat::Yaml => write_yaml(out, names),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for name in names {
                wtr.serialize(NameRow { name })?;
            }
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Pretty => {
            for name in names {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct DomainRow<'a> {
    name: &'a str,
    #[serde(rename = "nameServer")]
    name_servers: String,
    #[serde(rename = "vanityNameServers")]
    vanity_name_servers: String,
    #[serde(rename = "gtdEnabled")]
    gtd_enabled: bool,
}

/// Render a primary zone definition.
pub fn render_domain<W: Write>(out: &mut W, format: OutputFormat, domain: &Domain) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, domain),
        OutputFormat::Yaml => write_yaml(out, domain),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.serialize(DomainRow {
                name: &domain.name,
                name_servers: domain.name_servers.join(";"),
                vanity_name_servers: domain.vanity_name_servers.join(";"),
                gtd_enabled: domain.gtd_enabled,
            })?;
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Pretty => {
            writeln!(out, "{} {}", "Domain:".bold(), domain.name.cyan().bold())?;
            writeln!(out, "  {} {}", "Name servers:".bold(), domain.name_servers.join(", "))?;
            if !domain.vanity_name_servers.is_empty() {
                writeln!(
                    out,
                    "  {} {}",
                    "Vanity name servers:".bold(),
                    domain.vanity_name_servers.join(", ")
                )?;
            }
            writeln!(out, "  {} {}", "GTD enabled:".bold(), domain.gtd_enabled)?;
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct SecondaryRow<'a> {
    name: &'a str,
    ip: String,
}

/// Render a secondary zone definition.
pub fn render_secondary<W: Write>(
    out: &mut W,
    format: OutputFormat,
    secondary: &SecondaryDomain,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, secondary),
        OutputFormat::Yaml => write_yaml(out, secondary),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.serialize(SecondaryRow {
                name: &secondary.name,
                ip: secondary.ips.join(";"),
            })?;
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Pretty => {
            writeln!(out, "{} {}", "Secondary:".bold(), secondary.name.cyan().bold())?;
            writeln!(out, "  {} {}", "Masters:".bold(), secondary.ips.join(", "))?;
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct RecordRow<'a> {
    id: u64,
    name: &'a str,
    #[serde(rename = "type")]
    record_type: &'a str,
    data: &'a str,
    ttl: u32,
    #[serde(rename = "gtdLocation")]
    gtd_location: &'a str,
}

impl<'a> From<&'a Record> for RecordRow<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            id: record.id,
            name: &record.name,
            record_type: record.record_type.as_str(),
            data: &record.data,
            ttl: record.ttl,
            gtd_location: &record.gtd_location,
        }
    }
}

/// Render records.
pub fn render_records<W: Write>(out: &mut W, format: OutputFormat, records: &[Record]) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, records),
        OutputFormat::Yaml => write_yaml(out, records),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for record in records {
                wtr.serialize(RecordRow::from(record))?;
            }
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Pretty => {
            for record in records {
                writeln!(out, "{}", zone_line(record))?;
            }
            Ok(())
        }
    }
}

#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Record")]
    record: String,
    #[tabled(rename = "Error")]
    message: String,
}

/// Human summary of an import, meant for stderr.
pub fn render_import_report<W: Write>(out: &mut W, report: &ImportReport) -> Result<()> {
    if !report.failures.is_empty() {
        let rows: Vec<FailureRow> = report
            .failures
            .iter()
            .map(|f| FailureRow {
                domain: f.domain.clone(),
                record: f.record.clone().unwrap_or_else(|| "(zone)".to_string()),
                message: f.message.clone(),
            })
            .collect();
        writeln!(out, "{}", "Import failures:".red().bold())?;
        writeln!(out, "{}", Table::new(&rows).with(Style::rounded()))?;
    }

    writeln!(
        out,
        "{} {} domains created, {} already present, {} records created, {} failures",
        "Import finished:".bold(),
        report.domains_created.len(),
        report.domains_existing.len(),
        report.records_created,
        report.failures.len()
    )?;
    Ok(())
}
