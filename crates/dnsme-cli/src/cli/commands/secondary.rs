//! `dnsme secondaries`, `secondary`, `add-secondary`, `delete-secondary`.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use super::Context;
use crate::output::{self, OutputFormat};
use dnsme_core::SecondaryDomain;

pub async fn list(ctx: Context) -> Result<()> {
    let client = ctx.client()?;
    let names = client.secondaries().list().await?;

    output::render_names(&mut std::io::stdout().lock(), ctx.output_format, &names)
}

pub async fn info(ctx: Context, domain: &str) -> Result<()> {
    let client = ctx.client()?;
    let zone = client.secondaries().get(domain).await?;

    output::render_secondary(&mut std::io::stdout().lock(), ctx.output_format, &zone)
}

pub async fn add(ctx: Context, domain: &str, ips: Vec<String>) -> Result<()> {
    let client = ctx.client()?;
    let created = client
        .secondaries()
        .create(&SecondaryDomain::new(domain, ips))
        .await?;

    let mut out = std::io::stdout().lock();
    if ctx.output_format == OutputFormat::Pretty {
        writeln!(out, "{} Secondary {} created.", "Success:".green().bold(), created.name.cyan())?;
    }
    output::render_secondary(&mut out, ctx.output_format, &created)
}

pub async fn delete(ctx: Context, domain: &str) -> Result<()> {
    let client = ctx.client()?;
    client.secondaries().delete(domain).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": domain }));
        }
        _ => {
            println!("{} Secondary {} deleted.", "Success:".green().bold(), domain.cyan());
        }
    }

    Ok(())
}
