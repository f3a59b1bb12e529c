//! `dnsme list`, `info`, `add-domain`, `delete-domain` - primary zones.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use super::Context;
use crate::cli::args::AddDomainArgs;
use crate::output::{self, OutputFormat};
use dnsme_core::Domain;

pub async fn list(ctx: Context) -> Result<()> {
    let client = ctx.client()?;
    let names = client.domains().list_sorted().await?;

    output::render_names(&mut std::io::stdout().lock(), ctx.output_format, &names)
}

pub async fn info(ctx: Context, domain: &str) -> Result<()> {
    let client = ctx.client()?;
    let zone = client.domains().get(domain).await?;

    output::render_domain(&mut std::io::stdout().lock(), ctx.output_format, &zone)
}

pub async fn add(ctx: Context, args: AddDomainArgs) -> Result<()> {
    let client = ctx.client()?;

    let definition = Domain::new(args.domain)
        .name_servers(args.name_servers)
        .vanity_name_servers(args.vanity_name_servers)
        .gtd_enabled(args.gtd);
    let created = client.domains().create(&definition).await?;

    let mut out = std::io::stdout().lock();
    if ctx.output_format == OutputFormat::Pretty {
        writeln!(out, "{} Domain {} created.", "Success:".green().bold(), created.name.cyan())?;
    }
    output::render_domain(&mut out, ctx.output_format, &created)
}

pub async fn delete(ctx: Context, domain: &str) -> Result<()> {
    let client = ctx.client()?;
    client.domains().delete(domain).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": domain }));
        }
        _ => {
            println!("{} Domain {} deleted.", "Success:".green().bold(), domain.cyan());
        }
    }

    Ok(())
}
