//! `dnsme records`, `record`, `add-record`, `update-record`, `delete-record`.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{RecordArgs, RecordsArgs, UpdateRecordArgs};
use crate::output::{self, OutputFormat};
use dnsme_core::{Record, RecordType};

pub async fn list(ctx: Context, args: RecordsArgs) -> Result<()> {
    let client = ctx.client()?;
    let api = client.records(args.domain.as_str());

    let mut query = api.query();
    if let Some(t) = args.record_type {
        query = query.record_type(RecordType::from(t));
    }
    if let Some(name) = args.name {
        query = query.name(name);
    }
    if let Some(text) = args.name_contains {
        query = query.name_contains(text);
    }
    if let Some(value) = args.value {
        query = query.value(value);
    }
    if let Some(text) = args.value_contains {
        query = query.value_contains(text);
    }
    if let Some(location) = args.gtd_location {
        query = query.gtd_location(location);
    }

    let records = query.send().await?;
    output::render_records(&mut std::io::stdout().lock(), ctx.output_format, &records)
}

pub async fn show(ctx: Context, domain: &str, id: u64) -> Result<()> {
    let client = ctx.client()?;
    let record = client.records(domain).get(id).await?;

    output::render_records(
        &mut std::io::stdout().lock(),
        ctx.output_format,
        std::slice::from_ref(&record),
    )
}

pub async fn add(ctx: Context, args: RecordArgs) -> Result<()> {
    let record = args.to_record()?;
    save(ctx, &args.domain, record, "created").await
}

pub async fn update(ctx: Context, args: UpdateRecordArgs) -> Result<()> {
    let record = args.record.to_record()?.with_id(args.id);
    save(ctx, &args.record.domain, record, "updated").await
}

async fn save(ctx: Context, domain: &str, record: Record, verb: &str) -> Result<()> {
    let client = ctx.client()?;
    let saved = client.records(domain).save(&record).await?;

    if ctx.output_format == OutputFormat::Pretty {
        println!("{} Record {verb} in {}.", "Success:".green().bold(), domain.cyan());
    }
    output::render_records(
        &mut std::io::stdout().lock(),
        ctx.output_format,
        std::slice::from_ref(&saved),
    )
}

pub async fn delete(ctx: Context, domain: &str, id: u64) -> Result<()> {
    let client = ctx.client()?;
    client.records(domain).delete(id).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "domain": domain, "deleted": id }));
        }
        _ => {
            println!(
                "{} Record {} deleted from {}.",
                "Success:".green().bold(),
                id.to_string().cyan(),
                domain.cyan()
            );
        }
    }

    Ok(())
}
