//! `dnsme export` and `dnsme import` - move zones between accounts.

use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use super::Context;
use crate::output::{self, OutputFormat};
use dnsme_core::write_export;

fn expand(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}

pub async fn export(ctx: Context, domains: &[String], file: Option<String>) -> Result<()> {
    let client = ctx.client()?;

    match file.as_deref() {
        None | Some("-") => {
            let out = std::io::stdout().lock();
            client.transfer().export_to(domains, out).await?;
        }
        Some(path) => {
            // The file is only touched once every zone has been read.
            let exported = client.transfer().export(domains).await?;
            let path = expand(path);
            let out = File::create(&path).with_context(|| format!("creating {path}"))?;
            write_export(BufWriter::new(out), &exported)?;
            tracing::info!(file = %path, domains = exported.len(), "export written");
        }
    }

    Ok(())
}

pub async fn import(ctx: Context, file: &str) -> Result<()> {
    let client = ctx.client()?;

    let reader: Box<dyn Read> = if file == "-" {
        Box::new(std::io::stdin().lock())
    } else {
        let path = expand(file);
        let f = File::open(&path).with_context(|| format!("opening {path}"))?;
        Box::new(BufReader::new(f))
    };

    let report = client.transfer().import_from(reader).await?;

    if ctx.output_format == OutputFormat::Json {
        let mut out = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    }
    output::render_import_report(&mut std::io::stderr().lock(), &report)?;

    Ok(())
}
