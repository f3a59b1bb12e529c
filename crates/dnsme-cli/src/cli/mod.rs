//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Every command talks to the API, so credentials are checked up front.
    let connection = config.resolve(cli.api_url, cli.api_key, cli.secret_key)?;

    let ctx = commands::Context {
        connection,
        output_format,
        debug: cli.debug,
    };

    match cli.command {
        Commands::List => commands::domains::list(ctx).await,
        Commands::Info { domain } => commands::domains::info(ctx, &domain).await,
        Commands::AddDomain(args) => commands::domains::add(ctx, args).await,
        Commands::DeleteDomain { domain } => commands::domains::delete(ctx, &domain).await,
        Commands::Secondaries => commands::secondary::list(ctx).await,
        Commands::Secondary { domain } => commands::secondary::info(ctx, &domain).await,
        Commands::AddSecondary { domain, ips } => commands::secondary::add(ctx, &domain, ips).await,
        Commands::DeleteSecondary { domain } => commands::secondary::delete(ctx, &domain).await,
        Commands::Records(args) => commands::records::list(ctx, args).await,
        Commands::Record { domain, id } => commands::records::show(ctx, &domain, id).await,
        Commands::AddRecord(args) => commands::records::add(ctx, args).await,
        Commands::UpdateRecord(args) => commands::records::update(ctx, args).await,
        Commands::DeleteRecord { domain, id } => commands::records::delete(ctx, &domain, id).await,
        Commands::Export { domains, file } => commands::transfer::export(ctx, &domains, file).await,
        Commands::Import { file } => commands::transfer::import(ctx, &file).await,
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
