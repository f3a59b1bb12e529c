//! dnsme - DNS Made Easy command-line client
//!
//! Manage zones, secondary zones and records from the shell.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dnsme_cli::run().await
}
