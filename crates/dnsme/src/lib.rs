//! Rust client for the DNS Made Easy REST API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dnsme::{DnsmeClient, Record, RecordType};
//!
//! #[tokio::main]
//! async fn main() -> dnsme::Result<()> {
//!     let client = DnsmeClient::new("api-key", "secret-key")?;
//!
//!     for name in client.domains().list_sorted().await? {
//!         println!("{name}");
//!     }
//!
//!     let records = client.records("example.com");
//!     let www = Record::new("www", RecordType::A, "192.0.2.10", 3600);
//!     let created = records.save(&www).await?;
//!     println!("created record {}", created.id);
//!
//!     let mx = records.query().record_type(RecordType::Mx).send().await?;
//!     println!("{} MX records", mx.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/dnsme/2.0.0")]

// Re-export core types
pub use dnsme_core::*;

// Re-export client
pub use dnsme_client::{api, sign, Credentials, DnsmeClient, DnsmeClientBuilder, RetryConfig, DEFAULT_BASE_URL};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
