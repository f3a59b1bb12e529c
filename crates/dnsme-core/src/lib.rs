//! Core types and errors for the DNS Made Easy API client.
//!
//! This crate provides the foundational types used across the dnsme library:
//!
//! - **Types**: Strongly-typed representations of domains, secondary domains,
//!   records and the export document
//! - **Errors**: Comprehensive error handling with [`DnsmeError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsme_core::{Record, RecordType, Result};
//!
//! fn print_record(record: &Record) -> Result<()> {
//!     println!("{} {} {}", record.display_name(), record.record_type, record.data);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/dnsme-core/2.0.0")]

mod error;
pub mod types;

pub use error::{DnsmeError, Result};
pub use types::*;
