//! HTTP client for the DNS Made Easy REST API.
//!
//! This crate provides the main [`DnsmeClient`], which signs every request,
//! waits out the API rate limit and decodes responses into the types of
//! `dnsme-core`.

#![doc(html_root_url = "https://docs.rs/dnsme-client/2.0.0")]

mod client;
mod config;
mod dump;
pub mod api;
pub mod sign;

pub use client::{DnsmeClient, DnsmeClientBuilder, DEFAULT_BASE_URL};
pub use config::*;
pub use dnsme_core::{DnsmeError, Result};
pub use sign::Credentials;
