//! # dnsme-cli
//!
//! Command-line interface for the DNS Made Easy REST API.
//!
//! ## Features
//!
//! - **Zones**: list, inspect, create and delete primary zones
//! - **Secondary zones**: manage zones transferred from your own masters
//! - **Records**: filtered listings, create, update and delete
//! - **Transfer**: export zones to a JSON document and import them elsewhere
//! - **Multiple output formats**: plain zone-file text, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
