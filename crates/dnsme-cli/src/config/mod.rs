//! Configuration management.
//!
//! The config file is optional and read-only: it only fills in values that
//! were given neither as flags nor through the environment.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;
use dnsme::DEFAULT_BASE_URL;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API endpoint, e.g. the sandbox at `https://api.sandbox.dnsmadeeasy.com/V1.2`.
    pub api_url: Option<String>,

    /// API key.
    pub api_key: Option<String>,

    /// Secret key used to sign requests.
    pub secret_key: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

/// Connection settings after every source has been consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub api_url: String,
    pub api_key: String,
    pub secret_key: String,
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "dnsmadeeasy", "dnsme")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`. A missing file is an empty config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;

        Ok(config)
    }

    /// Merge flag/env values over the file and check that credentials exist.
    pub fn resolve(
        &self,
        api_url: Option<String>,
        api_key: Option<String>,
        secret_key: Option<String>,
    ) -> Result<Connection> {
        let api_url = api_url
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = non_empty(api_key)
            .or_else(|| non_empty(self.api_key.clone()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "API key required.\n\n\
                     Set DNSME_API_KEY, pass --api-key <KEY> or add api_key to the config file."
                )
            })?;

        let secret_key = non_empty(secret_key)
            .or_else(|| non_empty(self.secret_key.clone()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Secret key required.\n\n\
                     Set DNSME_SECRET_KEY, pass --secret-key <KEY> or add secret_key to the config file."
                )
            })?;

        Ok(Connection {
            api_url,
            api_key,
            secret_key,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
