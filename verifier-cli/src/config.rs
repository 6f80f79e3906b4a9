use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use velocity_exchange_verifiers::core::metadata::CredentialIssuerMetadata;

/// Trust anchor the checked responses are verified against.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub credential_issuer_metadata: CredentialIssuerMetadata,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("unable to parse config")
    }
}
