use serde::{Deserialize, Serialize};

use crate::crypto::SecretKey;
use crate::error::HarvestResult;
use crate::telemetry::DEFAULT_LOG_FILTER;

/// Configuration for a [`crate::vault::RewardVault`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Fixed secret key as 64 hex digits. When absent a fresh key is
    /// generated, which is the normal mode: commitments and proofs are
    /// then only checkable inside this process.
    pub secret_key_hex: Option<String>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        VaultConfig {
            secret_key_hex: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl VaultConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn secret_key(&self) -> HarvestResult<SecretKey> {
        match &self.secret_key_hex {
            Some(hex_key) => SecretKey::from_hex(hex_key),
            None => Ok(SecretKey::generate()),
        }
    }
}
