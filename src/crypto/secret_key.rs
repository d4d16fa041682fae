//! The 32-byte secret every commitment and proof is bound to.
//!
//! A key lives only in memory. Commitments and proofs made under one key
//! cannot be checked once the process that generated it has exited.

use std::fmt;
use std::sync::OnceLock;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::error::{HarvestError, HarvestResult};

#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; 32]);

static PROCESS_KEY: OnceLock<SecretKey> = OnceLock::new();

impl SecretKey {
    /// Fresh key from the operating system's CSPRNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng)
    }

    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        SecretKey(bytes)
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        SecretKey(bytes)
    }

    /// 64 hex digits, `0x` prefix optional.
    pub fn from_hex(s: &str) -> HarvestResult<Self> {
        let digits = s.trim().strip_prefix("0x").unwrap_or(s.trim());
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| HarvestError::invalid(format!("secret key must be 32 hex bytes: {e}")))?;
        Ok(SecretKey(bytes))
    }

    /// The key shared by everything in this process, created on first use.
    /// Concurrent first calls still produce exactly one key.
    pub fn process_wide() -> &'static SecretKey {
        PROCESS_KEY.get_or_init(|| {
            debug!("generating process-wide secret key");
            SecretKey::generate()
        })
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}
