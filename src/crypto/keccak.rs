//! Keccak-256 over Solidity-style packed encodings.

use alloy_primitives::U256;
use rand::{CryptoRng, RngCore};
use sha3::{Digest, Keccak256};

use crate::types::Digest32;

/// Keccak-256 of arbitrary bytes.
#[inline]
pub fn keccak256(data: &[u8]) -> Digest32 {
    let result = Keccak256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Keccak-256 of the UTF-8 bytes of `data`.
pub fn hash_data(data: &str) -> Digest32 {
    keccak256(data.as_bytes())
}

/// Fresh random 32-byte identifier.
pub fn generate_encrypted_id<R: RngCore + CryptoRng>(rng: &mut R) -> Digest32 {
    let mut id = [0u8; 32];
    rng.fill_bytes(&mut id);
    id
}

/// Incremental packed encoder: fields are appended without padding
/// beyond their own fixed width, then hashed once.
pub struct PackedHasher {
    hasher: Keccak256,
}

impl PackedHasher {
    pub fn new() -> Self {
        Self {
            hasher: Keccak256::new(),
        }
    }

    /// `uint256`: 32 bytes big-endian.
    pub fn uint256(mut self, value: U256) -> Self {
        self.hasher.update(value.to_be_bytes::<32>());
        self
    }

    /// `bytes32`: raw.
    pub fn bytes32(mut self, value: &[u8; 32]) -> Self {
        self.hasher.update(value);
        self
    }

    /// `address`: 20 raw bytes.
    pub fn address(mut self, value: &[u8; 20]) -> Self {
        self.hasher.update(value);
        self
    }

    pub fn finish(self) -> Digest32 {
        let result = self.hasher.finalize();
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }
}

impl Default for PackedHasher {
    fn default() -> Self {
        Self::new()
    }
}
