//! Claim proofs.
//!
//! `proof = keccak(uint256 farm_id || address owner || bytes32 commitment || bytes32 key)`
//!
//! Deterministic for fixed inputs. Only a holder of the same key can
//! rebuild it, which in practice means the process that created the key.

use alloy_primitives::U256;
use tracing::{debug, warn};

use crate::crypto::keccak::PackedHasher;
use crate::crypto::owner::OwnerId;
use crate::crypto::secret_key::SecretKey;
use crate::error::HarvestResult;
use crate::format::format_address;
use crate::types::{Commitment, FarmId, Proof};

pub fn prove_raw(farm_id: FarmId, owner: &OwnerId, commitment: &Commitment, key: &SecretKey) -> Proof {
    Proof(
        PackedHasher::new()
            .uint256(U256::from(farm_id))
            .address(owner.as_bytes())
            .bytes32(commitment.as_bytes())
            .bytes32(key.as_bytes())
            .finish(),
    )
}

pub fn prove(farm_id: FarmId, owner: &str, commitment: &Commitment, key: &SecretKey) -> HarvestResult<Proof> {
    let owner_id = OwnerId::parse(owner)?;
    let proof = prove_raw(farm_id, &owner_id, commitment, key);
    debug!(farm_id, owner = %format_address(owner), %proof, "built claim proof");
    Ok(proof)
}

/// Rebuild the proof and compare. Never fails: anything that prevents
/// rebuilding counts as "not verified".
pub fn verify(
    farm_id: FarmId,
    owner: &str,
    commitment: &Commitment,
    key: &SecretKey,
    candidate: &Proof,
) -> bool {
    match prove(farm_id, owner, commitment, key) {
        Ok(expected) => expected == *candidate,
        Err(e) => {
            warn!(farm_id, error = %e, "claim proof verification failed");
            false
        }
    }
}
