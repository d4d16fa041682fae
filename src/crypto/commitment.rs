//! Randomised commitments over reward amounts.
//!
//! `digest = keccak(uint256 amount || bytes32 key)`
//! `commitment = keccak(bytes32 digest || bytes32 nonce)`
//!
//! The nonce is drawn fresh per call, so committing twice to the same
//! amount yields different values. The committer keeps no record of the
//! nonce and cannot recompute a commitment later.

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::amount::Amount;
use crate::crypto::keccak::PackedHasher;
use crate::crypto::secret_key::SecretKey;
use crate::error::HarvestResult;
use crate::types::Commitment;

pub fn commit<R: RngCore + CryptoRng>(amount: &Amount, key: &SecretKey, rng: &mut R) -> Commitment {
    let digest = PackedHasher::new()
        .uint256(amount.wei())
        .bytes32(key.as_bytes())
        .finish();

    let mut nonce = [0u8; 32];
    rng.fill_bytes(&mut nonce);

    let commitment = Commitment(PackedHasher::new().bytes32(&digest).bytes32(&nonce).finish());
    debug!(%commitment, "committed reward amount");
    commitment
}

/// Commit to a decimal amount string. A negative amount is an invalid
/// argument; any other parse failure is reported as an encoding error.
pub fn commit_decimal<R: RngCore + CryptoRng>(
    amount: &str,
    key: &SecretKey,
    rng: &mut R,
) -> HarvestResult<Commitment> {
    let amount = Amount::from_decimal(amount).map_err(|e| {
        if Amount::is_negative_literal(amount) {
            e
        } else {
            e.into_encoding()
        }
    })?;
    Ok(commit(&amount, key, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarvestError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_key(id: u8) -> SecretKey {
        SecretKey::from_bytes([id; 32])
    }

    #[test]
    fn same_amount_commits_differently() {
        let mut rng = StdRng::seed_from_u64(1);
        let amount = Amount::from_units(100).unwrap();
        let a = commit(&amount, &test_key(1), &mut rng);
        let b = commit(&amount, &test_key(1), &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn identical_nonce_stream_reproduces_commitment() {
        let amount = Amount::from_units(100).unwrap();
        let a = commit(&amount, &test_key(1), &mut StdRng::seed_from_u64(9));
        let b = commit(&amount, &test_key(1), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn key_changes_commitment() {
        let amount = Amount::from_units(100).unwrap();
        let a = commit(&amount, &test_key(1), &mut StdRng::seed_from_u64(9));
        let b = commit(&amount, &test_key(2), &mut StdRng::seed_from_u64(9));
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_decimal_is_encoding_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let huge = "9".repeat(80);
        for bad in ["ten", "1.0000000000000000001", huge.as_str()] {
            assert!(matches!(
                commit_decimal(bad, &test_key(1), &mut rng),
                Err(HarvestError::Encoding(_))
            ));
        }
    }

    #[test]
    fn negative_decimal_is_invalid_argument() {
        let mut rng = StdRng::seed_from_u64(1);
        for bad in ["-5", " -0.5", "-0"] {
            assert!(matches!(
                commit_decimal(bad, &test_key(1), &mut rng),
                Err(HarvestError::InvalidArgument(_))
            ));
        }
    }
}
