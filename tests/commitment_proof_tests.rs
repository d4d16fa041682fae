use std::collections::HashSet;

use ::secret_harvest::amount::Amount;
use ::secret_harvest::crypto::{commit, commit_decimal, prove, verify, SecretKey};
use ::secret_harvest::error::HarvestError;
use ::secret_harvest::types::Commitment;
use ::secret_harvest::vault::RewardVault;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ===== Test Helper Functions =====

fn test_key(id: u8) -> SecretKey {
    let mut key = [0u8; 32];
    key[0] = id;
    SecretKey::from_bytes(key)
}

fn test_commitment(rng: &mut StdRng) -> Result<Commitment> {
    Ok(commit(&"42.5".parse::<Amount>()?, &test_key(1), rng))
}

// ===== Commitment Tests =====

#[test]
fn test_commitments_over_same_amount_differ() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let key = test_key(1);
    let amount: Amount = "100".parse()?;

    let mut seen = HashSet::new();
    for _ in 0..64 {
        assert!(seen.insert(commit(&amount, &key, &mut rng)));
    }
    Ok(())
}

#[test]
fn test_commitments_from_os_rng_differ() -> Result<()> {
    let key = SecretKey::generate();
    let a = commit_decimal("100", &key, &mut rand::rngs::OsRng)?;
    let b = commit_decimal("100", &key, &mut rand::rngs::OsRng)?;
    assert_ne!(a, b);
    Ok(())
}

#[test]
fn test_commit_rejects_malformed_amount() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = commit_decimal("12abc", &test_key(1), &mut rng).unwrap_err();
    assert!(matches!(err, HarvestError::Encoding(_)), "got {err:?}");
}

#[test]
fn test_commit_rejects_negative_amount_as_invalid_argument() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = commit_decimal("-5", &test_key(1), &mut rng).unwrap_err();
    assert!(matches!(err, HarvestError::InvalidArgument(_)), "got {err:?}");

    let vault = RewardVault::new(test_key(1));
    assert!(matches!(
        vault.encrypt_reward("-5"),
        Err(HarvestError::InvalidArgument(_))
    ));
    assert!(matches!(
        vault.encrypt_reward("12abc"),
        Err(HarvestError::Encoding(_))
    ));
}

// ===== Proof Builder Tests =====

#[test]
fn test_proof_is_deterministic() -> Result<()> {
    let c = test_commitment(&mut StdRng::seed_from_u64(7))?;
    let k = test_key(1);
    assert_eq!(prove(1, "0xabc", &c, &k)?, prove(1, "0xabc", &c, &k)?);
    Ok(())
}

#[test]
fn test_proof_rejects_malformed_owner() -> Result<()> {
    let c = test_commitment(&mut StdRng::seed_from_u64(7))?;
    for bad in ["", "abc", "0x", "0xnothex", "0x12345678901234567890123456789012345678901"] {
        let err = prove(1, bad, &c, &test_key(1)).unwrap_err();
        assert!(matches!(err, HarvestError::InvalidArgument(_)), "{bad:?}: {err:?}");
    }
    Ok(())
}

#[test]
fn test_padded_owner_forms_share_a_proof() -> Result<()> {
    let c = test_commitment(&mut StdRng::seed_from_u64(7))?;
    let k = test_key(1);
    assert_eq!(
        prove(9, "0xabc", &c, &k)?,
        prove(9, "0x0000000000000000000000000000000000000AbC", &c, &k)?
    );
    Ok(())
}

#[test]
fn test_owner_spellings_of_one_value_verify_alike() -> Result<()> {
    let c = test_commitment(&mut StdRng::seed_from_u64(7))?;
    let k = test_key(1);
    let p = prove(1, "0xabc", &c, &k)?;

    // Same 20-byte owner, different spelling.
    for alias in ["0x0abc", "0xABC", "0x00000abc", "0X0000000000000000000000000000000000000abc"] {
        assert!(verify(1, alias, &c, &k, &p), "{alias} names the same owner");
    }
    // Different 20-byte owners.
    for other in ["0xabd", "0x1abc", "0xabc0", "0xabc0000000000000000000000000000000000000"] {
        assert!(!verify(1, other, &c, &k, &p), "{other} is a different owner");
    }
    Ok(())
}

// ===== Verifier Tests =====

#[test]
fn test_verify_accepts_own_proof() -> Result<()> {
    let c = test_commitment(&mut StdRng::seed_from_u64(7))?;
    let k = test_key(1);
    let p = prove(1, "0xabc", &c, &k)?;
    assert!(verify(1, "0xabc", &c, &k, &p));
    Ok(())
}

#[test]
fn test_verify_rejects_any_altered_field() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let c = test_commitment(&mut rng)?;
    let other_c = test_commitment(&mut rng)?;
    let k = test_key(1);
    let p = prove(1, "0xabc", &c, &k)?;

    assert!(!verify(2, "0xabc", &c, &k, &p), "altered farm id");
    assert!(!verify(1, "0xabd", &c, &k, &p), "altered owner");
    assert!(!verify(1, "0xabc", &other_c, &k, &p), "altered commitment");
    assert!(!verify(1, "0xabc", &c, &test_key(2), &p), "different key");
    Ok(())
}

#[test]
fn test_verify_swallows_errors() -> Result<()> {
    let c = test_commitment(&mut StdRng::seed_from_u64(7))?;
    let k = test_key(1);
    let p = prove(1, "0xabc", &c, &k)?;
    assert!(!verify(1, "garbage", &c, &k, &p));
    Ok(())
}
