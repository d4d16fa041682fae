//! `RewardVault` owns the secret key and runs the claim pipeline:
//! accrue -> commit -> prove -> (self-check) -> submit.
//!
//! Pass a vault explicitly where possible. [`RewardVault::global`] exists for
//! callers that want the single process-wide key.

use std::sync::OnceLock;

use anyhow::{bail, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::Serialize;
use tracing::info;

use crate::accrual::accrue_decimal;
use crate::amount::Amount;
use crate::config::VaultConfig;
use crate::crypto::{commit, commit_decimal, prove, verify, SecretKey};
use crate::error::HarvestResult;
use crate::format::format_address;
use crate::traits::ClaimSubmitter;
use crate::types::{ClaimRequest, Commitment, FarmId, Proof};

/// A reward amount together with the commitment hiding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccruedReward {
    pub amount: Amount,
    pub commitment: Commitment,
}

/// A claim ready for submission, plus the plaintext reward it hides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedClaim {
    pub reward: Amount,
    pub request: ClaimRequest,
}

#[derive(Debug)]
pub struct RewardVault {
    key: SecretKey,
}

static GLOBAL_VAULT: OnceLock<RewardVault> = OnceLock::new();

impl RewardVault {
    pub fn new(key: SecretKey) -> Self {
        Self { key }
    }

    pub fn from_config(config: &VaultConfig) -> HarvestResult<Self> {
        let key = config.secret_key()?;
        info!(
            fixed_key = config.secret_key_hex.is_some(),
            "reward vault initialized"
        );
        Ok(Self::new(key))
    }

    /// Vault over [`SecretKey::process_wide`], created on first use.
    pub fn global() -> &'static RewardVault {
        GLOBAL_VAULT.get_or_init(|| RewardVault::new(SecretKey::process_wide().clone()))
    }

    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    pub fn encrypt_reward(&self, amount: &str) -> HarvestResult<Commitment> {
        self.encrypt_reward_with(amount, &mut OsRng)
    }

    pub fn encrypt_reward_with<R: RngCore + CryptoRng>(
        &self,
        amount: &str,
        rng: &mut R,
    ) -> HarvestResult<Commitment> {
        commit_decimal(amount, &self.key, rng)
    }

    /// Accrue the reward on `stake` and commit to it.
    pub fn calculate_encrypted_rewards(
        &self,
        stake: &str,
        apy_bps: i64,
        elapsed_secs: i64,
    ) -> HarvestResult<AccruedReward> {
        self.calculate_encrypted_rewards_with(stake, apy_bps, elapsed_secs, &mut OsRng)
    }

    pub fn calculate_encrypted_rewards_with<R: RngCore + CryptoRng>(
        &self,
        stake: &str,
        apy_bps: i64,
        elapsed_secs: i64,
        rng: &mut R,
    ) -> HarvestResult<AccruedReward> {
        let amount = accrue_decimal(stake, apy_bps, elapsed_secs)?;
        let commitment = commit(&amount, &self.key, rng);
        Ok(AccruedReward { amount, commitment })
    }

    pub fn generate_proof(
        &self,
        farm_id: FarmId,
        owner: &str,
        commitment: &Commitment,
    ) -> HarvestResult<Proof> {
        prove(farm_id, owner, commitment, &self.key)
    }

    /// `false` for a wrong proof and for inputs the proof cannot be
    /// rebuilt from. Only proofs made under this vault's key can pass.
    pub fn verify_encrypted_rewards(
        &self,
        farm_id: FarmId,
        owner: &str,
        commitment: &Commitment,
        proof: &Proof,
    ) -> bool {
        verify(farm_id, owner, commitment, &self.key, proof)
    }

    pub fn prepare_claim(
        &self,
        farm_id: FarmId,
        owner: &str,
        stake: &str,
        apy_bps: i64,
        elapsed_secs: i64,
    ) -> HarvestResult<PreparedClaim> {
        self.prepare_claim_with(farm_id, owner, stake, apy_bps, elapsed_secs, &mut OsRng)
    }

    pub fn prepare_claim_with<R: RngCore + CryptoRng>(
        &self,
        farm_id: FarmId,
        owner: &str,
        stake: &str,
        apy_bps: i64,
        elapsed_secs: i64,
        rng: &mut R,
    ) -> HarvestResult<PreparedClaim> {
        let accrued = self.calculate_encrypted_rewards_with(stake, apy_bps, elapsed_secs, rng)?;
        let proof = self.generate_proof(farm_id, owner, &accrued.commitment)?;

        Ok(PreparedClaim {
            reward: accrued.amount,
            request: ClaimRequest {
                farm_id,
                encrypted_rewards: accrued.commitment,
                proof,
            },
        })
    }

    /// Self-check the claim under this vault's key, then hand it over.
    pub fn submit_claim<S: ClaimSubmitter + ?Sized>(
        &self,
        owner: &str,
        claim: &ClaimRequest,
        submitter: &S,
    ) -> Result<()> {
        if !self.verify_encrypted_rewards(claim.farm_id, owner, &claim.encrypted_rewards, &claim.proof) {
            bail!(
                "claim for farm {} by {} does not verify under this vault's key",
                claim.farm_id,
                format_address(owner)
            );
        }

        submitter.submit(claim)?;
        info!(
            farm_id = claim.farm_id,
            owner = %format_address(owner),
            submitter = submitter.name(),
            "claim submitted"
        );
        Ok(())
    }
}
