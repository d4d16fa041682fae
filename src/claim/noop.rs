use anyhow::Result;
use tracing::info;

use crate::traits::ClaimSubmitter;
use crate::types::ClaimRequest;

/// Logs claims and drops them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClaimSubmitter;

impl ClaimSubmitter for NoopClaimSubmitter {
    fn name(&self) -> &'static str {
        "noop-claim-submitter"
    }

    fn submit(&self, claim: &ClaimRequest) -> Result<()> {
        info!(
            farm_id = claim.farm_id,
            encrypted_rewards = %claim.encrypted_rewards,
            proof = %claim.proof,
            "noop submitter: dropping claim"
        );
        Ok(())
    }
}
