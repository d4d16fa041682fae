use anyhow::Result;

use crate::types::ClaimRequest;

/// Where prepared claims go (e.g. a `claimRewards` contract call).
/// Implementations must forward both byte payloads unmodified.
pub trait ClaimSubmitter: Send + Sync {
    /// Submitter name for logging.
    fn name(&self) -> &'static str;

    fn submit(&self, claim: &ClaimRequest) -> Result<()>;

    fn submit_many(&self, claims: &[ClaimRequest]) -> Result<()> {
        for claim in claims {
            self.submit(claim)?;
        }
        Ok(())
    }
}
