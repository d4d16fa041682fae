use anyhow::Result;

use super::{mock::MockClaimSubmitter, noop::NoopClaimSubmitter};
use crate::traits::ClaimSubmitter;
use crate::types::ClaimRequest;

/// Enum representing all claim submitter implementations.
pub enum ClaimSubmitterVariant {
    Noop(NoopClaimSubmitter),
    Mock(MockClaimSubmitter),
}

impl ClaimSubmitter for ClaimSubmitterVariant {
    fn name(&self) -> &'static str {
        match self {
            ClaimSubmitterVariant::Noop(inner) => inner.name(),
            ClaimSubmitterVariant::Mock(inner) => inner.name(),
        }
    }

    fn submit(&self, claim: &ClaimRequest) -> Result<()> {
        match self {
            ClaimSubmitterVariant::Noop(inner) => inner.submit(claim),
            ClaimSubmitterVariant::Mock(inner) => inner.submit(claim),
        }
    }

    fn submit_many(&self, claims: &[ClaimRequest]) -> Result<()> {
        match self {
            ClaimSubmitterVariant::Noop(inner) => inner.submit_many(claims),
            ClaimSubmitterVariant::Mock(inner) => inner.submit_many(claims),
        }
    }
}
