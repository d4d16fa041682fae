use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};

use crate::traits::ClaimSubmitter;
use crate::types::ClaimRequest;

/// Mock submitter for testing. Records every claim it receives.
#[derive(Clone, Default)]
pub struct MockClaimSubmitter {
    pub claims: Arc<Mutex<Vec<ClaimRequest>>>,
}

impl MockClaimSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<ClaimRequest> {
        self.claims.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ClaimSubmitter for MockClaimSubmitter {
    fn name(&self) -> &'static str {
        "mock-claim-submitter"
    }

    fn submit(&self, claim: &ClaimRequest) -> Result<()> {
        self.claims
            .lock()
            .map_err(|_| anyhow!("mock claim store poisoned"))?
            .push(claim.clone());
        Ok(())
    }
}
