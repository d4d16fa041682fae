pub mod claim_submitter;

pub use claim_submitter::ClaimSubmitter;
