pub mod mock;
pub mod noop;
pub mod variant;

pub use mock::MockClaimSubmitter;
pub use noop::NoopClaimSubmitter;
pub use variant::ClaimSubmitterVariant;
