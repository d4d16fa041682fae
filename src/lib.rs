// Library exports for testing and external use

pub mod accrual;
pub mod amount;
pub mod claim;
pub mod config;
pub mod crypto;
pub mod error;
pub mod format;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod vault;

// Re-export commonly used types and traits
pub use accrual::{accrue, accrue_decimal, BasisPoints, BPS_DENOMINATOR, SECONDS_PER_YEAR};
pub use amount::Amount;
pub use config::VaultConfig;
pub use crypto::{OwnerId, SecretKey};
pub use error::{HarvestError, HarvestResult};
pub use traits::ClaimSubmitter;
pub use types::{ClaimRequest, Commitment, Digest32, FarmId, Proof};
pub use vault::{AccruedReward, PreparedClaim, RewardVault};

// Re-export variant enum for convenience
pub use claim::{ClaimSubmitterVariant, MockClaimSubmitter, NoopClaimSubmitter};
