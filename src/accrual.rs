//! Time-based reward accrual.
//!
//! `reward = principal * rate_bps * elapsed / (SECONDS_PER_YEAR * 10_000)`,
//! computed on the wei representation with truncating integer division.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::{HarvestError, HarvestResult};

pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Annual rate in basis points (10_000 = 100%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasisPoints(pub u64);

impl BasisPoints {
    pub fn try_from_i64(bps: i64) -> HarvestResult<Self> {
        if bps < 0 {
            return Err(HarvestError::invalid(format!("negative rate: {bps} bps")));
        }
        Ok(BasisPoints(bps.unsigned_abs()))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

/// Reward accrued on `principal` at `rate` over `elapsed_secs`.
pub fn accrue(principal: &Amount, rate: BasisPoints, elapsed_secs: u64) -> HarvestResult<Amount> {
    let denominator = U256::from(SECONDS_PER_YEAR) * U256::from(BPS_DENOMINATOR);

    let numerator = principal
        .wei()
        .checked_mul(U256::from(rate.0))
        .and_then(|v| v.checked_mul(U256::from(elapsed_secs)))
        .ok_or_else(|| HarvestError::encoding("reward computation overflows 256 bits"))?;

    Ok(Amount::from_wei(numerator / denominator))
}

/// Untyped entry point: decimal principal, signed rate and duration.
pub fn accrue_decimal(principal: &str, rate_bps: i64, elapsed_secs: i64) -> HarvestResult<Amount> {
    let principal = Amount::from_decimal(principal).map_err(|e| match e {
        HarvestError::Encoding(msg) => HarvestError::InvalidArgument(msg),
        other => other,
    })?;
    let rate = BasisPoints::try_from_i64(rate_bps)?;
    if elapsed_secs < 0 {
        return Err(HarvestError::invalid(format!(
            "negative duration: {elapsed_secs}s"
        )));
    }

    accrue(&principal, rate, elapsed_secs as u64)
}
