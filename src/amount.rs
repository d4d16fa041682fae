//! 18-decimal fixed-point amounts.
//!
//! Every amount is held as an integer count of base units (wei), so
//! `1.5` is stored as `1_500_000_000_000_000_000`.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HarvestError, HarvestResult};

pub const DECIMALS: usize = 18;

/// 10^18 base units per whole unit.
pub const WEI_PER_UNIT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(U256);

impl Amount {
    pub const ZERO: Amount = Amount(U256::ZERO);

    pub fn from_wei(wei: U256) -> Self {
        Amount(wei)
    }

    pub fn wei(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Big-endian `uint256` form, as hashed by the commitment encoder.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }

    /// Whole units, no fractional part.
    pub fn from_units(units: u64) -> HarvestResult<Self> {
        U256::from(units)
            .checked_mul(WEI_PER_UNIT)
            .map(Amount)
            .ok_or_else(|| HarvestError::encoding("amount does not fit in 256 bits"))
    }

    /// A leading `-`, ignoring surrounding whitespace.
    pub fn is_negative_literal(input: &str) -> bool {
        input.trim().starts_with('-')
    }

    /// Parse a human-readable decimal string ("100", "0.25", ".5", "3.").
    pub fn from_decimal(input: &str) -> HarvestResult<Self> {
        let s = input.trim();
        if Self::is_negative_literal(s) {
            return Err(HarvestError::invalid(format!("negative amount: {input:?}")));
        }
        if s.is_empty() {
            return Err(HarvestError::invalid("empty amount"));
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(HarvestError::invalid(format!("malformed amount: {input:?}")));
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(HarvestError::invalid(format!("malformed amount: {input:?}")));
        }

        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > DECIMALS {
            return Err(HarvestError::encoding(format!(
                "more than {DECIMALS} fractional digits: {input:?}"
            )));
        }

        let whole_wei = digits_to_u256(whole)?
            .checked_mul(WEI_PER_UNIT)
            .ok_or_else(|| HarvestError::encoding("amount does not fit in 256 bits"))?;
        let padded = format!("{fraction:0<width$}", width = DECIMALS);
        let fraction_wei = digits_to_u256(&padded)?;

        whole_wei
            .checked_add(fraction_wei)
            .map(Amount)
            .ok_or_else(|| HarvestError::encoding("amount does not fit in 256 bits"))
    }
}

fn digits_to_u256(digits: &str) -> HarvestResult<U256> {
    let ten = U256::from(10u64);
    let mut acc = U256::ZERO;
    for b in digits.bytes() {
        acc = acc
            .checked_mul(ten)
            .and_then(|v| v.checked_add(U256::from(u64::from(b - b'0'))))
            .ok_or_else(|| HarvestError::encoding("amount does not fit in 256 bits"))?;
    }
    Ok(acc)
}

impl fmt::Display for Amount {
    /// `formatEther` style: "100.0", "0.5", "1.000000000000000001".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / WEI_PER_UNIT;
        let fraction = self.0 % WEI_PER_UNIT;
        let padded = format!("{:0>width$}", fraction.to_string(), width = DECIMALS);
        let trimmed = padded.trim_end_matches('0');
        let fraction = if trimmed.is_empty() { "0" } else { trimmed };
        write!(f, "{whole}.{fraction}")
    }
}

impl FromStr for Amount {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::from_decimal(s)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Amount::from_decimal(&s).map_err(serde::de::Error::custom)
    }
}
