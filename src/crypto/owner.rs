use std::fmt;
use std::str::FromStr;

use crate::error::{HarvestError, HarvestResult};
use crate::format::to_0x_hex;

pub const ADDRESS_LEN: usize = 20;

/// Address-like owner identifier: `0x` followed by 1 to 40 hex digits.
///
/// An owner is the 20-byte value, not its spelling. Short forms are
/// left-padded and hex case is ignored, so `0xabc`, `0xABC`, `0x00abc` and
/// `0x0000000000000000000000000000000000000abc` all name the same owner and
/// share one proof. Full 40-digit addresses encode exactly as a Solidity
/// `address`. A different 20-byte value is a different owner.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId([u8; ADDRESS_LEN]);

impl OwnerId {
    pub fn parse(input: &str) -> HarvestResult<Self> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .ok_or_else(|| HarvestError::invalid(format!("owner must start with 0x: {input:?}")))?;

        if digits.is_empty() || digits.len() > ADDRESS_LEN * 2 {
            return Err(HarvestError::invalid(format!(
                "owner must have 1..=40 hex digits: {input:?}"
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HarvestError::invalid(format!(
                "owner contains non-hex characters: {input:?}"
            )));
        }

        let padded = format!("{digits:0>width$}", width = ADDRESS_LEN * 2);
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| HarvestError::invalid(format!("owner is not hex: {e}")))?;
        Ok(OwnerId(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl FromStr for OwnerId {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OwnerId::parse(s)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_0x_hex(&self.0))
    }
}

impl fmt::Debug for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnerId({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_full_forms_agree() {
        let short = OwnerId::parse("0xabc").unwrap();
        let full = OwnerId::parse("0x0000000000000000000000000000000000000ABC").unwrap();
        assert_eq!(short, full);
        assert_eq!(&short.as_bytes()[18..], &[0x0au8, 0xbc]);
    }

    #[test]
    fn accepts_checksummed_address() {
        let owner = OwnerId::parse("0x52908400098527886E0F7030069857D2E4169EE7").unwrap();
        assert_eq!(owner.to_string(), "0x52908400098527886e0f7030069857d2e4169ee7");
    }

    #[test]
    fn rejects_malformed_owners() {
        for bad in [
            "",
            "0x",
            "abc",
            "0xabg",
            "0x 12",
            "0x52908400098527886E0F7030069857D2E4169EE7ff",
            "alice",
        ] {
            assert!(
                matches!(OwnerId::parse(bad), Err(HarvestError::InvalidArgument(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
