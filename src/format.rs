use crate::error::{HarvestError, HarvestResult};

pub fn to_0x_hex(bytes: &[u8]) -> String {
    let mut s = String::from("0x");
    s.push_str(&hex::encode(bytes));
    s
}

/// Decode exactly 32 bytes of hex, `0x` prefix optional.
pub fn parse_0x_hex32(s: &str) -> HarvestResult<[u8; 32]> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let mut out = [0u8; 32];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|e| HarvestError::invalid(format!("expected 32 hex bytes: {e}")))?;
    Ok(out)
}

/// `0x1234...abcd`: first 6 and last 4 characters.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
