use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::format::{parse_0x_hex32, to_0x_hex};

/// Fixed-size digest produced by the hash function.
pub type Digest32 = [u8; 32];

/// Farm (subject) identifier, encoded as `uint256`.
pub type FarmId = u64;

macro_rules! opaque_digest {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub Digest32);

        impl $name {
            pub fn as_bytes(&self) -> &Digest32 {
                &self.0
            }

            pub fn to_vec(&self) -> Vec<u8> {
                self.0.to_vec()
            }

            pub fn from_hex(s: &str) -> crate::error::HarvestResult<Self> {
                parse_0x_hex32(s).map($name)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), to_0x_hex(&self.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&to_0x_hex(&self.0))
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&to_0x_hex(&self.0))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                $name::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

opaque_digest!(
    /// Hiding digest over a reward amount, the secret key and a fresh nonce.
    /// There is no way back from a commitment to the amount.
    Commitment
);

opaque_digest!(
    /// Digest binding a farm, an owner and a commitment to the secret key.
    Proof
);

/// Arguments of the external `claimRewards(farmId, encryptedRewards, proof)` call.
/// Both byte payloads are passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub farm_id: FarmId,
    pub encrypted_rewards: Commitment,
    pub proof: Proof,
}
