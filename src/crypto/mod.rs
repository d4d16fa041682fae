pub mod commitment;
pub mod keccak;
pub mod owner;
pub mod proof;
pub mod secret_key;

pub use commitment::{commit, commit_decimal};
pub use keccak::{generate_encrypted_id, hash_data, keccak256, PackedHasher};
pub use owner::OwnerId;
pub use proof::{prove, prove_raw, verify};
pub use secret_key::SecretKey;
