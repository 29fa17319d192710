//! Cryptographic primitives for the lumen wallet service.
//!
//! - **Ed25519** for transaction signing and verification
//! - **SHA-256** for transaction and network-id hashing
//! - **strkey**: checksummed base32 encoding for account addresses (`G…`)
//!   and secret seeds (`S…`)

pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;
pub mod strkey;

pub use error::KeyError;
pub use hash::{network_id, sha256, sha256_multi};
pub use keys::{
    generate_keypair, keypair_from_seed_bytes, parse_address, parse_full, parse_keypair,
    public_from_seed,
};
pub use sign::{sign_message, verify_signature};
pub use strkey::{decode_account, decode_seed, encode_account, encode_seed};
