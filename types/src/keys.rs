//! Key material for ledger accounts.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::address::Address;

/// A 32-byte Ed25519 seed.
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Seed bytes are zeroized on drop.
#[derive(PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct SecretSeed(pub [u8; 32]);

impl SecretSeed {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// An account address together with the seed that controls it.
///
/// Use `lumen_crypto::generate_keypair()` or `lumen_crypto::parse_full()`
/// to construct one. This struct is intentionally just data.
#[derive(PartialEq)]
pub struct FullKeypair {
    pub address: Address,
    pub seed: SecretSeed,
}

impl fmt::Debug for FullKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullKeypair")
            .field("address", &self.address)
            .field("seed", &"<redacted>")
            .finish()
    }
}

/// Key material graded by capability.
///
/// The `Address` variant identifies an account and can verify signatures
/// against it; only the `Full` variant can produce them. Code that signs
/// takes `FullKeypair`, so "can this key sign" is settled by the type
/// system rather than checked at call time.
#[derive(PartialEq)]
pub enum Keypair {
    /// Public half only.
    Address(Address),
    /// Public half plus controlling seed.
    Full(FullKeypair),
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => f.debug_tuple("Address").field(address).finish(),
            Self::Full(full) => f.debug_tuple("Full").field(full).finish(),
        }
    }
}

impl Keypair {
    /// The account address either variant identifies.
    pub fn address(&self) -> &Address {
        match self {
            Self::Address(address) => address,
            Self::Full(full) => &full.address,
        }
    }

    /// The full keypair, when this key material can sign.
    pub fn full(&self) -> Option<&FullKeypair> {
        match self {
            Self::Address(_) => None,
            Self::Full(full) => Some(full),
        }
    }
}
