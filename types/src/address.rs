//! Ledger account address in strkey form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypeError;

/// A ledger account identifier: an Ed25519 public key in strkey form.
///
/// Always 56 characters, leading `G`, base32 alphabet throughout.
/// This type guards shape only; checksum verification lives in
/// `lumen-crypto`, which is the sole producer of addresses from raw keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Version prefix of every account address.
    pub const PREFIX: char = 'G';

    /// Length of the strkey encoding of a 32-byte key.
    pub const ENCODED_LEN: usize = 56;

    /// Create an address from a raw string, checking prefix, length and
    /// alphabet but not the embedded checksum.
    pub fn new(raw: impl Into<String>) -> Result<Self, TypeError> {
        let s = raw.into();
        if s.len() != Self::ENCODED_LEN {
            return Err(TypeError::InvalidAddress(format!(
                "expected {} characters, got {}",
                Self::ENCODED_LEN,
                s.len()
            )));
        }
        if !s.starts_with(Self::PREFIX) {
            return Err(TypeError::InvalidAddress(format!(
                "expected leading '{}'",
                Self::PREFIX
            )));
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b))
        {
            return Err(TypeError::InvalidAddress(
                "contains a non-base32 character".into(),
            ));
        }
        Ok(Self(s))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
