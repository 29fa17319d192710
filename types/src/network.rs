//! Target ledger network selection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TypeError;

/// Identifies which ledger network the service talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production network.
    Public,
    /// The public test network.
    Testnet,
}

impl Network {
    /// Passphrase mixed into every transaction hash. Signatures made under
    /// one passphrase verify on no other network.
    pub fn passphrase(&self) -> &'static str {
        match self {
            Self::Public => "Public Global Stellar Network ; September 2015",
            Self::Testnet => "Test SDF Network ; September 2015",
        }
    }

    /// Default node endpoint for this network.
    pub fn node_url(&self) -> &'static str {
        match self {
            Self::Public => "https://horizon.stellar.org",
            Self::Testnet => "https://horizon-testnet.stellar.org",
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Testnet => "testnet",
        }
    }
}

impl FromStr for Network {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "testnet" | "test" => Ok(Self::Testnet),
            other => Err(TypeError::UnknownNetwork(other.into())),
        }
    }
}
