//! Fundamental types for the lumen wallet service.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! addresses, amounts, assets, account snapshots, networks, and key material.

pub mod account;
pub mod address;
pub mod amount;
pub mod asset;
pub mod error;
pub mod hash;
pub mod keys;
pub mod network;
pub mod time;

pub use account::{Account, Balance};
pub use address::Address;
pub use amount::Amount;
pub use asset::{Asset, AssetCode, CreditAsset};
pub use error::TypeError;
pub use hash::TxHash;
pub use keys::{FullKeypair, Keypair, SecretSeed, Signature};
pub use network::Network;
pub use time::Timestamp;
