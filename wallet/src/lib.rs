//! Wallet orchestration on top of a remote ledger node.
//!
//! This crate turns three user intents into correctly sequenced, signed,
//! atomic transactions: create a funded account, inspect an account's
//! state, and move the designated asset between accounts. It never holds
//! caller key material beyond a single call, and the master funding key
//! it does hold never appears in logs or errors.
//!
//! The ledger node is reached through the [`Ledger`] trait so tests can
//! swap the HTTP client for a deterministic in-memory double.

pub mod config;
pub mod error;
pub mod ledger;
pub mod service;

pub use config::ServiceConfig;
pub use error::WalletError;
pub use ledger::Ledger;
pub use service::{CreatedWallet, WalletDetails, WalletService};
