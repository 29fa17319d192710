//! Nullable infrastructure for deterministic testing.
//!
//! The ledger node is the wallet service's only external dependency,
//! reached through the `Ledger` trait. This crate provides a
//! test-friendly implementation that:
//! - Applies transactions with real sequence, signature and balance checks
//! - Can be seeded and scripted programmatically
//! - Never touches the network
//!
//! Usage: swap `HorizonClient` for [`NullLedger`] in tests.

pub mod ledger;

pub use ledger::NullLedger;
