//! HTTP client for a Horizon-style ledger node.
//!
//! Two operations: fetch an account's current state, and submit a signed
//! transaction envelope. Node failures are translated into the three
//! outcomes callers act on: the account does not exist, the node cannot
//! be reached right now, or the node looked at the transaction and said no.

pub mod client;
pub mod error;
pub mod resources;

pub use client::{HorizonClient, SubmittedTx};
pub use error::HorizonError;
