//! HTTP API for the wallet service.
//!
//! Three endpoints, JSON in and JSON out:
//! - `POST /api/v1/wallets/create` mints a funded wallet
//! - `GET /api/v1/wallets/:public_key` reports balances and sequence
//! - `POST /api/v1/wallets/transfer` moves the designated asset
//!
//! Every failure answers with the same body shape, `{"error": ...}` plus
//! an optional `details` field, and a status code keyed to the error kind
//! rather than to its message text.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use handlers::router;
pub use server::RpcServer;
