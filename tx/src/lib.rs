//! Transaction construction and signing for the lumen wallet service.
//!
//! A transaction is assembled from an account snapshot and a list of
//! operations, bound to a validity window and a fee, hashed under the
//! target network's identifier, and signed by one or more keypairs:
//!
//! - **Operations**: `CreateAccount`, `ChangeTrust`, `Payment`
//! - **Envelope**: the unsigned transaction plus its decorated signatures
//! - **Builder**: sequence, fee and window bookkeeping
//! - **Signer**: per-keypair decorated signatures over the envelope hash

pub mod builder;
pub mod envelope;
pub mod error;
pub mod operation;
pub mod signer;

pub use builder::{TransactionBuilder, DEFAULT_VALIDITY_WINDOW_SECS, MIN_BASE_FEE};
pub use envelope::{DecoratedSignature, TimeBounds, Transaction, TransactionEnvelope};
pub use error::BuildError;
pub use operation::Operation;
pub use signer::sign_envelope;
