//! Transaction assembly from an account snapshot.

use lumen_types::{Account, Address, Timestamp};

use crate::envelope::{TimeBounds, Transaction, TransactionEnvelope};
use crate::error::BuildError;
use crate::operation::Operation;

/// Minimum per-operation fee, in stroops.
pub const MIN_BASE_FEE: u32 = 100;

/// Default validity window, in seconds.
pub const DEFAULT_VALIDITY_WINDOW_SECS: u64 = 300;

/// Assembles an unsigned envelope from a source account snapshot.
///
/// The builder consumes the snapshot's sequence number exactly once:
/// the envelope carries snapshot sequence + 1, and the node accepts at
/// most one envelope per sequence value. Operations are kept in the
/// order they were added.
pub struct TransactionBuilder {
    source: Address,
    snapshot_sequence: i64,
    base_fee: u32,
    validity_window_secs: u64,
    operations: Vec<Operation>,
}

impl TransactionBuilder {
    /// Start building against `account`'s current state.
    pub fn new(account: &Account) -> Self {
        Self {
            source: account.address.clone(),
            snapshot_sequence: account.sequence,
            base_fee: MIN_BASE_FEE,
            validity_window_secs: DEFAULT_VALIDITY_WINDOW_SECS,
            operations: Vec::new(),
        }
    }

    /// Append an operation. Order is preserved.
    pub fn operation(mut self, op: Operation) -> Self {
        self.operations.push(op);
        self
    }

    /// Override the per-operation fee. The total fee is this value times
    /// the operation count.
    pub fn base_fee(mut self, fee: u32) -> Self {
        self.base_fee = fee;
        self
    }

    /// Override the validity window measured from build time.
    pub fn validity_window(mut self, secs: u64) -> Self {
        self.validity_window_secs = secs;
        self
    }

    /// Build with the current system time as the window origin.
    pub fn build(self) -> Result<TransactionEnvelope, BuildError> {
        self.build_at(Timestamp::now())
    }

    /// Build an unsigned envelope, expiring `validity_window` seconds
    /// after `now`.
    pub fn build_at(self, now: Timestamp) -> Result<TransactionEnvelope, BuildError> {
        if self.operations.is_empty() {
            return Err(BuildError::NoOperations);
        }
        if self.base_fee < MIN_BASE_FEE {
            return Err(BuildError::FeeBelowMinimum { fee: self.base_fee });
        }
        if self.validity_window_secs == 0 {
            return Err(BuildError::ZeroValidityWindow);
        }
        for op in &self.operations {
            op.validate()?;
        }

        let sequence = self
            .snapshot_sequence
            .checked_add(1)
            .ok_or(BuildError::SequenceOverflow)?;
        let fee = self
            .base_fee
            .checked_mul(self.operations.len() as u32)
            .ok_or(BuildError::FeeOverflow)?;

        Ok(TransactionEnvelope {
            tx: Transaction {
                source: self.source,
                sequence,
                fee,
                operations: self.operations,
                time_bounds: TimeBounds {
                    min_time: Timestamp::EPOCH,
                    max_time: now.plus_secs(self.validity_window_secs),
                },
            },
            signatures: Vec::new(),
        })
    }
}
