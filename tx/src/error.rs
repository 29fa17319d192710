use thiserror::Error;

use crate::builder::MIN_BASE_FEE;

/// Error raised while assembling or signing a transaction envelope.
///
/// Everything here is a local defect; nothing has reached the network
/// when one of these is returned.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("transaction has no operations")]
    NoOperations,

    #[error("base fee {fee} is below the minimum of {MIN_BASE_FEE} stroops")]
    FeeBelowMinimum { fee: u32 },

    #[error("total fee overflows")]
    FeeOverflow,

    #[error("sequence number would overflow")]
    SequenceOverflow,

    #[error("validity window must be positive")]
    ZeroValidityWindow,

    #[error("operation amount must be positive")]
    NonPositiveAmount,

    #[error("trustline limit must not be negative")]
    NegativeLimit,

    #[error("could not encode transaction: {0}")]
    Encoding(String),
}
