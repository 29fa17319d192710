//! Validation errors for the fundamental types.

use thiserror::Error;

/// Error raised when constructing a fundamental type from raw input.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid asset code: {0}")]
    InvalidAssetCode(String),

    #[error("unknown network \"{0}\" (expected \"public\" or \"testnet\")")]
    UnknownNetwork(String),
}
