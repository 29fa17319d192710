//! Ledger operations: the atomic state changes a transaction applies.

use serde::{Deserialize, Serialize};

use lumen_types::{Address, Amount, Asset, CreditAsset};

use crate::error::BuildError;

/// One operation of a transaction.
///
/// Operations are applied in order and atomically: either every operation
/// of a transaction takes effect or none does. Each operation may name its
/// own source account; when absent it acts for the transaction's source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    /// Create and fund a new account.
    CreateAccount {
        source: Option<Address>,
        destination: Address,
        starting_balance: Amount,
    },
    /// Open (or resize) the source account's trustline for an issued asset.
    /// A `None` limit means the maximum representable amount.
    ChangeTrust {
        source: Option<Address>,
        asset: CreditAsset,
        limit: Option<Amount>,
    },
    /// Move an amount of an asset to another account.
    Payment {
        source: Option<Address>,
        destination: Address,
        asset: Asset,
        amount: Amount,
    },
}

impl Operation {
    /// The operation-level source override, if any.
    pub fn source(&self) -> Option<&Address> {
        match self {
            Self::CreateAccount { source, .. } => source.as_ref(),
            Self::ChangeTrust { source, .. } => source.as_ref(),
            Self::Payment { source, .. } => source.as_ref(),
        }
    }

    /// Stateless validation: amount signs and trustline limits.
    ///
    /// Stateful checks (balance sufficiency, trustline existence, account
    /// existence) are the ledger's business at submission time.
    pub fn validate(&self) -> Result<(), BuildError> {
        match self {
            Self::CreateAccount {
                starting_balance, ..
            } => {
                if !starting_balance.is_positive() {
                    return Err(BuildError::NonPositiveAmount);
                }
            }
            Self::ChangeTrust { limit, .. } => {
                if let Some(limit) = limit {
                    if limit.stroops() < 0 {
                        return Err(BuildError::NegativeLimit);
                    }
                }
            }
            Self::Payment { amount, .. } => {
                if !amount.is_positive() {
                    return Err(BuildError::NonPositiveAmount);
                }
            }
        }
        Ok(())
    }
}
