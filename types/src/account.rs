//! Account state snapshot fetched from the ledger node.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::amount::Amount;
use crate::asset::Asset;

/// One balance line of an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub asset: Asset,
    pub amount: Amount,
}

/// Point-in-time account state as reported by the ledger node.
///
/// Snapshots are fetched per request and never cached. The sequence number
/// is only good for one transaction; concurrent writers that build from the
/// same snapshot race, and the node accepts at most one of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    pub sequence: i64,
    pub balances: Vec<Balance>,
}

impl Account {
    /// Balance held in `asset`, if the account has a line for it.
    pub fn balance_of(&self, asset: &Asset) -> Option<Amount> {
        self.balances
            .iter()
            .find(|line| &line.asset == asset)
            .map(|line| line.amount)
    }
}
