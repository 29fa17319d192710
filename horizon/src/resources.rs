//! Wire-format records returned by the ledger node.
//!
//! The node speaks JSON with string-encoded numerics for anything that
//! may exceed 53 bits. These types mirror that shape exactly; conversion
//! into the typed model happens in one place so the rest of the workspace
//! never sees a raw record.

use lumen_types::{Account, Address, Amount, Asset, AssetCode, Balance, CreditAsset};
use serde::Deserialize;

use crate::error::HorizonError;

/// An account record as served by `GET /accounts/{address}`.
#[derive(Debug, Deserialize)]
pub struct AccountResource {
    pub account_id: String,
    /// Sequence numbers are 64-bit and travel as decimal strings.
    pub sequence: String,
    #[serde(default)]
    pub balances: Vec<BalanceResource>,
}

/// One entry of an account's balance list.
#[derive(Debug, Deserialize)]
pub struct BalanceResource {
    pub balance: String,
    pub asset_type: String,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub asset_issuer: Option<String>,
}

impl AccountResource {
    /// Converts the raw record into a typed [`Account`].
    ///
    /// Balance kinds beyond native and credit lines are not modeled;
    /// entries with other type strings are dropped. A record the node
    /// itself mangled (unparseable sequence, credit line without code
    /// or issuer) reads as the node being unusable rather than the
    /// account being absent.
    pub fn into_account(self) -> Result<Account, HorizonError> {
        let address = Address::new(self.account_id)
            .map_err(|_| malformed("account id is not a valid address"))?;
        let sequence: i64 = self
            .sequence
            .parse()
            .map_err(|_| malformed("sequence is not a decimal integer"))?;

        let mut balances = Vec::with_capacity(self.balances.len());
        for entry in self.balances {
            if let Some(balance) = entry.into_balance()? {
                balances.push(balance);
            }
        }

        Ok(Account {
            address,
            sequence,
            balances,
        })
    }
}

impl BalanceResource {
    fn into_balance(self) -> Result<Option<Balance>, HorizonError> {
        let asset = match self.asset_type.as_str() {
            "native" => Asset::Native,
            "credit_alphanum4" | "credit_alphanum12" => {
                let code = self
                    .asset_code
                    .ok_or_else(|| malformed("credit balance without asset code"))?;
                let issuer = self
                    .asset_issuer
                    .ok_or_else(|| malformed("credit balance without issuer"))?;
                let code = AssetCode::new(code)
                    .map_err(|_| malformed("credit balance with invalid asset code"))?;
                let issuer = Address::new(issuer)
                    .map_err(|_| malformed("credit balance with invalid issuer"))?;
                Asset::Credit(CreditAsset { code, issuer })
            }
            _ => return Ok(None),
        };
        let amount: Amount = self
            .balance
            .parse()
            .map_err(|_| malformed("balance is not a decimal amount"))?;
        Ok(Some(Balance { asset, amount }))
    }
}

/// The node's answer to a successful `POST /transactions`.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub hash: String,
    #[serde(default)]
    pub ledger: u32,
}

/// A problem+json error body.
#[derive(Debug, Deserialize)]
pub struct Problem {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub extras: Option<ProblemExtras>,
}

#[derive(Debug, Deserialize)]
pub struct ProblemExtras {
    #[serde(default)]
    pub result_codes: Option<ResultCodes>,
}

/// Machine-readable rejection codes attached to a failed submission.
#[derive(Debug, Deserialize)]
pub struct ResultCodes {
    #[serde(default)]
    pub transaction: Option<String>,
    #[serde(default)]
    pub operations: Vec<String>,
}

impl Problem {
    /// Flattens the problem body into one human-readable line, keeping
    /// the result codes since those are what a caller can branch on.
    pub fn detail_text(&self) -> String {
        let base = self
            .detail
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("no detail provided");
        match self.result_codes_text() {
            Some(codes) => format!("{base} ({codes})"),
            None => base.to_string(),
        }
    }

    fn result_codes_text(&self) -> Option<String> {
        let codes = self.extras.as_ref()?.result_codes.as_ref()?;
        let mut parts = Vec::new();
        if let Some(tx) = &codes.transaction {
            parts.push(tx.clone());
        }
        if !codes.operations.is_empty() {
            parts.push(codes.operations.join(", "));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(": "))
        }
    }
}

fn malformed(what: &str) -> HorizonError {
    HorizonError::Unavailable(format!("node returned a malformed record: {what}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account_json(address: &str) -> String {
        format!(
            r#"{{
                "account_id": "{address}",
                "sequence": "103720918407102567",
                "balances": [
                    {{
                        "balance": "42.0000000",
                        "asset_type": "credit_alphanum4",
                        "asset_code": "USDC",
                        "asset_issuer": "{address}"
                    }},
                    {{
                        "balance": "0.5000000",
                        "asset_type": "native"
                    }}
                ]
            }}"#
        )
    }

    fn some_address() -> String {
        let pair = lumen_crypto::generate_keypair();
        pair.address.as_str().to_string()
    }

    #[test]
    fn account_record_converts_to_typed_account() {
        let address = some_address();
        let resource: AccountResource =
            serde_json::from_str(&sample_account_json(&address)).unwrap();
        let account = resource.into_account().unwrap();

        assert_eq!(account.address.as_str(), address);
        assert_eq!(account.sequence, 103720918407102567);
        assert_eq!(account.balances.len(), 2);
        assert_eq!(account.balances[0].amount, "42".parse::<Amount>().unwrap());
        assert_eq!(account.balances[1].asset, Asset::Native);
        assert_eq!(account.balances[1].amount, "0.5".parse::<Amount>().unwrap());
    }

    #[test]
    fn unmodeled_balance_kinds_are_dropped() {
        let address = some_address();
        let json = format!(
            r#"{{
                "account_id": "{address}",
                "sequence": "7",
                "balances": [
                    {{"balance": "1.0000000", "asset_type": "liquidity_pool_shares"}},
                    {{"balance": "2.0000000", "asset_type": "native"}}
                ]
            }}"#
        );
        let resource: AccountResource = serde_json::from_str(&json).unwrap();
        let account = resource.into_account().unwrap();
        assert_eq!(account.balances.len(), 1);
        assert_eq!(account.balances[0].asset, Asset::Native);
    }

    #[test]
    fn garbage_sequence_is_a_node_fault() {
        let address = some_address();
        let json = format!(
            r#"{{"account_id": "{address}", "sequence": "not-a-number", "balances": []}}"#
        );
        let resource: AccountResource = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            resource.into_account(),
            Err(HorizonError::Unavailable(_))
        ));
    }

    #[test]
    fn credit_balance_without_issuer_is_a_node_fault() {
        let address = some_address();
        let json = format!(
            r#"{{
                "account_id": "{address}",
                "sequence": "7",
                "balances": [
                    {{"balance": "1.0000000", "asset_type": "credit_alphanum4", "asset_code": "USDC"}}
                ]
            }}"#
        );
        let resource: AccountResource = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            resource.into_account(),
            Err(HorizonError::Unavailable(_))
        ));
    }

    #[test]
    fn problem_detail_includes_result_codes() {
        let json = r#"{
            "type": "https://example.test/errors/transaction_failed",
            "title": "Transaction Failed",
            "status": 400,
            "detail": "The transaction failed when submitted to the network.",
            "extras": {
                "result_codes": {
                    "transaction": "tx_failed",
                    "operations": ["op_underfunded", "op_no_trust"]
                }
            }
        }"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(
            problem.detail_text(),
            "The transaction failed when submitted to the network. \
             (tx_failed: op_underfunded, op_no_trust)"
        );
    }

    #[test]
    fn problem_without_extras_falls_back_to_detail() {
        let json = r#"{"title": "Rate Limit Exceeded", "status": 429}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.detail_text(), "Rate Limit Exceeded");
    }

    #[test]
    fn empty_problem_still_yields_a_line() {
        let problem: Problem = serde_json::from_str("{}").unwrap();
        assert_eq!(problem.detail_text(), "no detail provided");
    }
}
