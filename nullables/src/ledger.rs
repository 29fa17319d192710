//! Nullable ledger: apply transactions in memory with real ledger rules.
//!
//! Sequence numbers, required signatures, balances and trustlines are all
//! checked the way a real node checks them, so service tests exercise the
//! same rejection paths they would see in production. Rejection details
//! carry the node's result-code vocabulary (`tx_bad_seq`, `op_no_trust`,
//! ...). Fees and reserves are not charged; time bounds are not enforced
//! (the null has no clock).

use std::collections::HashMap;
use std::sync::Mutex;

use lumen_crypto::{decode_account, verify_signature};
use lumen_horizon::{HorizonError, SubmittedTx};
use lumen_tx::{Operation, TransactionEnvelope, MIN_BASE_FEE};
use lumen_types::{Account, Address, Amount, Asset, Balance, Network};
use lumen_wallet::Ledger;

/// A test ledger that applies envelopes instead of forwarding them.
///
/// Thread-safe for use with tokio's multi-threaded runtime.
pub struct NullLedger {
    network: Network,
    state: Mutex<LedgerState>,
}

struct LedgerState {
    accounts: HashMap<String, Account>,
    /// Every envelope handed to `submit`, accepted or not.
    submissions: Vec<TransactionEnvelope>,
    /// Account fetches served, including while offline.
    fetches: u64,
    /// Number of the ledger the next accepted transaction lands in.
    ledger: u32,
    offline: bool,
}

impl NullLedger {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            state: Mutex::new(LedgerState {
                accounts: HashMap::new(),
                submissions: Vec::new(),
                fetches: 0,
                ledger: 1,
                offline: false,
            }),
        }
    }

    /// Seed an account directly, bypassing transaction processing.
    pub fn put_account(&self, account: Account) {
        self.state
            .lock()
            .unwrap()
            .accounts
            .insert(account.address.as_str().to_string(), account);
    }

    /// Current state of an account, if it exists.
    pub fn account(&self, address: &Address) -> Option<Account> {
        self.state
            .lock()
            .unwrap()
            .accounts
            .get(address.as_str())
            .cloned()
    }

    /// All envelopes handed to `submit`, accepted or rejected (for
    /// assertions).
    pub fn submissions(&self) -> Vec<TransactionEnvelope> {
        self.state.lock().unwrap().submissions.clone()
    }

    /// Number of account fetches served.
    pub fn fetch_count(&self) -> u64 {
        self.state.lock().unwrap().fetches
    }

    /// Scripted outage: while offline, every call answers `Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }
}

impl Default for NullLedger {
    fn default() -> Self {
        Self::new(Network::Testnet)
    }
}

impl Ledger for NullLedger {
    async fn fetch_account(&self, address: &Address) -> Result<Account, HorizonError> {
        let mut state = self.state.lock().unwrap();
        state.fetches += 1;
        if state.offline {
            return Err(offline());
        }
        state
            .accounts
            .get(address.as_str())
            .cloned()
            .ok_or(HorizonError::NotFound)
    }

    async fn submit(&self, envelope: &TransactionEnvelope) -> Result<SubmittedTx, HorizonError> {
        let mut state = self.state.lock().unwrap();
        state.submissions.push(envelope.clone());
        if state.offline {
            return Err(offline());
        }
        state.apply(envelope, self.network)
    }
}

impl LedgerState {
    /// Validate and apply one envelope, all operations or none.
    fn apply(
        &mut self,
        envelope: &TransactionEnvelope,
        network: Network,
    ) -> Result<SubmittedTx, HorizonError> {
        let tx = &envelope.tx;
        if tx.operations.is_empty() {
            return Err(reject("tx_missing_operation"));
        }
        let min_fee = MIN_BASE_FEE.saturating_mul(tx.operations.len() as u32);
        if tx.fee < min_fee {
            return Err(reject("tx_insufficient_fee"));
        }

        let source = self
            .accounts
            .get(tx.source.as_str())
            .ok_or_else(|| reject("tx_no_source_account"))?;
        if tx.sequence != source.sequence + 1 {
            return Err(reject("tx_bad_seq"));
        }

        self.check_signatures(envelope, network)?;

        // Operations mutate a scratch copy; state commits only when every
        // one of them succeeds.
        let mut accounts = self.accounts.clone();
        for op in &tx.operations {
            apply_operation(&mut accounts, op, &tx.source, self.ledger)?;
        }
        if let Some(source) = accounts.get_mut(tx.source.as_str()) {
            source.sequence = tx.sequence;
        }
        self.accounts = accounts;

        let hash = envelope
            .hash(network)
            .map_err(|e| HorizonError::Unavailable(format!("could not hash envelope: {e}")))?;
        let ledger = self.ledger;
        self.ledger += 1;
        Ok(SubmittedTx { hash, ledger })
    }

    /// Every required signer (the transaction source plus each
    /// operation-level source) must have a verifying signature attached.
    fn check_signatures(
        &self,
        envelope: &TransactionEnvelope,
        network: Network,
    ) -> Result<(), HorizonError> {
        let hash = envelope
            .hash(network)
            .map_err(|e| HorizonError::Unavailable(format!("could not hash envelope: {e}")))?;

        let mut required: Vec<&Address> = vec![&envelope.tx.source];
        for op in &envelope.tx.operations {
            if let Some(source) = op.source() {
                if !required.contains(&source) {
                    required.push(source);
                }
            }
        }

        for signer in required {
            let public = decode_account(signer.as_str()).ok_or_else(|| reject("tx_bad_auth"))?;
            let authorized = envelope.signatures.iter().any(|sig| {
                sig.hint == public[28..]
                    && verify_signature(hash.as_bytes(), &sig.signature, &public)
            });
            if !authorized {
                return Err(reject("tx_bad_auth"));
            }
        }
        Ok(())
    }
}

fn apply_operation(
    accounts: &mut HashMap<String, Account>,
    op: &Operation,
    tx_source: &Address,
    ledger: u32,
) -> Result<(), HorizonError> {
    match op {
        Operation::CreateAccount {
            source,
            destination,
            starting_balance,
        } => {
            if accounts.contains_key(destination.as_str()) {
                return Err(reject("tx_failed: op_already_exists"));
            }
            let payer = source.as_ref().unwrap_or(tx_source);
            debit(accounts, payer, &Asset::Native, *starting_balance)?;
            accounts.insert(
                destination.as_str().to_string(),
                Account {
                    address: destination.clone(),
                    // New accounts start at the creating ledger shifted up,
                    // so sequence numbers never repeat across recreations.
                    sequence: (ledger as i64) << 32,
                    balances: vec![Balance {
                        asset: Asset::Native,
                        amount: *starting_balance,
                    }],
                },
            );
        }
        Operation::ChangeTrust {
            source,
            asset,
            limit,
        } => {
            let holder = source.as_ref().unwrap_or(tx_source);
            let account = accounts
                .get_mut(holder.as_str())
                .ok_or_else(|| reject("tx_failed: op_no_source_account"))?;
            let asset = Asset::Credit(asset.clone());
            let held = account.balance_of(&asset).unwrap_or(Amount::ZERO);
            match limit {
                Some(limit) if *limit < held => {
                    return Err(reject("tx_failed: op_invalid_limit"))
                }
                // A zero limit deletes the trustline; the arm above has
                // already ruled out a remaining balance.
                Some(limit) if limit.is_zero() => {
                    account.balances.retain(|line| line.asset != asset);
                }
                _ => {
                    if account.balance_of(&asset).is_none() {
                        account.balances.push(Balance {
                            asset,
                            amount: Amount::ZERO,
                        });
                    }
                }
            }
        }
        Operation::Payment {
            source,
            destination,
            asset,
            amount,
        } => {
            if !amount.is_positive() {
                return Err(reject("tx_failed: op_malformed"));
            }
            let payer = source.as_ref().unwrap_or(tx_source);
            debit(accounts, payer, asset, *amount)?;
            credit(accounts, destination, asset, *amount)?;
        }
    }
    Ok(())
}

fn debit(
    accounts: &mut HashMap<String, Account>,
    payer: &Address,
    asset: &Asset,
    amount: Amount,
) -> Result<(), HorizonError> {
    let account = accounts
        .get_mut(payer.as_str())
        .ok_or_else(|| reject("tx_failed: op_no_source_account"))?;
    let line = account
        .balances
        .iter_mut()
        .find(|line| &line.asset == asset)
        .ok_or_else(|| reject("tx_failed: op_src_no_trust"))?;
    line.amount = line
        .amount
        .checked_sub(amount)
        .filter(|rest| !rest.stroops().is_negative())
        .ok_or_else(|| reject("tx_failed: op_underfunded"))?;
    Ok(())
}

fn credit(
    accounts: &mut HashMap<String, Account>,
    destination: &Address,
    asset: &Asset,
    amount: Amount,
) -> Result<(), HorizonError> {
    let account = accounts
        .get_mut(destination.as_str())
        .ok_or_else(|| reject("tx_failed: op_no_destination"))?;
    // Credit assets land only on an existing trustline.
    let line = account
        .balances
        .iter_mut()
        .find(|line| &line.asset == asset)
        .ok_or_else(|| reject("tx_failed: op_no_trust"))?;
    line.amount = line
        .amount
        .checked_add(amount)
        .ok_or_else(|| reject("tx_failed: op_line_full"))?;
    Ok(())
}

fn reject(codes: &str) -> HorizonError {
    HorizonError::Rejected {
        detail: format!("transaction rejected ({codes})"),
    }
}

fn offline() -> HorizonError {
    HorizonError::Unavailable("ledger offline (scripted)".into())
}
