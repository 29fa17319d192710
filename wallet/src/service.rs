//! Wallet orchestration: create, inspect, transfer.

use std::fmt;

use lumen_crypto::{encode_seed, generate_keypair, parse_address, parse_full};
use lumen_horizon::HorizonError;
use lumen_tx::{sign_envelope, Operation, TransactionBuilder};
use lumen_types::{
    Account, Address, Amount, Asset, Balance, CreditAsset, FullKeypair, Keypair, Network, TxHash,
};
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::error::WalletError;
use crate::ledger::Ledger;

/// Outcome of a successful wallet creation.
///
/// `secret` is the only place the new seed ever leaves the service, and
/// it is handed to the caller exactly once; nothing retains it. The
/// `Debug` form redacts it so logging a response cannot leak it.
pub struct CreatedWallet {
    pub address: Address,
    pub secret: String,
    pub tx_hash: TxHash,
}

impl fmt::Debug for CreatedWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatedWallet")
            .field("address", &self.address)
            .field("secret", &"<redacted>")
            .field("tx_hash", &self.tx_hash)
            .finish()
    }
}

/// Account state answered by [`WalletService::wallet_details`].
///
/// A never-created address is a well-formed answer, not an error:
/// `exists` is false, balances are empty, the sequence reads zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletDetails {
    pub address: Address,
    pub exists: bool,
    pub balances: Vec<Balance>,
    pub sequence: i64,
}

/// The wallet orchestration service.
///
/// Stateless between calls: every operation re-reads account state from
/// the ledger, and correctness under concurrent use rests on the ledger's
/// per-account sequence check rather than on in-process locking. Shared
/// behind an `Arc` by any number of request tasks.
#[derive(Debug)]
pub struct WalletService<L> {
    ledger: L,
    network: Network,
    master: FullKeypair,
    asset: CreditAsset,
    starting_balance: Amount,
    funding_amount: Amount,
}

impl<L: Ledger> WalletService<L> {
    /// Builds the service, failing on configuration defects now rather
    /// than on the first request.
    pub fn new(ledger: L, config: ServiceConfig) -> Result<Self, WalletError> {
        let ServiceConfig {
            network,
            master,
            asset,
            starting_balance,
            funding_amount,
        } = config;
        let master = match master {
            Keypair::Full(full) => full,
            Keypair::Address(_) => {
                return Err(WalletError::Build(
                    "master key is not a full keypair".into(),
                ))
            }
        };
        if !starting_balance.is_positive() || !funding_amount.is_positive() {
            return Err(WalletError::Build(
                "starting balance and funding amount must be positive".into(),
            ));
        }
        Ok(Self {
            ledger,
            network,
            master,
            asset,
            starting_balance,
            funding_amount,
        })
    }

    /// The asset this service funds new wallets with and transfers.
    pub fn asset(&self) -> &CreditAsset {
        &self.asset
    }

    /// The network every envelope is bound to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Creates a funded wallet in one atomic transaction.
    ///
    /// A single envelope carries account creation, the trustline for the
    /// designated asset (with the new account as operation source, which
    /// is why the new key co-signs), and the funding payment. The ledger
    /// applies all three operations or none, so no partially set up
    /// wallet can ever exist.
    pub async fn create_wallet(&self) -> Result<CreatedWallet, WalletError> {
        let new = generate_keypair();
        debug!(address = %new.address, "generated keypair for new wallet");

        let funding = self.load_account(&self.master.address).await?;
        let mut envelope = TransactionBuilder::new(&funding)
            .operation(Operation::CreateAccount {
                source: None,
                destination: new.address.clone(),
                starting_balance: self.starting_balance,
            })
            .operation(Operation::ChangeTrust {
                source: Some(new.address.clone()),
                asset: self.asset.clone(),
                limit: None,
            })
            .operation(Operation::Payment {
                source: None,
                destination: new.address.clone(),
                asset: Asset::Credit(self.asset.clone()),
                amount: self.funding_amount,
            })
            .build()?;
        sign_envelope(&mut envelope, self.network, &[&self.master, &new])?;

        let submitted = self.ledger.submit(&envelope).await?;
        info!(address = %new.address, hash = %submitted.hash, "wallet created and funded");

        let secret = encode_seed(new.seed.as_bytes());
        Ok(CreatedWallet {
            address: new.address,
            secret,
            tx_hash: submitted.hash,
        })
    }

    /// Looks up an account's balances and sequence number.
    pub async fn wallet_details(&self, address: &str) -> Result<WalletDetails, WalletError> {
        let address = parse_address(address)
            .map_err(|_| WalletError::InvalidAddress("invalid public key format".into()))?;

        match self.ledger.fetch_account(&address).await {
            Ok(account) => Ok(WalletDetails {
                address: account.address,
                exists: true,
                balances: account.balances,
                sequence: account.sequence,
            }),
            Err(HorizonError::NotFound) => Ok(WalletDetails {
                address,
                exists: false,
                balances: Vec::new(),
                sequence: 0,
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// Transfers `amount` of the designated asset from the holder of
    /// `from_secret` to `to_address`.
    ///
    /// All three inputs are validated before any network traffic, so a
    /// malformed request costs nothing. The sender's key material lives
    /// only for the duration of this call.
    pub async fn transfer(
        &self,
        from_secret: &str,
        to_address: &str,
        amount: &str,
    ) -> Result<TxHash, WalletError> {
        let sender = parse_full(from_secret)
            .map_err(|_| WalletError::InvalidKey("invalid sender secret key".into()))?;
        let recipient = parse_address(to_address)
            .map_err(|_| WalletError::InvalidAddress("invalid recipient public key".into()))?;
        let amount: Amount = amount.parse().map_err(|_| invalid_amount())?;
        if !amount.is_positive() {
            return Err(invalid_amount());
        }

        let source = self.load_account(&sender.address).await?;
        let mut envelope = TransactionBuilder::new(&source)
            .operation(Operation::Payment {
                source: None,
                destination: recipient.clone(),
                asset: Asset::Credit(self.asset.clone()),
                amount,
            })
            .build()?;
        sign_envelope(&mut envelope, self.network, &[&sender])?;

        let submitted = self.ledger.submit(&envelope).await?;
        info!(
            from = %sender.address,
            to = %recipient,
            %amount,
            hash = %submitted.hash,
            "transfer accepted"
        );
        Ok(submitted.hash)
    }

    async fn load_account(&self, address: &Address) -> Result<Account, WalletError> {
        self.ledger
            .fetch_account(address)
            .await
            .map_err(|err| match err {
                HorizonError::NotFound => WalletError::AccountNotFound(address.clone()),
                other => other.into(),
            })
    }
}

fn invalid_amount() -> WalletError {
    WalletError::InvalidAmount("invalid amount: must be a positive number".into())
}
