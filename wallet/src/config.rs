//! Service configuration.

use lumen_types::{Amount, CreditAsset, Keypair, Network};

/// Native balance granted to a new wallet, covering the base reserve.
pub const DEFAULT_STARTING_BALANCE: Amount = Amount::from_stroops(5_000_000);

/// Designated-asset amount granted to a new wallet at creation.
pub const DEFAULT_FUNDING_AMOUNT: Amount = Amount::from_stroops(1_000_000_000);

/// Immutable settings for a [`WalletService`](crate::WalletService).
///
/// Built once at startup and moved into the service; nothing mutates it
/// afterwards, so request handlers share the service without locking.
pub struct ServiceConfig {
    /// Network whose passphrase binds every signature this service makes.
    pub network: Network,
    /// Funding account key material. Creation needs the full keypair;
    /// a watch-only address is rejected when the service is built.
    pub master: Keypair,
    /// The asset new wallets are set up to trust and receive.
    pub asset: CreditAsset,
    /// Native grant to a new wallet ("0.5" by default).
    pub starting_balance: Amount,
    /// Designated-asset grant to a new wallet ("100" by default).
    pub funding_amount: Amount,
}

impl ServiceConfig {
    /// Config with the default grant amounts.
    pub fn new(network: Network, master: Keypair, asset: CreditAsset) -> Self {
        Self {
            network,
            master,
            asset,
            starting_balance: DEFAULT_STARTING_BALANCE,
            funding_amount: DEFAULT_FUNDING_AMOUNT,
        }
    }
}
