//! The seam between wallet orchestration and the ledger node.

use std::future::Future;

use lumen_horizon::{HorizonClient, HorizonError, SubmittedTx};
use lumen_tx::TransactionEnvelope;
use lumen_types::{Account, Address};

/// Read/write access to a ledger node.
///
/// [`WalletService`](crate::WalletService) talks to the ledger only
/// through this trait. Production wires in [`HorizonClient`]; tests wire
/// in the deterministic double from `lumen-nullables`.
pub trait Ledger: Send + Sync {
    /// Current state of an account, or [`HorizonError::NotFound`].
    fn fetch_account(
        &self,
        address: &Address,
    ) -> impl Future<Output = Result<Account, HorizonError>> + Send;

    /// Submits a signed envelope for inclusion in a ledger.
    fn submit(
        &self,
        envelope: &TransactionEnvelope,
    ) -> impl Future<Output = Result<SubmittedTx, HorizonError>> + Send;
}

impl Ledger for HorizonClient {
    async fn fetch_account(&self, address: &Address) -> Result<Account, HorizonError> {
        HorizonClient::fetch_account(self, address).await
    }

    async fn submit(&self, envelope: &TransactionEnvelope) -> Result<SubmittedTx, HorizonError> {
        self.submit_transaction(envelope).await
    }
}

/// Shared references forward, so a caller can keep a handle on a ledger
/// it lends to a service.
impl<L: Ledger> Ledger for &L {
    async fn fetch_account(&self, address: &Address) -> Result<Account, HorizonError> {
        (**self).fetch_account(address).await
    }

    async fn submit(&self, envelope: &TransactionEnvelope) -> Result<SubmittedTx, HorizonError> {
        (**self).submit(envelope).await
    }
}

impl<L: Ledger> Ledger for std::sync::Arc<L> {
    async fn fetch_account(&self, address: &Address) -> Result<Account, HorizonError> {
        (**self).fetch_account(address).await
    }

    async fn submit(&self, envelope: &TransactionEnvelope) -> Result<SubmittedTx, HorizonError> {
        (**self).submit(envelope).await
    }
}
