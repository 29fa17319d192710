//! Async HTTP client for a Horizon-style ledger node.

use std::time::Duration;

use lumen_tx::TransactionEnvelope;
use lumen_types::{Account, Address, Network, TxHash};
use tracing::{debug, warn};

use crate::error::HorizonError;
use crate::resources::{AccountResource, Problem, SubmitResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A transaction the node has accepted into a ledger.
#[derive(Clone, Debug)]
pub struct SubmittedTx {
    pub hash: TxHash,
    pub ledger: u32,
}

/// Client for one ledger node.
///
/// Holds a connection pool internally and is cheap to clone; one instance
/// can serve any number of concurrent requests.
#[derive(Clone, Debug)]
pub struct HorizonClient {
    http: reqwest::Client,
    base_url: String,
}

impl HorizonClient {
    /// Creates a client for the node at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, HorizonError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| HorizonError::Unavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Creates a client for the given network's default node.
    pub fn for_network(network: Network) -> Result<Self, HorizonError> {
        Self::new(network.node_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the current state of an account: its sequence number and
    /// balance list as of the node's latest ledger.
    pub async fn fetch_account(&self, address: &Address) -> Result<Account, HorizonError> {
        let url = format!("{}/accounts/{}", self.base_url, address);
        debug!(%address, "fetching account");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(HorizonError::NotFound);
        }
        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }

        let resource: AccountResource = response.json().await.map_err(transport_error)?;
        resource.into_account()
    }

    /// Submits a signed envelope and waits for the node's verdict.
    ///
    /// An `Ok` return means the transaction made it into a ledger. A
    /// [`HorizonError::Rejected`] is final for this envelope; sequence
    /// number and signatures are checked by the node, so a stale snapshot
    /// surfaces here rather than at build time.
    pub async fn submit_transaction(
        &self,
        envelope: &TransactionEnvelope,
    ) -> Result<SubmittedTx, HorizonError> {
        let url = format!("{}/transactions", self.base_url);
        debug!(
            source = %envelope.tx.source,
            operations = envelope.tx.operations.len(),
            "submitting transaction"
        );

        let response = self
            .http
            .post(&url)
            .json(envelope)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }

        let accepted: SubmitResponse = response.json().await.map_err(transport_error)?;
        let hash = TxHash::from_hex(&accepted.hash).ok_or_else(|| {
            HorizonError::Unavailable("node returned a malformed transaction hash".into())
        })?;
        debug!(%hash, ledger = accepted.ledger, "transaction accepted");
        Ok(SubmittedTx {
            hash,
            ledger: accepted.ledger,
        })
    }
}

fn transport_error(err: reqwest::Error) -> HorizonError {
    HorizonError::Unavailable(format!("request failed: {err}"))
}

/// Triage for a non-2xx answer. Server-side trouble reads as the node
/// being unavailable; anything in the 4xx range is the node's verdict
/// on the request, with the problem body flattened into the detail.
async fn error_from_response(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> HorizonError {
    if status.is_server_error() {
        warn!(%status, "node returned a server error");
        return HorizonError::Unavailable(format!("node returned HTTP {status}"));
    }
    let detail = match response.json::<Problem>().await {
        Ok(problem) => problem.detail_text(),
        Err(_) => format!("node returned HTTP {status}"),
    };
    HorizonError::Rejected { detail }
}
