use thiserror::Error;

/// Outcome classes for ledger-node interaction.
///
/// `Unavailable` and `Rejected` demand different handling: an unavailable
/// node may be retried after re-reading account state, while a rejection
/// is the node's verdict on this exact envelope and resubmitting it
/// unchanged can only fail again.
#[derive(Debug, Error)]
pub enum HorizonError {
    /// The requested account does not exist on the ledger.
    #[error("account not found")]
    NotFound,

    /// The node could not be reached or did not answer sensibly.
    #[error("ledger node unavailable: {0}")]
    Unavailable(String),

    /// The node processed the request and refused it.
    #[error("rejected by ledger node: {detail}")]
    Rejected { detail: String },
}
