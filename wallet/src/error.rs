use lumen_horizon::HorizonError;
use lumen_tx::BuildError;
use lumen_types::Address;
use thiserror::Error;

/// Everything a wallet operation can fail with.
///
/// Callers branch on the kind, never on message text. The three
/// `Invalid*` kinds are caller-input faults raised before any network
/// traffic; the messages they carry are fixed phrases that never echo
/// the offending input, which may be secret.
#[derive(Debug, Error)]
pub enum WalletError {
    /// A caller-supplied secret key that does not parse.
    #[error("{0}")]
    InvalidKey(String),

    /// A caller-supplied account address that does not parse.
    #[error("{0}")]
    InvalidAddress(String),

    /// A caller-supplied amount that is not a positive decimal.
    #[error("{0}")]
    InvalidAmount(String),

    /// The account is absent from the ledger. A success shape for
    /// detail lookups, a hard error for transfers.
    #[error("account not found")]
    AccountNotFound(Address),

    /// The node cannot be reached or answered nonsense. Retriable, but
    /// only after re-reading account state.
    #[error("ledger node unavailable: {0}")]
    Unavailable(String),

    /// The node's final verdict on a submitted envelope. Resubmitting
    /// the same envelope cannot succeed; rebuild from a fresh snapshot.
    #[error("transaction failed: {detail}")]
    Rejected { detail: String },

    /// Local construction or configuration defect.
    #[error("{0}")]
    Build(String),
}

impl From<BuildError> for WalletError {
    fn from(err: BuildError) -> Self {
        Self::Build(format!("failed to build transaction: {err}"))
    }
}

impl From<HorizonError> for WalletError {
    fn from(err: HorizonError) -> Self {
        match err {
            // Account lookups translate 404 with address context before
            // reaching this conversion; a 404 anywhere else means the
            // node's API surface itself is broken.
            HorizonError::NotFound => Self::Unavailable("node endpoint missing".into()),
            HorizonError::Unavailable(detail) => Self::Unavailable(detail),
            HorizonError::Rejected { detail } => Self::Rejected { detail },
        }
    }
}
