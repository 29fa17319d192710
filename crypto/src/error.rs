//! Key parsing errors.

use thiserror::Error;

/// Error raised when parsing key material from its string form.
///
/// One kind per input class, whatever the underlying defect (bad prefix,
/// bad length, bad alphabet, bad checksum). Messages never echo the
/// input, which may be secret.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid secret seed")]
    InvalidSeed,

    #[error("invalid account address")]
    InvalidAddress,

    #[error("unrecognized key encoding")]
    UnrecognizedKey,
}
