//! Ed25519 message signing and verification.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};

use lumen_types::{SecretSeed, Signature};

/// Sign a message with a secret seed, returning the signature.
pub fn sign_message(message: &[u8], seed: &SecretSeed) -> Signature {
    let signing_key = SigningKey::from_bytes(seed.as_bytes());
    Signature(signing_key.sign(message).to_bytes())
}

/// Verify a signature against a message and raw public key bytes.
///
/// Returns `true` if the signature is valid, `false` otherwise.
/// Non-canonical signatures fail verification.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &[u8; 32]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(signature.as_bytes());
    verifying_key.verify(message, &dalek_sig).is_ok()
}
