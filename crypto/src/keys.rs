//! Ed25519 key generation and strkey parsing.

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;

use lumen_types::{Address, FullKeypair, Keypair, SecretSeed};

use crate::error::KeyError;
use crate::strkey;

/// Generate a new Ed25519 keypair from a secure random source.
pub fn generate_keypair() -> FullKeypair {
    keypair_from_signing(SigningKey::generate(&mut OsRng))
}

/// Derive a keypair from 32 raw seed bytes (deterministic).
pub fn keypair_from_seed_bytes(seed: &[u8; 32]) -> FullKeypair {
    keypair_from_signing(SigningKey::from_bytes(seed))
}

/// Derive the raw public key bytes from a secret seed.
pub fn public_from_seed(seed: &SecretSeed) -> [u8; 32] {
    SigningKey::from_bytes(seed.as_bytes())
        .verifying_key()
        .to_bytes()
}

/// Parse an `S…` secret string into a full keypair.
///
/// Any defect in the string maps to `KeyError::InvalidSeed`; on-chain
/// existence of the derived account is not checked.
pub fn parse_full(secret: &str) -> Result<FullKeypair, KeyError> {
    let seed = strkey::decode_seed(secret).ok_or(KeyError::InvalidSeed)?;
    Ok(keypair_from_seed_bytes(&seed))
}

/// Parse a `G…` account address, verifying encoding and checksum.
///
/// On-chain existence is not checked; a well-formed address for an
/// account that was never created still parses.
pub fn parse_address(address: &str) -> Result<Address, KeyError> {
    let key = strkey::decode_account(address).ok_or(KeyError::InvalidAddress)?;
    Ok(address_from_key(&key))
}

/// Parse either key form, graded by what the string can do: an `S…`
/// secret yields signing-capable material, a `G…` address does not.
pub fn parse_keypair(input: &str) -> Result<Keypair, KeyError> {
    match input.as_bytes().first() {
        Some(b'S') => parse_full(input).map(Keypair::Full),
        Some(b'G') => parse_address(input).map(Keypair::Address),
        _ => Err(KeyError::UnrecognizedKey),
    }
}

fn keypair_from_signing(signing_key: SigningKey) -> FullKeypair {
    let public = signing_key.verifying_key().to_bytes();
    FullKeypair {
        address: address_from_key(&public),
        seed: SecretSeed(signing_key.to_bytes()),
    }
}

fn address_from_key(public: &[u8; 32]) -> Address {
    Address::new(strkey::encode_account(public))
        .expect("strkey encoding is always a well-formed address")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_distinct_keypairs() {
        let a = generate_keypair();
        let b = generate_keypair();
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn secret_reparses_to_the_same_address() {
        let generated = generate_keypair();
        let secret = strkey::encode_seed(generated.seed.as_bytes());
        let parsed = parse_full(&secret).unwrap();
        assert_eq!(parsed.address, generated.address);
    }

    #[test]
    fn keypair_from_seed_bytes_is_deterministic() {
        let a = keypair_from_seed_bytes(&[42u8; 32]);
        let b = keypair_from_seed_bytes(&[42u8; 32]);
        assert_eq!(a.address, b.address);
        assert_eq!(a.seed.as_bytes(), b.seed.as_bytes());
    }

    #[test]
    fn parse_address_roundtrip() {
        let keypair = generate_keypair();
        let parsed = parse_address(keypair.address.as_str()).unwrap();
        assert_eq!(parsed, keypair.address);
    }

    #[test]
    fn parse_full_rejects_malformed_input() {
        assert_eq!(parse_full(""), Err(KeyError::InvalidSeed));
        assert_eq!(parse_full("not a seed"), Err(KeyError::InvalidSeed));
        // An address is not a seed, even though it decodes as base32.
        let keypair = generate_keypair();
        assert_eq!(
            parse_full(keypair.address.as_str()),
            Err(KeyError::InvalidSeed)
        );
    }

    #[test]
    fn parse_full_rejects_tampered_checksum() {
        let keypair = generate_keypair();
        let mut secret = strkey::encode_seed(keypair.seed.as_bytes());
        let last = secret.pop().unwrap();
        let replacement = if last == 'A' { 'B' } else { 'A' };
        secret.push(replacement);
        assert_eq!(parse_full(&secret), Err(KeyError::InvalidSeed));
    }

    #[test]
    fn parse_address_rejects_malformed_input() {
        assert_eq!(parse_address("GABC"), Err(KeyError::InvalidAddress));
        let keypair = generate_keypair();
        let truncated = &keypair.address.as_str()[..55];
        assert_eq!(parse_address(truncated), Err(KeyError::InvalidAddress));
    }

    #[test]
    fn parse_keypair_grades_by_prefix() {
        let keypair = generate_keypair();
        let secret = strkey::encode_seed(keypair.seed.as_bytes());

        let full = parse_keypair(&secret).unwrap();
        assert!(full.full().is_some());
        assert_eq!(full.address(), &keypair.address);

        let address_only = parse_keypair(keypair.address.as_str()).unwrap();
        assert!(address_only.full().is_none());
        assert_eq!(address_only.address(), &keypair.address);

        assert_eq!(parse_keypair("XYZ"), Err(KeyError::UnrecognizedKey));
    }
}
