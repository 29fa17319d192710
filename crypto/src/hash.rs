//! SHA-256 hashing for transactions and network identifiers.

use sha2::{Digest, Sha256};

use lumen_types::Network;

/// Compute the SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// The 32-byte network identifier: the hash of the network passphrase.
///
/// Mixed into every transaction hash, so a signature made for one network
/// verifies on no other.
pub fn network_id(network: Network) -> [u8; 32] {
    sha256(network.passphrase().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vectors() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_multi_equivalent() {
        assert_eq!(sha256(b"helloworld"), sha256_multi(&[b"hello", b"world"]));
        assert_eq!(sha256(b""), sha256_multi(&[]));
    }

    #[test]
    fn network_ids_differ_per_network() {
        assert_ne!(network_id(Network::Public), network_id(Network::Testnet));
    }
}
