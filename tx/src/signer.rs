//! Decorated-signature composition for transaction envelopes.

use lumen_crypto::{public_from_seed, sign_message};
use lumen_types::{FullKeypair, Network};

use crate::envelope::{DecoratedSignature, TransactionEnvelope};
use crate::error::BuildError;

/// Append one decorated signature per keypair to `envelope`, each made
/// over the envelope hash bound to `network`.
///
/// Multi-party envelopes (account creation needs the funder and the new
/// account) call this once with every required signer. Signing never
/// checks network fit: an envelope signed under the wrong network is
/// locally well-formed and only fails at submission.
pub fn sign_envelope(
    envelope: &mut TransactionEnvelope,
    network: Network,
    signers: &[&FullKeypair],
) -> Result<(), BuildError> {
    let hash = envelope.hash(network)?;
    for keypair in signers {
        let public = public_from_seed(&keypair.seed);
        let mut hint = [0u8; 4];
        hint.copy_from_slice(&public[28..]);
        envelope.signatures.push(DecoratedSignature {
            hint,
            signature: sign_message(hash.as_bytes(), &keypair.seed),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TransactionBuilder;
    use crate::operation::Operation;
    use lumen_crypto::{decode_account, generate_keypair, verify_signature};
    use lumen_types::{Account, Asset, Timestamp};

    fn envelope_for(source: &lumen_types::FullKeypair) -> TransactionEnvelope {
        let account = Account {
            address: source.address.clone(),
            sequence: 10,
            balances: Vec::new(),
        };
        TransactionBuilder::new(&account)
            .operation(Operation::Payment {
                source: None,
                destination: generate_keypair().address,
                asset: Asset::Native,
                amount: "3".parse().unwrap(),
            })
            .build_at(Timestamp::new(500))
            .unwrap()
    }

    #[test]
    fn one_signature_per_signer_in_order() {
        let funder = generate_keypair();
        let fresh = generate_keypair();
        let mut envelope = envelope_for(&funder);

        sign_envelope(&mut envelope, Network::Testnet, &[&funder, &fresh]).unwrap();
        assert_eq!(envelope.signatures.len(), 2);

        let funder_public = decode_account(funder.address.as_str()).unwrap();
        let fresh_public = decode_account(fresh.address.as_str()).unwrap();
        assert_eq!(envelope.signatures[0].hint, funder_public[28..]);
        assert_eq!(envelope.signatures[1].hint, fresh_public[28..]);
    }

    #[test]
    fn signatures_verify_against_the_envelope_hash() {
        let signer = generate_keypair();
        let mut envelope = envelope_for(&signer);
        sign_envelope(&mut envelope, Network::Testnet, &[&signer]).unwrap();

        let hash = envelope.hash(Network::Testnet).unwrap();
        let public = decode_account(signer.address.as_str()).unwrap();
        assert!(verify_signature(
            hash.as_bytes(),
            &envelope.signatures[0].signature,
            &public
        ));
    }

    #[test]
    fn wrong_network_signature_does_not_verify_on_target() {
        let signer = generate_keypair();
        let mut envelope = envelope_for(&signer);
        sign_envelope(&mut envelope, Network::Public, &[&signer]).unwrap();

        let testnet_hash = envelope.hash(Network::Testnet).unwrap();
        let public = decode_account(signer.address.as_str()).unwrap();
        assert!(!verify_signature(
            testnet_hash.as_bytes(),
            &envelope.signatures[0].signature,
            &public
        ));
    }

    #[test]
    fn signing_accumulates_across_calls() {
        let funder = generate_keypair();
        let fresh = generate_keypair();
        let mut envelope = envelope_for(&funder);

        sign_envelope(&mut envelope, Network::Testnet, &[&funder]).unwrap();
        sign_envelope(&mut envelope, Network::Testnet, &[&fresh]).unwrap();
        assert_eq!(envelope.signatures.len(), 2);
    }
}
