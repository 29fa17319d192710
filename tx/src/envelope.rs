//! Transaction envelope: the unit of submission to the ledger.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use lumen_crypto::{network_id, sha256};
use lumen_types::{Address, Network, Signature, Timestamp, TxHash};

use crate::error::BuildError;
use crate::operation::Operation;

/// Domain-separation tag hashed between the network id and the
/// transaction bytes.
const ENVELOPE_TYPE_TX: [u8; 4] = [0, 0, 0, 2];

/// Submission validity window, inclusive at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBounds {
    pub min_time: Timestamp,
    pub max_time: Timestamp,
}

/// A signature plus a hint naming the key that produced it: the last four
/// bytes of the signer's public key. The hint lets a verifier pick the
/// right key without trying all of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoratedSignature {
    pub hint: [u8; 4],
    pub signature: Signature,
}

impl Serialize for DecoratedSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DecoratedSignature", 2)?;
        state.serialize_field("hint", &hex::encode(self.hint))?;
        state.serialize_field("signature", &hex::encode(self.signature.as_bytes()))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for DecoratedSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            hint: String,
            signature: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        let hint: [u8; 4] = hex::decode(&raw.hint)
            .ok()
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or_else(|| serde::de::Error::custom("hint must be 4 hex-encoded bytes"))?;
        let signature: [u8; 64] = hex::decode(&raw.signature)
            .ok()
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or_else(|| serde::de::Error::custom("signature must be 64 hex-encoded bytes"))?;
        Ok(Self {
            hint,
            signature: Signature(signature),
        })
    }
}

/// The unsigned transaction: everything a signature covers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub source: Address,
    pub sequence: i64,
    pub fee: u32,
    pub operations: Vec<Operation>,
    pub time_bounds: TimeBounds,
}

/// A transaction plus the signatures authorizing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    pub tx: Transaction,
    pub signatures: Vec<DecoratedSignature>,
}

impl TransactionEnvelope {
    /// Bytes every signature covers: network id, envelope-type tag, then
    /// the canonical encoding of the unsigned transaction. Signatures made
    /// under one network verify on no other.
    pub fn signature_base(&self, network: Network) -> Result<Vec<u8>, BuildError> {
        let tx_bytes =
            serde_json::to_vec(&self.tx).map_err(|e| BuildError::Encoding(e.to_string()))?;
        let mut base = Vec::with_capacity(36 + tx_bytes.len());
        base.extend_from_slice(&network_id(network));
        base.extend_from_slice(&ENVELOPE_TYPE_TX);
        base.extend_from_slice(&tx_bytes);
        Ok(base)
    }

    /// The hash signatures are made over, bound to `network`.
    pub fn hash(&self, network: Network) -> Result<TxHash, BuildError> {
        Ok(TxHash::new(sha256(&self.signature_base(network)?)))
    }
}
