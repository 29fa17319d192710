//! Asset identifiers: the native token and issued credit assets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::Address;
use crate::error::TypeError;

/// Code of an issued asset, 1 to 12 alphanumeric characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetCode(String);

impl AssetCode {
    pub const MAX_LEN: usize = 12;

    pub fn new(raw: impl Into<String>) -> Result<Self, TypeError> {
        let s = raw.into();
        if s.is_empty() || s.len() > Self::MAX_LEN {
            return Err(TypeError::InvalidAssetCode(format!(
                "expected 1 to {} characters, got {}",
                Self::MAX_LEN,
                s.len()
            )));
        }
        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(TypeError::InvalidAssetCode(
                "contains a non-alphanumeric character".into(),
            ));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An issued asset, identified by its code and issuing account.
///
/// Holding one requires a trustline from the holder to the issuer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreditAsset {
    pub code: AssetCode,
    pub issuer: Address,
}

/// Any asset a balance can be denominated in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    /// The ledger's built-in token.
    Native,
    /// An asset issued by an account.
    Credit(CreditAsset),
}

impl Asset {
    /// The node's wire name for this asset class.
    pub fn type_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Credit(credit) if credit.code.as_str().len() <= 4 => "credit_alphanum4",
            Self::Credit(_) => "credit_alphanum12",
        }
    }
}

impl From<CreditAsset> for Asset {
    fn from(credit: CreditAsset) -> Self {
        Self::Credit(credit)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Credit(credit) => write!(f, "{}:{}", credit.code.as_str(), credit.issuer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> Address {
        Address::new("GBBD47IF6LWK7P7MDEVSCWR7DPUWV3NY3DTQEVFL4NAT4AQH3ZLLFLA5").unwrap()
    }

    #[test]
    fn code_length_bounds() {
        assert!(AssetCode::new("USDC").is_ok());
        assert!(AssetCode::new("A").is_ok());
        assert!(AssetCode::new("TWELVECHARSX").is_ok());
        assert!(AssetCode::new("").is_err());
        assert!(AssetCode::new("THIRTEENCHARS").is_err());
        assert!(AssetCode::new("US-D").is_err());
    }

    #[test]
    fn type_str_tracks_code_length() {
        let short = Asset::Credit(CreditAsset {
            code: AssetCode::new("USDC").unwrap(),
            issuer: issuer(),
        });
        let long = Asset::Credit(CreditAsset {
            code: AssetCode::new("LONGCODE1").unwrap(),
            issuer: issuer(),
        });
        assert_eq!(Asset::Native.type_str(), "native");
        assert_eq!(short.type_str(), "credit_alphanum4");
        assert_eq!(long.type_str(), "credit_alphanum12");
    }
}
