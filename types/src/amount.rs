//! Asset amounts with 7-digit fixed-point precision.
//!
//! Amounts are represented as a signed count of stroops (1 unit = 10^7 stroops)
//! to avoid floating-point errors. Parsing and display use the canonical
//! decimal string form the ledger node speaks.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// An asset amount in stroops.
///
/// One whole unit is 10^7 stroops; the node renders amounts with exactly
/// seven decimal places ("100" parses to the same value as "100.0000000").
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// Stroops per whole asset unit.
    pub const STROOPS_PER_UNIT: i64 = 10_000_000;

    /// Decimal places carried by the canonical string form.
    pub const DECIMALS: usize = 7;

    pub const fn from_stroops(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn stroops(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl FromStr for Amount {
    type Err = TypeError;

    /// Parse a non-negative decimal string with at most seven fractional
    /// digits. Signs, exponents and non-digit characters are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(TypeError::InvalidAmount("empty string".into()));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(TypeError::InvalidAmount(format!(
                "\"{s}\" is not an unsigned decimal"
            )));
        }
        if frac.len() > Self::DECIMALS {
            return Err(TypeError::InvalidAmount(format!(
                "more than {} decimal places",
                Self::DECIMALS
            )));
        }

        let whole_stroops = if whole.is_empty() {
            0i64
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|u| u.checked_mul(Self::STROOPS_PER_UNIT))
                .ok_or_else(|| TypeError::InvalidAmount(format!("\"{s}\" is out of range")))?
        };
        let frac_stroops = if frac.is_empty() {
            0i64
        } else {
            // "5" at one decimal place is 5_000_000 stroops.
            let digits = frac.parse::<i64>().map_err(|_| {
                TypeError::InvalidAmount(format!("\"{s}\" is out of range"))
            })?;
            digits * 10i64.pow((Self::DECIMALS - frac.len()) as u32)
        };

        whole_stroops
            .checked_add(frac_stroops)
            .map(Self)
            .ok_or_else(|| TypeError::InvalidAmount(format!("\"{s}\" is out of range")))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let mag = self.0.unsigned_abs();
        let unit = Self::STROOPS_PER_UNIT as u64;
        write!(f, "{}{}.{:07}", sign, mag / unit, mag % unit)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl serde::de::Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a decimal amount string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_units() {
        let amount: Amount = "100".parse().unwrap();
        assert_eq!(amount.stroops(), 100 * Amount::STROOPS_PER_UNIT);
    }

    #[test]
    fn parses_fractional_units() {
        let amount: Amount = "0.5".parse().unwrap();
        assert_eq!(amount.stroops(), 5_000_000);

        let amount: Amount = "12.0000001".parse().unwrap();
        assert_eq!(amount.stroops(), 120_000_001);
    }

    #[test]
    fn parses_bare_fraction_and_trailing_dot() {
        let amount: Amount = ".5".parse().unwrap();
        assert_eq!(amount.stroops(), 5_000_000);

        let amount: Amount = "5.".parse().unwrap();
        assert_eq!(amount.stroops(), 50_000_000);
    }

    #[test]
    fn rejects_signs_and_garbage() {
        assert!("-5".parse::<Amount>().is_err());
        assert!("+5".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("1e3".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
        assert!(".".parse::<Amount>().is_err());
        assert!("1 0".parse::<Amount>().is_err());
    }

    #[test]
    fn rejects_excess_precision_and_overflow() {
        assert!("0.00000001".parse::<Amount>().is_err());
        assert!("99999999999999999999".parse::<Amount>().is_err());
    }

    #[test]
    fn displays_canonical_seven_digits() {
        let amount: Amount = "100".parse().unwrap();
        assert_eq!(amount.to_string(), "100.0000000");

        let amount: Amount = "0.5".parse().unwrap();
        assert_eq!(amount.to_string(), "0.5000000");
    }

    #[test]
    fn serde_uses_the_string_form() {
        let amount: Amount = "42.25".parse().unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"42.2500000\"");

        let back: Amount = serde_json::from_str("\"42.25\"").unwrap();
        assert_eq!(back, amount);
    }
}
