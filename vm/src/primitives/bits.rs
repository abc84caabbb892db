use crate::{
    error::BoothError,
    primitives::consts::{ONE_BIT, ZERO_BIT},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A fixed-width two's-complement bit string, most significant bit first.
///
/// Always non-empty and made of `0` and `1` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString(String);

impl BitString {
    /// Wrap text produced by the encoder.
    pub(crate) fn from_raw(bits: String) -> Self {
        debug_assert!(is_bit_text(&bits), "encoder produced {bits:?}");
        Self(bits)
    }

    /// Number of bits in the string.
    pub fn width(&self) -> u32 {
        self.0.len() as u32
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the sign bit is set.
    pub fn is_negative(&self) -> bool {
        self.0.starts_with(ONE_BIT)
    }

    /// The last `count` bits, or the whole string when it is shorter.
    pub fn trailing(&self, count: usize) -> &str {
        &self.0[self.0.len().saturating_sub(count)..]
    }

    /// Split into the leading `mid` bits and the rest.
    pub fn split_at(&self, mid: usize) -> (&str, &str) {
        self.0.split_at(mid.min(self.0.len()))
    }
}

fn is_bit_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == ZERO_BIT || c == ONE_BIT)
}

impl FromStr for BitString {
    type Err = BoothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s.trim();
        if !is_bit_text(bits) {
            return Err(BoothError::InvalidBitString(s.to_string()));
        }
        Ok(Self(bits.to_string()))
    }
}

impl TryFrom<String> for BitString {
    type Error = BoothError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.0
    }
}

impl AsRef<str> for BitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bits() {
        let bits: BitString = " 0110 ".parse().unwrap();
        assert_eq!(bits.as_str(), "0110");
        assert_eq!(bits.width(), 4);
        assert!(!bits.is_negative());
        assert_eq!(bits.trailing(2), "10");
        assert_eq!(bits.trailing(9), "0110");
        assert_eq!(bits.split_at(1), ("0", "110"));
    }

    #[test]
    fn test_reject_non_bits() {
        for text in ["", "   ", "012", "1_0", "0b10"] {
            let err = text.parse::<BitString>().unwrap_err();
            assert_eq!(err, BoothError::InvalidBitString(text.to_string()));
        }
    }

    #[test]
    fn test_serde_as_string() {
        let bits: BitString = "1000".parse().unwrap();
        let json = serde_json::to_string(&bits).unwrap();
        assert_eq!(json, "\"1000\"");
        assert_eq!(serde_json::from_str::<BitString>(&json).unwrap(), bits);
        assert!(serde_json::from_str::<BitString>("\"10a\"").is_err());
    }
}
