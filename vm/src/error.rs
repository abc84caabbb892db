use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Errors that the encoder and the [`BoothMultiplier`](crate::emulator::booth::BoothMultiplier)
/// can throw.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoothError {
    /// The operand text was empty.
    #[error("the operand can not be empty")]
    EmptyOperand,

    /// The operand text does not describe a number.
    #[error("the operand \"{0}\" is not a number")]
    NotANumber(String),

    /// The operand text describes a number with a fractional part.
    #[error("the operand \"{0}\" is not an integer")]
    NotAnInteger(String),

    /// The bit string is empty or holds characters other than `0` and `1`.
    #[error("\"{0}\" is not a bit string")]
    InvalidBitString(String),

    /// The value does not fit the two's-complement range of the width.
    #[error(
        "the integer {value} can not be contained in {} bits ({bit_width} bits total with 1 signed bit)",
        .bit_width.saturating_sub(1)
    )]
    RangeOverflow { value: i128, bit_width: u32 },

    /// The operand text is an integer beyond 128 bits.
    #[error("the integer \"{0}\" can not be contained in 127 bits (128 bits total with 1 signed bit)")]
    IntegerTooLarge(String),

    /// The width is outside what the operation supports.
    #[error("unsupported bit width {bit_width}, expected 1..={max}")]
    UnsupportedBitWidth { bit_width: u32, max: u32 },
}

/// Coarse classification of a [`BoothError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum ErrorKind {
    InputFormat,
    RangeOverflow,
    UnsupportedBitWidth,
}

impl BoothError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyOperand
            | Self::NotANumber(_)
            | Self::NotAnInteger(_)
            | Self::InvalidBitString(_) => ErrorKind::InputFormat,
            Self::RangeOverflow { .. } | Self::IntegerTooLarge(_) => ErrorKind::RangeOverflow,
            Self::UnsupportedBitWidth { .. } => ErrorKind::UnsupportedBitWidth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_kinds() {
        let errors = [
            BoothError::EmptyOperand,
            BoothError::RangeOverflow {
                value: 8,
                bit_width: 4,
            },
            BoothError::UnsupportedBitWidth {
                bit_width: 0,
                max: 63,
            },
        ];
        let kinds: Vec<_> = errors.iter().map(BoothError::kind).collect();
        assert_eq!(kinds, ErrorKind::iter().collect::<Vec<_>>());
        assert_eq!(
            BoothError::NotAnInteger("1.5".into()).kind(),
            ErrorKind::InputFormat
        );
    }

    #[test]
    fn test_range_message() {
        let err = BoothError::RangeOverflow {
            value: 8,
            bit_width: 4,
        };
        assert_eq!(
            err.to_string(),
            "the integer 8 can not be contained in 3 bits (4 bits total with 1 signed bit)"
        );
    }

    #[test]
    fn test_range_message_degenerate_width() {
        let err: BoothError =
            serde_json::from_str(r#"{"RangeOverflow":{"value":1,"bit_width":0}}"#).unwrap();
        assert_eq!(
            err.to_string(),
            "the integer 1 can not be contained in 0 bits (0 bits total with 1 signed bit)"
        );
    }

    #[test]
    fn test_oversized_integer_message() {
        let err = BoothError::IntegerTooLarge("1e60".to_string());
        assert_eq!(err.kind(), ErrorKind::RangeOverflow);
        assert_eq!(
            err.to_string(),
            "the integer \"1e60\" can not be contained in 127 bits (128 bits total with 1 signed bit)"
        );
    }
}
