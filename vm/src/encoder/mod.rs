//! Conversion between signed integers and fixed-width two's-complement bit strings.
//!
//! Every range check in the crate goes through [`encode`]; the multiplier never formats bits on
//! its own.

use crate::{
    error::BoothError,
    primitives::{
        bits::BitString,
        consts::{max_signed, min_signed, MAX_ENCODE_BIT_WIDTH},
    },
};

/// Fail unless `bit_width` is in `1..=max`.
pub fn check_bit_width(bit_width: u32, max: u32) -> Result<(), BoothError> {
    if bit_width == 0 || bit_width > max {
        return Err(BoothError::UnsupportedBitWidth { bit_width, max });
    }
    Ok(())
}

/// Fail unless `value` is representable in `bit_width` bits of two's complement.
pub fn check_range(value: i128, bit_width: u32) -> Result<(), BoothError> {
    check_bit_width(bit_width, MAX_ENCODE_BIT_WIDTH)?;
    if value > max_signed(bit_width) || value < min_signed(bit_width) {
        return Err(BoothError::RangeOverflow { value, bit_width });
    }
    Ok(())
}

/// The low `bit_width` bits set.
fn width_mask(bit_width: u32) -> u128 {
    u128::MAX >> (u128::BITS - bit_width)
}

/// Encode `value` as a `bit_width`-bit two's-complement string.
pub fn encode(value: i128, bit_width: u32) -> Result<BitString, BoothError> {
    check_range(value, bit_width)?;

    // `value as u128` is `value mod 2^128`; masking reduces it to `value mod 2^bit_width`.
    let residue = (value as u128) & width_mask(bit_width);
    Ok(BitString::from_raw(format!(
        "{residue:0width$b}",
        width = bit_width as usize
    )))
}

/// Decode a two's-complement bit string back into its signed value.
pub fn decode(bits: &BitString) -> Result<i128, BoothError> {
    let bit_width = bits.width();
    check_bit_width(bit_width, MAX_ENCODE_BIT_WIDTH)?;

    let unsigned = u128::from_str_radix(bits.as_str(), 2)
        .map_err(|_| BoothError::InvalidBitString(bits.to_string()))?;

    // Moving the sign bit to the top and shifting back arithmetically subtracts `2^bit_width`
    // exactly when the leading bit is set.
    let shift = u128::BITS - bit_width;
    Ok(((unsigned << shift) as i128) >> shift)
}

/// Parse and decode a bit string given as text.
pub fn decode_str(text: &str) -> Result<i128, BoothError> {
    decode(&text.parse()?)
}

/// Parse a decimal operand.
///
/// Surrounding whitespace is ignored. Integral numbers written in floating point notation
/// (`"2.0"`, `"1e3"`) are accepted, fractional and infinite ones are not.
pub fn parse_operand(text: &str) -> Result<i128, BoothError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BoothError::EmptyOperand);
    }
    if let Ok(value) = trimmed.parse::<i128>() {
        return Ok(value);
    }

    let number = match trimmed.parse::<f64>() {
        Ok(number) if !number.is_nan() => number,
        _ => return Err(BoothError::NotANumber(trimmed.to_string())),
    };
    if !number.is_finite() || number.fract() != 0.0 {
        return Err(BoothError::NotAnInteger(trimmed.to_string()));
    }

    // `2^127` is exactly representable as `f64`, so this bound is exact and the cast below
    // never saturates.
    let limit = 2f64.powi(MAX_ENCODE_BIT_WIDTH as i32 - 1);
    if number >= limit || number < -limit {
        return Err(BoothError::IntegerTooLarge(trimmed.to_string()));
    }
    Ok(number as i128)
}

/// Parse a decimal operand and encode it at `bit_width` bits.
pub fn encode_text(text: &str, bit_width: u32) -> Result<BitString, BoothError> {
    encode(parse_operand(text)?, bit_width)
}
