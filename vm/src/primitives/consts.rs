/*
For bit strings
 */

/// The character for a cleared bit.
pub const ZERO_BIT: char = '0';

/// The character for a set bit.
pub const ONE_BIT: char = '1';

/// The widest value the encoder handles, in bits.
pub const MAX_ENCODE_BIT_WIDTH: u32 = i128::BITS;

/*
For the multiplier
 */

/// The widest operand the multiplier handles, in bits.
///
/// The product register is `2 * width + 2` bits wide and has to fit an `i128`.
pub const MAX_OPERAND_BIT_WIDTH: u32 = (i128::BITS - 2) / 2;

/// Extra bits of the product register beyond the two operand halves: one accumulator
/// extension bit and the guard bit.
pub const REGISTER_EXTRA_BITS: u32 = 2;

/// Number of trailing register bits inspected on every iteration.
pub const TRAILING_BITS: usize = 2;

/*
For options
 */

/// Operand width used when neither the caller nor the environment picks one.
pub const DEFAULT_BIT_WIDTH: u32 = 8;

/// Environment variable overriding the default operand width.
pub const BIT_WIDTH_ENV: &str = "BOOTH_BIT_WIDTH";

/// Product register width for the given operand width.
pub const fn register_bit_width(bit_width: u32) -> u32 {
    2 * bit_width + REGISTER_EXTRA_BITS
}

/// Result width for the given operand width.
pub const fn product_bit_width(bit_width: u32) -> u32 {
    2 * bit_width
}

/// Largest value representable in `bit_width` bits of two's complement.
///
/// `bit_width` must be in `1..=128`.
pub const fn max_signed(bit_width: u32) -> i128 {
    i128::MAX >> (i128::BITS - bit_width)
}

/// Smallest value representable in `bit_width` bits of two's complement.
///
/// `bit_width` must be in `1..=128`.
pub const fn min_signed(bit_width: u32) -> i128 {
    i128::MIN >> (i128::BITS - bit_width)
}
