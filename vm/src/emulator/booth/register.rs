use crate::{
    encoder::encode, error::BoothError, primitives::bits::BitString,
    primitives::consts::register_bit_width,
};

/// The running product of one multiplication.
///
/// Laid out as `accumulator | multiplier | guard`, where the accumulator is one bit wider than
/// an operand. The value is kept as an exact signed integer, so adds and subtracts never wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProductRegister {
    value: i128,
    bit_width: u32,
}

impl ProductRegister {
    /// Zero accumulator, the multiplier's own bits and a cleared guard bit.
    pub(crate) fn new(multiplier: i128, bit_width: u32) -> Self {
        let mask = u128::MAX >> (u128::BITS - bit_width);
        let multiplier_bits = (multiplier as u128 & mask) as i128;
        Self {
            value: multiplier_bits << 1,
            bit_width,
        }
    }

    /// The two least significant bits, guard bit included.
    pub(crate) fn trailing_bits(&self) -> u8 {
        (self.value & 0b11) as u8
    }

    /// Add the multiplicand into the accumulator.
    pub(crate) fn add(&mut self, multiplicand: i128) {
        self.value += self.align(multiplicand);
    }

    /// Subtract the multiplicand from the accumulator.
    pub(crate) fn sub(&mut self, multiplicand: i128) {
        self.value -= self.align(multiplicand);
    }

    /// Arithmetic shift right by one.
    pub(crate) fn shift_right(&mut self) {
        self.value >>= 1;
    }

    pub(crate) fn snapshot(&self) -> Result<BitString, BoothError> {
        encode(self.value, register_bit_width(self.bit_width))
    }

    /// Drop the guard bit, leaving the `2 * bit_width`-bit product.
    pub(crate) fn into_product(self) -> i128 {
        self.value >> 1
    }

    fn align(&self, multiplicand: i128) -> i128 {
        multiplicand << (self.bit_width + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let register = ProductRegister::new(2, 4);
        assert_eq!(register.snapshot().unwrap().as_str(), "0000000100");

        // A negative multiplier keeps a zero accumulator.
        let register = ProductRegister::new(-3, 4);
        assert_eq!(register.snapshot().unwrap().as_str(), "0000011010");
        assert_eq!(register.trailing_bits(), 0b10);
    }

    #[test]
    fn test_add_sub_shift() {
        let mut register = ProductRegister::new(2, 4);
        register.shift_right();
        assert_eq!(register.trailing_bits(), 0b10);

        register.sub(3);
        assert_eq!(register.snapshot().unwrap().as_str(), "1110100010");
        register.shift_right();
        assert_eq!(register.snapshot().unwrap().as_str(), "1111010001");

        register.add(3);
        assert_eq!(register.snapshot().unwrap().as_str(), "0000110001");
    }

    #[test]
    fn test_most_negative_multiplicand_fits() {
        // 0 - (-8) needs the accumulator's extension bit.
        let mut register = ProductRegister::new(1, 4);
        register.sub(-8);
        assert_eq!(register.snapshot().unwrap().as_str(), "0100000010");
    }
}
