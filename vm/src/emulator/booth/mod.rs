//! Booth's algorithm over fixed-width two's-complement operands.

mod register;
pub mod step;
pub mod trace;

pub use step::{Operation, StepRecord};
pub use trace::BoothTrace;

use crate::{
    emulator::opts::BoothOpts,
    encoder::{encode, parse_operand},
    error::BoothError,
    primitives::bits::BitString,
};
use register::ProductRegister;
use tracing::{debug, instrument};

/// Runs Booth's algorithm at a fixed operand width.
///
/// Holds no state between calls; every multiplication owns its own register and trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoothMultiplier {
    opts: BoothOpts,
}

impl BoothMultiplier {
    pub fn new(opts: BoothOpts) -> Self {
        Self { opts }
    }

    pub fn opts(&self) -> &BoothOpts {
        &self.opts
    }

    pub fn bit_width(&self) -> u32 {
        self.opts.bit_width
    }

    /// Multiply two signed operands, recording every step.
    ///
    /// Fails without a partial trace if the width is unsupported or either operand does not fit
    /// it.
    #[instrument(name = "booth_multiply", level = "debug", skip(self), fields(bit_width = self.opts.bit_width))]
    pub fn multiply(&self, multiplicand: i128, multiplier: i128) -> Result<BoothTrace, BoothError> {
        self.opts.validate()?;
        let bit_width = self.opts.bit_width;

        let multiplicand_bits = encode(multiplicand, bit_width)?;
        let multiplier_bits = encode(multiplier, bit_width)?;

        let mut register = ProductRegister::new(multiplier, bit_width);
        let mut steps = Vec::with_capacity(1 + 2 * bit_width as usize);
        let mut emit = |iteration: u32,
                        continuation: bool,
                        operation: Operation,
                        register: &ProductRegister| {
            let product_bits = register.snapshot()?;
            debug!(
                "iteration {:>2} {:<4} product {}",
                iteration, operation, product_bits
            );
            steps.push(StepRecord {
                iteration,
                continuation,
                operation,
                multiplicand_bits: multiplicand_bits.clone(),
                product_bits,
            });
            Ok::<_, BoothError>(())
        };

        emit(0, false, Operation::Init, &register)?;

        for iteration in 1..=bit_width {
            let continuation = match Operation::from_trailing_bits(register.trailing_bits()) {
                Some(Operation::Sub) => {
                    register.sub(multiplicand);
                    emit(iteration, false, Operation::Sub, &register)?;
                    true
                }
                Some(Operation::Add) => {
                    register.add(multiplicand);
                    emit(iteration, false, Operation::Add, &register)?;
                    true
                }
                _ => false,
            };

            register.shift_right();
            emit(iteration, continuation, Operation::Asr, &register)?;
        }

        let product = register.into_product();
        debug_assert_eq!(product, multiplicand * multiplier);
        let result_bits = encode(product, self.opts.product_bit_width())?;
        debug!("result {} = {}", result_bits, product);

        Ok(BoothTrace {
            bit_width,
            multiplicand,
            multiplier,
            multiplicand_bits,
            multiplier_bits,
            steps,
            result_bits,
        })
    }

    /// Parse both operands from text, then [`multiply`](Self::multiply).
    pub fn multiply_text(
        &self,
        multiplicand: &str,
        multiplier: &str,
    ) -> Result<BoothTrace, BoothError> {
        let multiplicand = parse_operand(multiplicand)?;
        let multiplier = parse_operand(multiplier)?;
        self.multiply(multiplicand, multiplier)
    }

    /// The product of two operands as a `2 * bit_width`-bit string, without running the
    /// algorithm.
    pub fn expected_product(
        &self,
        multiplicand: i128,
        multiplier: i128,
    ) -> Result<BitString, BoothError> {
        self.opts.validate()?;
        encode(multiplicand, self.opts.bit_width)?;
        encode(multiplier, self.opts.bit_width)?;
        encode(multiplicand * multiplier, self.opts.product_bit_width())
    }
}

/// Multiply `multiplicand` by `multiplier` at `bit_width` bits.
pub fn multiply(
    multiplicand: i128,
    multiplier: i128,
    bit_width: u32,
) -> Result<BoothTrace, BoothError> {
    BoothMultiplier::new(BoothOpts::new(bit_width)?).multiply(multiplicand, multiplier)
}

/// Multiply two operands given as decimal text at `bit_width` bits.
pub fn multiply_text(
    multiplicand: &str,
    multiplier: &str,
    bit_width: u32,
) -> Result<BoothTrace, BoothError> {
    BoothMultiplier::new(BoothOpts::new(bit_width)?).multiply_text(multiplicand, multiplier)
}
