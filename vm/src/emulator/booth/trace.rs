use crate::{
    emulator::booth::step::{Operation, StepRecord},
    encoder::decode,
    error::BoothError,
    primitives::bits::BitString,
};
use serde::{Deserialize, Serialize};

/// Everything one multiplication produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoothTrace {
    /// Width of both operands.
    pub bit_width: u32,
    pub multiplicand: i128,
    pub multiplier: i128,
    pub multiplicand_bits: BitString,
    pub multiplier_bits: BitString,
    /// Every step in execution order.
    pub steps: Vec<StepRecord>,
    /// The product at `2 * bit_width` bits.
    pub result_bits: BitString,
}

impl BoothTrace {
    /// The decoded product.
    pub fn product(&self) -> Result<i128, BoothError> {
        decode(&self.result_bits)
    }

    /// Number of add and subtract steps.
    pub fn arithmetic_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.operation.is_arithmetic())
            .count()
    }

    /// The steps of one iteration, `0` being the initialization.
    pub fn iteration(&self, iteration: u32) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(move |step| step.iteration == iteration)
    }

    /// Number of steps with the given operation.
    pub fn count(&self, operation: Operation) -> usize {
        self.steps
            .iter()
            .filter(|step| step.operation == operation)
            .count()
    }
}
