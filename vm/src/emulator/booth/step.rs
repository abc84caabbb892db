use crate::primitives::{bits::BitString, consts::TRAILING_BITS};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A step of Booth's algorithm.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    /// Load the multiplier into the product register.
    Init,
    /// Add the multiplicand into the accumulator.
    Add,
    /// Subtract the multiplicand from the accumulator.
    Sub,
    /// Arithmetic shift right of the whole register.
    Asr,
}

impl Operation {
    /// The accumulator update selected by a trailing bit pair, if any.
    ///
    /// Only `10` and `01` select one; `00` and `11` go straight to the shift.
    pub fn from_trailing_bits(pair: u8) -> Option<Self> {
        match pair & 0b11 {
            0b10 => Some(Self::Sub),
            0b01 => Some(Self::Add),
            _ => None,
        }
    }

    /// Whether the step changes the accumulator.
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

/// One row of a multiplication trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepRecord {
    /// `0` for [`Operation::Init`], `1..=bit_width` afterwards.
    pub iteration: u32,
    /// Set on the shift that follows an add or subtract of the same iteration.
    pub continuation: bool,
    pub operation: Operation,
    pub multiplicand_bits: BitString,
    /// Snapshot of the whole product register, guard bit included.
    pub product_bits: BitString,
}

impl StepRecord {
    /// Width of the operands this step belongs to.
    pub fn operand_bit_width(&self) -> u32 {
        self.multiplicand_bits.width()
    }

    /// The two bits the next iteration inspects.
    pub fn trailing_bits(&self) -> &str {
        self.product_bits.trailing(TRAILING_BITS)
    }

    /// The accumulator half of the register, including its extension bit.
    pub fn accumulator_bits(&self) -> &str {
        let split = self
            .product_bits
            .width()
            .saturating_sub(self.operand_bit_width() + 1);
        self.product_bits.split_at(split as usize).0
    }

    /// The multiplier half of the register.
    pub fn multiplier_bits(&self) -> &str {
        let bits = self.product_bits.as_str();
        let end = bits.len() - 1;
        &bits[end.saturating_sub(self.operand_bit_width() as usize)..end]
    }

    pub fn guard_bit(&self) -> &str {
        self.product_bits.trailing(1)
    }

    /// The add or subtract this row's trailing bits trigger in the following iteration.
    ///
    /// `None` for add and subtract rows (their shift comes first), for the last shift and for
    /// `00`/`11` pairs.
    pub fn next_operation(&self) -> Option<Operation> {
        let feeds_iteration = match self.operation {
            Operation::Init => true,
            Operation::Asr => self.iteration < self.operand_bit_width(),
            Operation::Add | Operation::Sub => false,
        };
        if !feeds_iteration {
            return None;
        }
        let pair = u8::from_str_radix(self.trailing_bits(), 2).ok()?;
        Operation::from_trailing_bits(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn record(iteration: u32, operation: Operation, product: &str) -> StepRecord {
        StepRecord {
            iteration,
            continuation: false,
            operation,
            multiplicand_bits: "0011".parse().unwrap(),
            product_bits: product.parse().unwrap(),
        }
    }

    #[test]
    fn test_operation_names() {
        let names: Vec<_> = Operation::iter().map(|op| op.to_string()).collect();
        assert_eq!(names, ["INIT", "ADD", "SUB", "ASR"]);
        assert_eq!(Operation::from_str("ASR").unwrap(), Operation::Asr);
        assert_eq!(serde_json::to_string(&Operation::Sub).unwrap(), "\"SUB\"");
    }

    #[test]
    fn test_trailing_pairs() {
        assert_eq!(Operation::from_trailing_bits(0b10), Some(Operation::Sub));
        assert_eq!(Operation::from_trailing_bits(0b01), Some(Operation::Add));
        assert_eq!(Operation::from_trailing_bits(0b00), None);
        assert_eq!(Operation::from_trailing_bits(0b11), None);
        assert!(!Operation::Asr.is_arithmetic());
        assert!(Operation::Add.is_arithmetic());
    }

    #[test]
    fn test_register_fields() {
        let step = record(2, Operation::Asr, "1111010001");
        assert_eq!(step.accumulator_bits(), "11110");
        assert_eq!(step.multiplier_bits(), "1000");
        assert_eq!(step.guard_bit(), "1");
        assert_eq!(step.trailing_bits(), "01");
    }

    #[test]
    fn test_next_operation() {
        assert_eq!(
            record(2, Operation::Asr, "1111010001").next_operation(),
            Some(Operation::Add)
        );
        assert_eq!(
            record(0, Operation::Init, "0000011010").next_operation(),
            Some(Operation::Sub)
        );
        // The last shift feeds no further iteration.
        assert_eq!(record(4, Operation::Asr, "0000011001").next_operation(), None);
        assert_eq!(record(3, Operation::Add, "0000110001").next_operation(), None);
        assert_eq!(record(1, Operation::Asr, "0000000011").next_operation(), None);
    }
}
