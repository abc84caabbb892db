use crate::{
    encoder::check_bit_width,
    error::BoothError,
    primitives::consts::{
        product_bit_width, register_bit_width, BIT_WIDTH_ENV, DEFAULT_BIT_WIDTH,
        MAX_OPERAND_BIT_WIDTH,
    },
};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, warn};

/// Options for the Booth multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoothOpts {
    /// The width of both operands in bits. The product is twice as wide.
    pub bit_width: u32,
}

impl Default for BoothOpts {
    fn default() -> Self {
        let bit_width = bit_width_override(env::var(BIT_WIDTH_ENV).ok().as_deref());
        debug!("Booth operand width: {}", bit_width);

        Self { bit_width }
    }
}

impl BoothOpts {
    /// Create options for `bit_width`-bit operands.
    pub fn new(bit_width: u32) -> Result<Self, BoothError> {
        check_bit_width(bit_width, MAX_OPERAND_BIT_WIDTH)?;
        Ok(Self { bit_width })
    }

    /// Fail if the options were assembled by hand with an unsupported width.
    pub fn validate(&self) -> Result<(), BoothError> {
        check_bit_width(self.bit_width, MAX_OPERAND_BIT_WIDTH)
    }

    /// Width of the product register snapshots.
    pub fn register_bit_width(&self) -> u32 {
        register_bit_width(self.bit_width)
    }

    /// Width of the final product.
    pub fn product_bit_width(&self) -> u32 {
        product_bit_width(self.bit_width)
    }
}

/// Resolve the environment override, falling back to the default width when it is unusable.
fn bit_width_override(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_BIT_WIDTH;
    };
    match raw.trim().parse::<u32>() {
        Ok(bit_width) if check_bit_width(bit_width, MAX_OPERAND_BIT_WIDTH).is_ok() => bit_width,
        _ => {
            warn!(
                "ignoring {}={:?}, expected a width in 1..={}",
                BIT_WIDTH_ENV, raw, MAX_OPERAND_BIT_WIDTH
            );
            DEFAULT_BIT_WIDTH
        }
    }
}
