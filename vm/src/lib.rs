//! Booth's signed multiplication over fixed-width two's-complement operands.
//!
//! [`encoder`] converts between integers and bit strings, and [`emulator::booth`] runs the
//! algorithm and records every step of it.

pub mod emulator;
pub mod encoder;
pub mod error;
pub mod logger;
pub mod primitives;

pub use emulator::{
    booth::{multiply, multiply_text, BoothMultiplier, BoothTrace, Operation, StepRecord},
    opts::BoothOpts,
};
pub use encoder::{decode, encode, parse_operand};
pub use error::{BoothError, ErrorKind};
pub use primitives::bits::BitString;
