use anyhow::Result;
use booth_vm::encoder::encode_text;
use clap::Parser;
use log::debug;

use crate::booth_opts;

#[derive(Parser)]
#[command(name = "encode", about = "print the two's-complement bits of a decimal integer")]
pub struct EncodeCmd {
    #[clap(allow_hyphen_values = true, help = "Value, a decimal integer")]
    value: String,

    #[clap(long, short, help = "Width in bits")]
    bits: Option<u32>,
}

impl EncodeCmd {
    pub fn run(&self) -> Result<()> {
        let bit_width = match self.bits {
            // Plain encoding is not limited to multiplier operand widths.
            Some(bits) => bits,
            None => booth_opts(None)?.bit_width,
        };
        debug!("encoding {:?} at {} bits", self.value, bit_width);

        println!("{}", encode_text(&self.value, bit_width)?);
        Ok(())
    }
}
