use anyhow::Result;
use booth_vm::encoder::decode_str;
use clap::Parser;

#[derive(Parser)]
#[command(name = "decode", about = "print the signed value of a two's-complement bit string")]
pub struct DecodeCmd {
    #[clap(help = "Bits, most significant first")]
    bits: String,
}

impl DecodeCmd {
    pub fn run(&self) -> Result<()> {
        println!("{}", decode_str(&self.bits)?);
        Ok(())
    }
}
