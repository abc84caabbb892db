use anyhow::Result;
use booth_vm::BoothMultiplier;
use clap::{ArgAction, Parser};
use log::{debug, info};

use crate::{booth_opts, configure_colors, render::render_trace};

#[derive(Parser)]
#[command(name = "multiply", about = "trace Booth's algorithm for two signed operands")]
pub struct MultiplyCmd {
    #[clap(allow_hyphen_values = true, help = "Multiplicand, a decimal integer")]
    multiplicand: String,

    #[clap(allow_hyphen_values = true, help = "Multiplier, a decimal integer")]
    multiplier: String,

    #[clap(long, short, help = "Operand width in bits")]
    bits: Option<u32>,

    #[clap(long, action = ArgAction::SetTrue, help = "Print the trace as JSON")]
    json: bool,

    #[clap(long, action = ArgAction::SetTrue, help = "Disable colours")]
    no_color: bool,
}

impl MultiplyCmd {
    pub fn run(&self) -> Result<()> {
        configure_colors(self.no_color);
        let opts = booth_opts(self.bits)?;
        debug!("multiplying at {} bits", opts.bit_width);

        let trace =
            BoothMultiplier::new(opts).multiply_text(&self.multiplicand, &self.multiplier)?;
        info!(
            "{} x {} took {} steps",
            trace.multiplicand,
            trace.multiplier,
            trace.steps.len()
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&trace)?);
        } else {
            println!("{}", render_trace(&trace));
        }
        Ok(())
    }
}
