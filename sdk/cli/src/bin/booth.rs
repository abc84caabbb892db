use anyhow::Result;
use booth_cli::subcommand::{decode::DecodeCmd, encode::EncodeCmd, multiply::MultiplyCmd};
use booth_vm::logger::setup_logger;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "booth", author, about = "Booth's multiplication, step by step", long_about = None, version)]
pub struct BoothCli {
    #[clap(subcommand)]
    pub command: SubCommands,
}

#[derive(Subcommand)]
pub enum SubCommands {
    Multiply(MultiplyCmd),
    Encode(EncodeCmd),
    Decode(DecodeCmd),
}

fn main() -> Result<()> {
    setup_logger();
    let args = BoothCli::parse();

    match args.command {
        SubCommands::Multiply(cmd) => cmd.run(),
        SubCommands::Encode(cmd) => cmd.run(),
        SubCommands::Decode(cmd) => cmd.run(),
    }
}
