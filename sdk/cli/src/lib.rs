use booth_vm::{BoothError, BoothOpts};

pub mod render;
pub mod subcommand;

/// Options for `--bits`, validated for the multiplier.
///
/// Without the flag the library default applies, which honours `BOOTH_BIT_WIDTH` and falls back
/// to 8 bits with a warning when the variable is unusable.
pub fn booth_opts(bits: Option<u32>) -> Result<BoothOpts, BoothError> {
    match bits {
        Some(bits) => BoothOpts::new(bits),
        None => Ok(BoothOpts::default()),
    }
}

/// Turn colours off globally, e.g. for `--no-color` or when piping.
pub fn configure_colors(no_color: bool) {
    if no_color {
        yansi::disable();
    }
}
