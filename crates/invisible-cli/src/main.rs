mod cli;
mod commands;

use clap::Parser;
use invisible_core::SteganoError;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.options();

    let result = match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(),
        Commands::UnveilRaw(unveil_raw) => unveil_raw.run(),
        Commands::RevealCover(reveal_cover) => reveal_cover.run(),
    };

    if let Err(SteganoError::NoSecretData) = &result {
        eprintln!("Ensure you copied the text exactly. Some apps strip invisible characters.");
    }

    result
}
