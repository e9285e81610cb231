use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Removes all hidden payloads and keeps the visible text
#[derive(Args, Debug)]
pub struct RevealCoverArgs {
    /// Source text that contains hidden payloads
    #[arg(
        short = 'i',
        long = "in",
        value_name = "secret text file",
        required = true
    )]
    pub secret_text: PathBuf,

    /// Visible text will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl RevealCoverArgs {
    pub fn run(self) -> CliResult<()> {
        invisible_core::commands::reveal_cover(&self.secret_text, &self.output_file)
    }
}
