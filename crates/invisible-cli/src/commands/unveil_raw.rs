use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Dumps every candidate payload, one line per span
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source text that contains the payloads
    #[arg(
        short = 'i',
        long = "in",
        value_name = "secret text file",
        required = true
    )]
    pub secret_text: PathBuf,

    /// Spans will be stored as tab separated file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self) -> CliResult<()> {
        invisible_core::commands::unveil_raw(&self.secret_text, &self.output_file)
    }
}
