use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Scans a text for a hidden secret of either strategy
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source text that contains the secret
    #[arg(
        short = 'i',
        long = "in",
        value_name = "secret text file",
        required = true
    )]
    pub secret_text: PathBuf,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let unveiled = invisible_core::commands::unveil(&self.secret_text)?;

        println!("Detected: {}", unveiled.strategy);
        println!("Secret: {}", unveiled.secret);

        Ok(())
    }
}
