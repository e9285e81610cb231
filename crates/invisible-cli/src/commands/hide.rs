use std::path::PathBuf;

use clap::Args;
use invisible_core::CodecOptions;

use crate::CliResult;

/// Hides a secret message in a text
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Text file used as cover, used readonly. Without it a sample cover is used.
    #[arg(short = 'i', long = "in", value_name = "cover text file")]
    pub cover: Option<PathBuf>,

    /// Final text will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output text file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The secret message that will be hidden, asked for if omitted
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message = if self.message.is_none() {
            crate::cli::ask_for_secret()
        } else {
            self.message
        };

        invisible_core::commands::hide(
            self.cover.as_deref(),
            &self.write_to_file,
            message,
            options,
        )
    }
}
