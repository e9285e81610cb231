use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Password;
use invisible_core::{CodecOptions, Strategy};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Strategy used for hiding, unveiling detects both
    #[arg(long, value_enum, default_value_t = Mode::Emoji)]
    pub mode: Mode,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn options(&self) -> CodecOptions {
        CodecOptions::default().with_strategy(self.mode.into())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    RevealCover(reveal_cover::RevealCoverArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The whole secret behind the first emoji
    Emoji,
    /// One secret character behind each word
    Text,
}

impl From<Mode> for Strategy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Emoji => Strategy::EMOJI,
            Mode::Text => Strategy::TEXT,
        }
    }
}

/// Prompts for the secret without echoing it, only if there is someone to ask.
pub fn ask_for_secret() -> Option<String> {
    if !std::io::stdin().is_terminal() {
        return None;
    }

    Password::new()
        .with_prompt("Secret message")
        .interact()
        .ok()
}
