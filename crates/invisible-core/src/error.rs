use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a cover text with fewer words than secret characters, for the text strategy
    #[error("Cover text too short! You need {required} words.")]
    CoverTooShort { required: usize },

    /// Represents a cover text without any non-ASCII run, for the emoji strategy
    #[error("No emojis found in text to hide the payload.")]
    NoEmojiCarrier,

    /// Represents a secret character that does not fit into a single byte, e.g. `€` or an emoji
    #[error("Secret character {character:?} at position {position} does not fit into a single byte")]
    UnsupportedSecretCharacter { character: char, position: usize },

    /// Represents an unveil of no secret data. For example when a text did not contain any markers
    #[error("No hidden watermark detected.")]
    NoSecretData,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    #[error("API Error: Missing cover text")]
    MissingCover,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing secret text")]
    MissingSecretText,
}
