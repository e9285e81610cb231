use log::debug;

use super::{payload, Capacity, Conceal};
use crate::alphabet::MARKER_TEXT;
use crate::bits::bit_stream;
use crate::error::SteganoError;
use crate::result::Result;

/// One secret character per whitespace delimited word.
///
/// Every payload is `MARKER_TEXT` followed by exactly 8 bit symbols and sits directly behind
/// its word, so a lost or mangled word costs one character and nothing else.
/// The words are joined back with single spaces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Distributed;

/// Unicode whitespace plus the four ASCII information separators `\x1c`..=`\x1f`.
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn words(cover: &str) -> impl Iterator<Item = &str> {
    cover.split(is_word_separator).filter(|w| !w.is_empty())
}

impl Conceal for Distributed {
    fn conceal(&self, cover: &str, secret: &[u8]) -> Result<String> {
        if !self.capacity(cover).fits(secret.len()) {
            return Err(SteganoError::CoverTooShort {
                required: secret.len(),
            });
        }
        debug!(
            "distributing {} bytes over {} words",
            secret.len(),
            words(cover).count()
        );

        let stego: Vec<String> = words(cover)
            .enumerate()
            .map(|(i, word)| match secret.get(i) {
                Some(&byte) => format!("{}{}", word, payload(self.marker(), &bit_stream(&[byte]))),
                None => word.to_string(),
            })
            .collect();

        Ok(stego.join(" "))
    }

    fn capacity(&self, cover: &str) -> Capacity {
        Capacity::Limited(words(cover).count())
    }

    fn label(&self) -> &'static str {
        "Text Strategy"
    }

    fn marker(&self) -> char {
        MARKER_TEXT
    }
}
