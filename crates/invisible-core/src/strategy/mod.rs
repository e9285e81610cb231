//! Embedding strategies.
//!
//! Both strategies share the bit alphabet but differ in framing:
//! - [`Distributed`] attaches one marker and exactly one byte to each word of the cover
//! - [`Burst`] attaches one marker and the whole secret to the first non-ASCII run

mod burst;
mod distributed;

use std::fmt::{self, Display, Formatter};

use enum_dispatch::enum_dispatch;

pub use burst::Burst;
pub use distributed::Distributed;

use crate::alphabet::symbol_for;
use crate::bits::secret_bytes;
use crate::result::Result;

/// How much secret a cover text can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// at most that many secret characters
    Limited(usize),
    /// any secret length
    Unbounded,
    /// there is nothing to attach a payload to
    NoCarrier,
}

impl Capacity {
    pub fn fits(&self, secret_len: usize) -> bool {
        match self {
            Capacity::Limited(n) => secret_len <= *n,
            Capacity::Unbounded => true,
            Capacity::NoCarrier => false,
        }
    }
}

#[enum_dispatch]
pub trait Conceal {
    /// Hides the already validated secret bytes in the cover text.
    fn conceal(&self, cover: &str, secret: &[u8]) -> Result<String>;

    fn capacity(&self, cover: &str) -> Capacity;

    /// Human readable name, reported by the extractor.
    fn label(&self) -> &'static str;

    /// The marker symbol that opens every payload of this strategy.
    fn marker(&self) -> char;
}

#[enum_dispatch(Conceal)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Distributed(Distributed),
    Burst(Burst),
}

impl Strategy {
    pub const TEXT: Strategy = Strategy::Distributed(Distributed);
    pub const EMOJI: Strategy = Strategy::Burst(Burst);

    /// Validates the secret and hides it in the cover text.
    pub fn embed(&self, cover: &str, secret: &str) -> Result<String> {
        let bytes = secret_bytes(secret)?;
        self.conceal(cover, &bytes)
    }

    /// A cover text that always has room for a short secret.
    pub fn sample_cover(&self) -> &'static str {
        match self {
            Strategy::Distributed(_) => "This is a secure channel.",
            Strategy::Burst(_) => "Love this! ❤️ 🚀",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::EMOJI
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hides `secret` in `cover` by attaching one byte to each word.
pub fn embed_text(cover: &str, secret: &str) -> Result<String> {
    Strategy::TEXT.embed(cover, secret)
}

/// Hides `secret` in `cover` as one bit stream behind the first non-ASCII run.
pub fn embed_emoji(cover: &str, secret: &str) -> Result<String> {
    Strategy::EMOJI.embed(cover, secret)
}

/// marker followed by the bit symbols
pub(crate) fn payload(marker: char, bits: &[bool]) -> String {
    std::iter::once(marker)
        .chain(bits.iter().map(|&bit| symbol_for(bit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{BIT_0, BIT_1, MARKER_EMOJI, MARKER_TEXT};
    use crate::SteganoError;

    #[test]
    fn should_label_strategies() {
        assert_eq!(Strategy::TEXT.to_string(), "Text Strategy");
        assert_eq!(Strategy::EMOJI.to_string(), "Emoji Strategy");
        assert_eq!(Strategy::default(), Strategy::EMOJI);
    }

    #[test]
    fn should_dispatch_markers() {
        assert_eq!(Strategy::TEXT.marker(), MARKER_TEXT);
        assert_eq!(Strategy::EMOJI.marker(), MARKER_EMOJI);
    }

    #[test]
    fn should_open_every_payload_with_the_strategy_marker() {
        for s in [Strategy::TEXT, Strategy::EMOJI] {
            let stego = s.embed("one two 🚀", "ok").unwrap();
            let first_hidden = stego
                .chars()
                .find(|&c| c == MARKER_TEXT || c == MARKER_EMOJI || c == BIT_0 || c == BIT_1)
                .unwrap();

            assert_eq!(first_hidden, s.marker(), "for {}", s);
        }
    }

    #[test]
    fn should_build_a_payload() {
        let p = payload(MARKER_TEXT, &[false, true]);
        assert_eq!(p, format!("{}{}{}", MARKER_TEXT, BIT_0, BIT_1));
    }

    #[test]
    fn sample_covers_fit_a_short_secret() {
        for s in [Strategy::TEXT, Strategy::EMOJI] {
            assert!(s.capacity(s.sample_cover()).fits(4), "{} sample too small", s);
        }
    }

    #[test]
    fn capacity_fits() {
        assert!(Capacity::Limited(2).fits(2));
        assert!(!Capacity::Limited(2).fits(3));
        assert!(Capacity::Unbounded.fits(10_000));
        assert!(!Capacity::NoCarrier.fits(0));
    }

    #[test]
    fn both_strategies_reject_wide_secret_characters() {
        for s in [Strategy::TEXT, Strategy::EMOJI] {
            assert!(matches!(
                s.embed("one two 🚀", "o€"),
                Err(SteganoError::UnsupportedSecretCharacter { position: 1, .. })
            ));
        }
    }
}
