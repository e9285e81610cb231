use log::debug;

use super::{payload, Capacity, Conceal};
use crate::alphabet::MARKER_EMOJI;
use crate::bits::bit_stream;
use crate::error::SteganoError;
use crate::result::Result;

/// The whole secret as one bit stream behind the first non-ASCII run of the cover.
///
/// There is no length header and no delimiter between characters, the payload simply ends
/// where the bit symbols end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Burst;

impl Burst {
    /// Byte offset right behind the first maximal run of non-ASCII characters.
    fn carrier_end(cover: &str) -> Option<usize> {
        let (start, _) = cover.char_indices().find(|(_, c)| !c.is_ascii())?;
        let end = cover[start..]
            .char_indices()
            .find(|(_, c)| c.is_ascii())
            .map_or(cover.len(), |(i, _)| start + i);

        Some(end)
    }
}

impl Conceal for Burst {
    fn conceal(&self, cover: &str, secret: &[u8]) -> Result<String> {
        let end = Self::carrier_end(cover).ok_or(SteganoError::NoEmojiCarrier)?;
        debug!("bursting {} bytes behind carrier ending at {}", secret.len(), end);

        let burst = payload(self.marker(), &bit_stream(secret));
        let mut stego = String::with_capacity(cover.len() + burst.len());
        stego.push_str(&cover[..end]);
        stego.push_str(&burst);
        stego.push_str(&cover[end..]);

        Ok(stego)
    }

    fn capacity(&self, cover: &str) -> Capacity {
        match Self::carrier_end(cover) {
            Some(_) => Capacity::Unbounded,
            None => Capacity::NoCarrier,
        }
    }

    fn label(&self) -> &'static str {
        "Emoji Strategy"
    }

    fn marker(&self) -> char {
        MARKER_EMOJI
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::is_bit_symbol;

    #[test]
    fn should_fail_without_any_non_ascii_run() {
        let err = Burst.conceal("plain ascii only", b"x").unwrap_err();
        assert!(matches!(err, SteganoError::NoEmojiCarrier));
        assert_eq!(
            err.to_string(),
            "No emojis found in text to hide the payload."
        );
    }

    #[test]
    fn should_append_behind_the_whole_first_run() {
        let stego = Burst.conceal("hi 🚀🔥 there 🎉", b"A").unwrap();
        let (head, tail) = stego.split_once(MARKER_EMOJI).unwrap();
        assert_eq!(head, "hi 🚀🔥");

        let bits: String = tail.chars().take_while(|&c| is_bit_symbol(c)).collect();
        assert_eq!(bits.chars().count(), 8);
        assert_eq!(&tail[bits.len()..], " there 🎉");
    }

    #[test]
    fn should_use_a_run_at_the_end_of_the_cover() {
        let stego = Burst.conceal("ok ✓", b"ab").unwrap();
        assert!(stego.starts_with("ok ✓\u{FE0F}"));
        assert_eq!(stego.chars().count(), "ok ✓".chars().count() + 1 + 16);
    }

    #[test]
    fn should_not_delimit_characters() {
        let stego = Burst.conceal("✓", b"abc").unwrap();
        assert_eq!(stego.chars().filter(|&c| c == MARKER_EMOJI).count(), 1);
        assert_eq!(stego.chars().filter(|&c| is_bit_symbol(c)).count(), 24);
    }

    #[test]
    fn capacity_depends_on_a_carrier() {
        assert_eq!(Burst.capacity("no carrier"), Capacity::NoCarrier);
        assert_eq!(Burst.capacity("café"), Capacity::Unbounded);
    }
}
