//! Conversion between secrets, their bytes and their 8-bit-per-character binary expansion.

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::error::SteganoError;
use crate::result::Result;

/// Converts a secret into its bytes, one byte per character.
///
/// Only characters with a code point up to `U+00FF` are accepted, everything else would
/// produce a group wider than 8 bits and break the fixed width framing of the text strategy.
pub fn secret_bytes(secret: &str) -> Result<Vec<u8>> {
    secret
        .chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(u32::from(character))
                .map_err(|_| SteganoError::UnsupportedSecretCharacter {
                    character,
                    position,
                })
        })
        .collect()
}

/// Expands bytes into bits, most significant bit first.
pub fn bit_stream(bytes: &[u8]) -> Vec<bool> {
    let mut reader = BitReader::endian(bytes, BigEndian);
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    while let Ok(bit) = reader.read_bit() {
        bits.push(bit);
    }

    bits
}

/// Decodes a string of `'0'`/`'1'` digits, 8 digits per character.
///
/// Returns `None` if the input is empty, its length is not a multiple of 8 or it contains
/// anything but binary digits.
pub fn bits_to_text(bit_string: &str) -> Option<String> {
    if bit_string.is_empty() || bit_string.len() % 8 != 0 {
        return None;
    }
    // `from_str_radix` would accept a leading `+`
    if !bit_string.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    bit_string
        .as_bytes()
        .chunks(8)
        .map(|group| {
            let group = std::str::from_utf8(group).ok()?;
            u8::from_str_radix(group, 2).ok().map(char::from)
        })
        .collect()
}
