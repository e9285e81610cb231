//! The four reserved code points that make up the invisible wire format.
//!
//! Any text produced by one implementation must decode in another, so these values are
//! fixed forever:
//!
//! | symbol         | code point | name                       |
//! |----------------|------------|----------------------------|
//! | [`BIT_0`]      | `U+200C`   | Zero Width Non-Joiner      |
//! | [`BIT_1`]      | `U+200D`   | Zero Width Joiner          |
//! | [`MARKER_TEXT`]  | `U+200B` | Zero Width Space           |
//! | [`MARKER_EMOJI`] | `U+FE0F` | Variation Selector-16      |

/// binary `0`
pub const BIT_0: char = '\u{200C}';
/// binary `1`
pub const BIT_1: char = '\u{200D}';

/// opens a fixed width, one byte payload of the text strategy
pub const MARKER_TEXT: char = '\u{200B}';
/// opens an unbounded payload of the emoji strategy
pub const MARKER_EMOJI: char = '\u{FE0F}';

#[inline]
pub fn symbol_for(bit: bool) -> char {
    if bit {
        BIT_1
    } else {
        BIT_0
    }
}

#[inline]
pub fn bit_of(symbol: char) -> Option<bool> {
    match symbol {
        BIT_0 => Some(false),
        BIT_1 => Some(true),
        _ => None,
    }
}

#[inline]
pub fn is_bit_symbol(c: char) -> bool {
    bit_of(c).is_some()
}

/// Renders a run of bit symbols as a `'0'`/`'1'` string.
/// Anything that is not a bit symbol is skipped.
pub fn symbols_to_bits(symbols: &[char]) -> String {
    symbols
        .iter()
        .filter_map(|&c| bit_of(c))
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
