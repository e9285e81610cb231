//! Finds every candidate payload in a text, without deciding which one is the real secret.
//!
//! A candidate [`Span`] starts at a marker symbol:
//! - `MARKER_EMOJI` takes the maximal run of bit symbols behind it, at least one
//! - `MARKER_TEXT` takes exactly the next 8 bit symbols, a shorter run is no candidate
//!
//! Markers are not bit symbols, so spans never overlap.

use log::trace;

use crate::alphabet::{is_bit_symbol, symbols_to_bits, MARKER_EMOJI, MARKER_TEXT};
use crate::bits::bits_to_text;
use crate::strategy::Strategy;

/// Width of one text strategy payload.
pub const TEXT_PAYLOAD_BITS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// the strategy whose marker opened the span
    pub strategy: Strategy,
    /// character offset of the marker
    pub offset: usize,
    symbols: Vec<char>,
}

impl Span {
    /// Number of bit symbols behind the marker.
    pub fn bit_len(&self) -> usize {
        self.symbols.len()
    }

    pub fn bits(&self) -> String {
        symbols_to_bits(&self.symbols)
    }

    /// `None` if the bits do not form whole bytes.
    pub fn decode(&self) -> Option<String> {
        bits_to_text(&self.bits())
    }
}

/// Number of bit symbols at the start of `chars`.
pub(crate) fn bit_run(chars: &[char]) -> usize {
    chars.iter().take_while(|&&c| is_bit_symbol(c)).count()
}

pub fn scan(text: &str) -> Vec<Span> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (strategy, len) = match chars[i] {
            MARKER_EMOJI => (Strategy::EMOJI, bit_run(&chars[i + 1..])),
            MARKER_TEXT => {
                let run = bit_run(&chars[i + 1..]).min(TEXT_PAYLOAD_BITS);
                (Strategy::TEXT, if run == TEXT_PAYLOAD_BITS { run } else { 0 })
            }
            _ => {
                i += 1;
                continue;
            }
        };

        if len == 0 {
            i += 1;
            continue;
        }

        let span = Span {
            strategy,
            offset: i,
            symbols: chars[i + 1..i + 1 + len].to_vec(),
        };
        trace!("{} span at {} with {} bits", strategy, i, len);
        spans.push(span);
        i += 1 + len;
    }

    spans
}
