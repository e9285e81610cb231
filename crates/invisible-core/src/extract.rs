use log::debug;

use crate::error::SteganoError;
use crate::result::Result;
use crate::scan::{scan, Span};
use crate::strategy::Strategy;

/// A secret found in a text, together with the strategy that hid it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unveiled {
    pub strategy: Strategy,
    pub secret: String,
}

/// Scans any text for a hidden secret of either strategy.
///
/// Emoji payloads win. Of all emoji spans only the longest one is decoded, the first one
/// on equal length, so a truncated fragment next to the full payload never shadows it.
/// If that does not yield a secret, every text span is decoded on its own, in text order.
///
/// Fails with [`SteganoError::NoSecretData`] if neither yields anything.
pub fn extract_robust(text: &str) -> Result<Unveiled> {
    let spans = scan(text);
    let (emoji, words): (Vec<&Span>, Vec<&Span>) = spans
        .iter()
        .partition(|span| span.strategy == Strategy::EMOJI);
    debug!(
        "found {} emoji and {} text candidates",
        emoji.len(),
        words.len()
    );

    if let Some(secret) = longest(&emoji)
        .and_then(Span::decode)
        .filter(|secret| !secret.is_empty())
    {
        return Ok(Unveiled {
            strategy: Strategy::EMOJI,
            secret,
        });
    }

    let secret: String = words.iter().filter_map(|span| span.decode()).collect();
    if secret.is_empty() {
        return Err(SteganoError::NoSecretData);
    }

    Ok(Unveiled {
        strategy: Strategy::TEXT,
        secret,
    })
}

/// longest span, the first one wins a tie
fn longest<'s>(spans: &[&'s Span]) -> Option<&'s Span> {
    spans.iter().copied().fold(None, |best, span| match best {
        Some(best) if best.bit_len() >= span.bit_len() => Some(best),
        _ => Some(span),
    })
}
