use crate::strategy::Strategy;

/// Codec configuration for hiding secrets
///
/// Unveiling needs no options, the extractor recognises both strategies on its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// The strategy used for hiding, defaults to the emoji strategy
    pub strategy: Strategy,
}

impl CodecOptions {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}
