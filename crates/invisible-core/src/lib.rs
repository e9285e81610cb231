//! # Invisible Core API
//!
//! Hides a short secret inside ordinary Unicode text as invisible formatting characters and
//! finds it again in any text that still carries them. Two strategies share one alphabet:
//! - the text strategy ([`Strategy::TEXT`]) attaches one secret character to each word
//! - the emoji strategy ([`Strategy::EMOJI`]) attaches the whole secret to the first emoji
//!
//! [`extract_robust`] tells both apart, emoji payloads take priority.
//!
//! This is obfuscation, not encryption. Everybody who knows the [`alphabet`] can read the secret.
//!
//! # Usage Examples
//!
//! ## Hide a message inside a text
//!
//! ```rust
//! use invisible_core::{visible_text, Strategy};
//!
//! let stego = invisible_core::api::hide::prepare()
//!     .with_cover("The quick brown fox")
//!     .with_message("Hi")
//!     .with_strategy(Strategy::TEXT)
//!     .execute()
//!     .expect("Failed to hide message in text");
//!
//! assert_eq!(visible_text(&stego), "The quick brown fox");
//! ```
//!
//! ## Unveil a message from a text
//!
//! ```rust
//! use invisible_core::{embed_emoji, Strategy};
//!
//! let stego = embed_emoji("Love this! ❤️ 🚀", "Attack at dawn").unwrap();
//!
//! let unveiled = invisible_core::api::unveil::prepare()
//!     .from_text(&stego)
//!     .execute()
//!     .expect("Failed to unveil message from text");
//!
//! assert_eq!(unveiled.strategy, Strategy::EMOJI);
//! assert_eq!(unveiled.secret, "Attack at dawn");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod alphabet;
pub mod api;
pub mod bits;
pub mod codec_options;
pub mod commands;
pub mod cover;
pub mod error;
pub mod extract;
pub mod result;
pub mod scan;
pub mod strategy;

pub use crate::bits::bits_to_text;
pub use crate::codec_options::CodecOptions;
pub use crate::cover::visible_text;
pub use crate::error::SteganoError;
pub use crate::extract::{extract_robust, Unveiled};
pub use crate::result::Result;
pub use crate::scan::{scan, Span};
pub use crate::strategy::{embed_emoji, embed_text, Capacity, Conceal, Strategy};
