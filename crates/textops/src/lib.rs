//! # Text Operations
//!
//! Multi-byte aware string helpers: length and case conversion, character and word
//! truncation, identifier and slug derivation, ASCII transliteration, wildcard matching and
//! random token generation.
//!
//! Everything hangs off [`TextOps`], an immutable value holding the configured [`Encoding`]
//! and [`TransliterationTable`]. Build it once at startup and share it.
//!
//! ## Example
//!
//! ```rust
//! use tkit_textops::{Encoding, TextOps};
//!
//! # fn main() -> Result<(), tkit_textops::TextError> {
//! let text = TextOps::builder().encoding(Encoding::Utf8).build()?;
//!
//! assert_eq!(text.length("νωθρού"), 6);
//! assert_eq!(text.classify("my_post-name"), "My_Post_Name");
//! assert_eq!(text.slug("Ärger über Öl!", "_"), "aerger_ueber_oel");
//! assert_eq!(text.segments("/a//b/"), ["a", "b"]);
//! assert_eq!(text.random(10, "alpha")?.len(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! ## Encodings
//!
//! [`Encoding::Utf8`] (the default) counts and slices by code point and applies full Unicode
//! case mapping. [`Encoding::SingleByte`] counts bytes and only folds ASCII letters; byte
//! truncation never splits a code point.
//!
//! ## Randomness
//!
//! [`TextOps::random`] shuffles a fixed alphabet with the thread-local generator. It is meant
//! for tokens and slugs, not for secrets.

mod config;
mod encoding;
mod error;
mod ops;
mod pool;
mod transliteration;

pub use crate::config::TextOpsConfig;
pub use crate::encoding::Encoding;
pub use crate::error::{TextError, TextErrorExt};
pub use crate::ops::{
    DEFAULT_END, DEFAULT_LIMIT, DEFAULT_SEPARATOR, DEFAULT_WORDS, TextOps, TextOpsBuilder,
};
pub use crate::pool::{ALNUM, ALPHA, POOL_REPEAT, PoolKind, pool};
pub use crate::transliteration::{Rule, TransliterationTable};
