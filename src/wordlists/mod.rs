//! Input loading for the word list and pattern vocabulary
//!
//! Provides embedded defaults compiled into the binary plus file loaders.

mod embedded;
pub mod loader;

pub use embedded::{PATTERNS, PATTERNS_COUNT, WORDS, WORDS_COUNT};
