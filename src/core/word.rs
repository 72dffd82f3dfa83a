//! Vocabulary word representation
//!
//! A Word keeps the original casing for display and a lowercase key for matching.

use std::fmt;
use std::sync::Arc;

/// A word from the source vocabulary
///
/// Cloning is cheap: both the display text and the folded key are shared, so the
/// same word can sit in many index buckets without copying its text.
#[derive(Debug, Clone)]
pub struct Word {
    text: Arc<str>,
    key: Arc<str>,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed; inner whitespace and casing are kept.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use affix_drill::core::Word;
    ///
    /// let word = Word::new("Running").unwrap();
    /// assert_eq!(word.text(), "Running");
    /// assert_eq!(word.key(), "running");
    ///
    /// assert!(Word::new("  ").is_err());
    /// assert_eq!(Word::new("Ice Cream").unwrap().key(), "ice cream");
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let key = text.to_lowercase();
        let len = key.chars().count();

        Ok(Self {
            text: Arc::from(text),
            key: Arc::from(key),
            len,
        })
    }

    /// Original text, casing preserved
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase matching key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last `n` characters of the lowercase key
    ///
    /// Returns `None` when the word is shorter than `n`.
    #[must_use]
    pub fn suffix(&self, n: usize) -> Option<&str> {
        if n > self.len {
            return None;
        }
        let start = self
            .key
            .char_indices()
            .nth(self.len - n)
            .map_or(self.key.len(), |(i, _)| i);
        Some(&self.key[start..])
    }

    /// First `n` characters of the lowercase key
    ///
    /// Returns `None` when the word is shorter than `n`.
    #[must_use]
    pub fn prefix(&self, n: usize) -> Option<&str> {
        if n > self.len {
            return None;
        }
        let end = self
            .key
            .char_indices()
            .nth(n)
            .map_or(self.key.len(), |(i, _)| i);
        Some(&self.key[..end])
    }

    /// Exact comparison against user input, ignoring case only
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        *self.key == input.to_lowercase()
    }
}

// Equality follows the matching key, not the display casing
impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
