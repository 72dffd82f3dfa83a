//! Affix index over a word list
//!
//! Maps every word-ending and word-beginning substring (2-8 characters by
//! default) to the words carrying it, in word list order.

use crate::config::IndexConfig;
use crate::core::{Side, Word};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Two-sided lookup from affix text to words
///
/// Built once per word list and never patched; rebuild it when the list changes.
#[derive(Debug, Clone, Default)]
pub struct AffixIndex {
    ends_by: FxHashMap<String, Vec<Word>>,
    starts_by: FxHashMap<String, Vec<Word>>,
    word_count: usize,
}

impl AffixIndex {
    /// Index a word list with the default 2-8 character bounds
    ///
    /// # Examples
    /// ```
    /// use affix_drill::index::AffixIndex;
    /// use affix_drill::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["running", "Jumping"]);
    /// let index = AffixIndex::build(&words);
    ///
    /// assert_eq!(index.ending_with("ing").len(), 2);
    /// assert_eq!(index.starting_with("JU")[0].text(), "Jumping");
    /// ```
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        Self::build_with(words, &IndexConfig::default())
    }

    /// Index a word list with explicit substring bounds
    #[must_use]
    pub fn build_with(words: &[Word], config: &IndexConfig) -> Self {
        let mut ends_by: FxHashMap<String, Vec<Word>> = FxHashMap::default();
        let mut starts_by: FxHashMap<String, Vec<Word>> = FxHashMap::default();

        for word in words {
            let max_len = config.max_affix_len.min(word.len());
            for len in config.min_affix_len..=max_len {
                if let Some(suffix) = word.suffix(len) {
                    ends_by.entry(suffix.to_string()).or_default().push(word.clone());
                }
                if let Some(prefix) = word.prefix(len) {
                    starts_by
                        .entry(prefix.to_string())
                        .or_default()
                        .push(word.clone());
                }
            }
        }

        debug!(
            words = words.len(),
            ending_keys = ends_by.len(),
            starting_keys = starts_by.len(),
            "affix index built"
        );

        Self {
            ends_by,
            starts_by,
            word_count: words.len(),
        }
    }

    /// Words ending with `affix` (case-insensitive)
    #[must_use]
    pub fn ending_with(&self, affix: &str) -> &[Word] {
        lookup(&self.ends_by, affix)
    }

    /// Words starting with `affix` (case-insensitive)
    #[must_use]
    pub fn starting_with(&self, affix: &str) -> &[Word] {
        lookup(&self.starts_by, affix)
    }

    #[must_use]
    pub fn words_for(&self, side: Side, affix: &str) -> &[Word] {
        match side {
            Side::Ends => self.ending_with(affix),
            Side::Starts => self.starting_with(affix),
        }
    }

    /// Number of words the index was built from
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of distinct keys on one side
    #[must_use]
    pub fn key_count(&self, side: Side) -> usize {
        match side {
            Side::Ends => self.ends_by.len(),
            Side::Starts => self.starts_by.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ends_by.is_empty() && self.starts_by.is_empty()
    }
}

fn lookup<'a>(map: &'a FxHashMap<String, Vec<Word>>, affix: &str) -> &'a [Word] {
    map.get(affix.to_lowercase().as_str())
        .map_or(&[], Vec::as_slice)
}
