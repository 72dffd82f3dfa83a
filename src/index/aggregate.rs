//! Pattern aggregation
//!
//! Joins the vocabulary against the affix index and keeps one record per pattern
//! that occurs at least twice, rarest first.

use super::{AffixIndex, VocabEntry, Vocabulary};
use crate::config::IndexConfig;
use crate::core::{Rarity, Side, Word};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Both-sided occurrence record for one vocabulary pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRecord {
    pattern: String,
    length: usize,
    matched_length: usize,
    ends_words: Vec<Word>,
    starts_words: Vec<Word>,
}

impl PatternRecord {
    /// Lowercase pattern text
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Declared vocabulary length
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Character length of the pattern text, the length the index matched on
    #[must_use]
    pub const fn matched_length(&self) -> usize {
        self.matched_length
    }

    /// Declared length disagrees with the matched substring length
    #[must_use]
    pub const fn length_mismatch(&self) -> bool {
        self.length != self.matched_length
    }

    #[must_use]
    pub fn ends_words(&self) -> &[Word] {
        &self.ends_words
    }

    #[must_use]
    pub fn starts_words(&self) -> &[Word] {
        &self.starts_words
    }

    #[must_use]
    pub fn words(&self, side: Side) -> &[Word] {
        match side {
            Side::Ends => &self.ends_words,
            Side::Starts => &self.starts_words,
        }
    }

    #[must_use]
    pub fn ends_count(&self) -> usize {
        self.ends_words.len()
    }

    #[must_use]
    pub fn starts_count(&self) -> usize {
        self.starts_words.len()
    }

    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.words(side).len()
    }

    /// Combined occurrences on both sides
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.ends_count() + self.starts_count()
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        Rarity::classify(self.total_count())
    }

    fn from_entry(entry: &VocabEntry, index: &AffixIndex) -> Self {
        Self {
            pattern: entry.pattern.clone(),
            length: entry.length,
            matched_length: entry.pattern.chars().count(),
            ends_words: index.ending_with(&entry.pattern).to_vec(),
            starts_words: index.starting_with(&entry.pattern).to_vec(),
        }
    }
}

/// Aggregate with the default minimum of two combined occurrences
///
/// # Examples
/// ```
/// use affix_drill::index::{AffixIndex, Vocabulary, aggregate};
/// use affix_drill::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["running", "jumping", "swimming", "walking"]);
/// let index = AffixIndex::build(&words);
/// let vocab = Vocabulary::from_pairs([("ing", 3), ("xyz", 3)]);
///
/// let records = aggregate(&index, &vocab);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].ends_count(), 4);
/// ```
#[must_use]
pub fn aggregate(index: &AffixIndex, vocabulary: &Vocabulary) -> Vec<PatternRecord> {
    aggregate_with(index, vocabulary, &IndexConfig::default())
}

/// Aggregate with explicit bounds
///
/// Output is sorted ascending by total count. The sort is stable, so patterns with
/// equal counts keep their vocabulary order.
#[must_use]
pub fn aggregate_with(
    index: &AffixIndex,
    vocabulary: &Vocabulary,
    config: &IndexConfig,
) -> Vec<PatternRecord> {
    // Rayon collect keeps vocabulary order for the stable sort below
    let mut records: Vec<PatternRecord> = vocabulary
        .entries()
        .par_iter()
        .map(|entry| PatternRecord::from_entry(entry, index))
        .filter(|record| record.total_count() >= config.min_total_count)
        .collect();

    records.sort_by_key(PatternRecord::total_count);

    for record in records.iter().filter(|r| r.length_mismatch()) {
        warn!(
            pattern = record.pattern(),
            declared = record.length(),
            matched = record.matched_length(),
            "vocabulary length disagrees with pattern text"
        );
    }

    debug!(
        vocabulary = vocabulary.len(),
        records = records.len(),
        "patterns aggregated"
    );

    records
}
