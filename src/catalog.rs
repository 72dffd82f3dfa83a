//! Loaded inputs plus everything derived from them
//!
//! A catalog is built in one step from a word list and a vocabulary. Either
//! input failing means no catalog at all; a changed input means a new catalog.

use crate::config::AppConfig;
use crate::core::{Rarity, Side, SideFilter, Word};
use crate::drill::{DrillablePattern, build_drill_set_with};
use crate::error::LoadError;
use crate::index::{AffixIndex, PatternRecord, Vocabulary, aggregate_with};
use crate::wordlists::loader::{
    load_vocabulary_from_file, load_words_from_file, vocabulary_from_slice, words_from_slice,
};
use crate::wordlists::{PATTERNS, WORDS};
use std::path::Path;
use tracing::info;

/// Index and aggregate records for one word list and vocabulary
#[derive(Debug, Clone)]
pub struct Catalog {
    config: AppConfig,
    vocabulary: Vocabulary,
    index: AffixIndex,
    records: Vec<PatternRecord>,
}

/// Summary numbers for a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub words: usize,
    pub vocabulary: usize,
    pub ending_keys: usize,
    pub starting_keys: usize,
    pub records: usize,
    /// Record counts indexed by `Rarity::index`
    pub by_rarity: [usize; 5],
    pub drillable_ends: usize,
    pub drillable_starts: usize,
    pub length_mismatches: usize,
}

impl Catalog {
    /// Build from already-loaded inputs
    ///
    /// # Errors
    /// Returns `LoadError::EmptyWordList` or `LoadError::EmptyVocabulary` when an
    /// input has nothing in it.
    pub fn build(
        words: &[Word],
        vocabulary: Vocabulary,
        config: AppConfig,
    ) -> Result<Self, LoadError> {
        if words.is_empty() {
            return Err(LoadError::EmptyWordList);
        }
        if vocabulary.is_empty() {
            return Err(LoadError::EmptyVocabulary);
        }

        let index = AffixIndex::build_with(words, &config.index);
        let records = aggregate_with(&index, &vocabulary, &config.index);

        info!(
            words = words.len(),
            patterns = vocabulary.len(),
            records = records.len(),
            "catalog built"
        );

        Ok(Self {
            config,
            vocabulary,
            index,
            records,
        })
    }

    /// Build from the data compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded tables are empty.
    pub fn embedded(config: AppConfig) -> Result<Self, LoadError> {
        Self::build(&words_from_slice(WORDS), vocabulary_from_slice(PATTERNS), config)
    }

    /// Load inputs from files, falling back to embedded data for any path not given
    ///
    /// # Errors
    /// Returns the first `LoadError` hit; no partial catalog is produced.
    pub fn load(
        words_path: Option<&Path>,
        patterns_path: Option<&Path>,
        config: AppConfig,
    ) -> Result<Self, LoadError> {
        let words = match words_path {
            Some(path) => load_words_from_file(path)?,
            None => words_from_slice(WORDS),
        };
        let vocabulary = match patterns_path {
            Some(path) => load_vocabulary_from_file(path)?,
            None => vocabulary_from_slice(PATTERNS),
        };
        Self::build(&words, vocabulary, config)
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn index(&self) -> &AffixIndex {
        &self.index
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Aggregated records, rarest first
    #[must_use]
    pub fn records(&self) -> &[PatternRecord] {
        &self.records
    }

    /// Drillable patterns under the catalog's drill bounds
    #[must_use]
    pub fn drill_set(
        &self,
        side_filter: SideFilter,
        affix_query: Option<&str>,
    ) -> Vec<DrillablePattern> {
        build_drill_set_with(&self.records, side_filter, affix_query, &self.config.drill)
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let mut by_rarity = [0; 5];
        for record in &self.records {
            by_rarity[record.rarity().index()] += 1;
        }

        let drills = self.drill_set(SideFilter::All, None);
        let drillable_ends = drills.iter().filter(|d| d.side() == Side::Ends).count();

        CatalogStats {
            words: self.index.word_count(),
            vocabulary: self.vocabulary.len(),
            ending_keys: self.index.key_count(Side::Ends),
            starting_keys: self.index.key_count(Side::Starts),
            records: self.records.len(),
            by_rarity,
            drillable_ends,
            drillable_starts: drills.len() - drillable_ends,
            length_mismatches: self.records.iter().filter(|r| r.length_mismatch()).count(),
        }
    }
}

impl CatalogStats {
    #[must_use]
    pub const fn count_for(&self, rarity: Rarity) -> usize {
        self.by_rarity[rarity.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Vocabulary;

    #[test]
    fn embedded_catalog_builds() {
        let catalog = Catalog::embedded(AppConfig::default()).unwrap();
        assert!(!catalog.records().is_empty());
        assert!(!catalog.drill_set(SideFilter::All, None).is_empty());

        let totals: Vec<usize> = catalog.records().iter().map(PatternRecord::total_count).collect();
        assert!(totals.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn empty_inputs_fail_without_catalog() {
        let words = words_from_slice(&["walking"]);
        assert!(matches!(
            Catalog::build(&[], Vocabulary::from_pairs([("ing", 3)]), AppConfig::default()),
            Err(LoadError::EmptyWordList)
        ));
        assert!(matches!(
            Catalog::build(&words, Vocabulary::default(), AppConfig::default()),
            Err(LoadError::EmptyVocabulary)
        ));
    }

    #[test]
    fn missing_file_fails_whole_load() {
        let result = Catalog::load(
            None,
            Some(Path::new("/no/such/patterns.json")),
            AppConfig::default(),
        );
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn stats_add_up() {
        let words = words_from_slice(&[
            "walking", "talking", "reading", "painter", "writer", "terminal", "termite",
        ]);
        let vocab = Vocabulary::from_pairs([("ing", 3), ("ter", 3), ("zz", 2)]);
        let catalog = Catalog::build(&words, vocab, AppConfig::default()).unwrap();
        let stats = catalog.stats();

        assert_eq!(stats.words, 7);
        assert_eq!(stats.vocabulary, 3);
        assert_eq!(stats.records, 2);
        assert_eq!(stats.by_rarity.iter().sum::<usize>(), 2);
        assert_eq!(stats.count_for(Rarity::UltraRare), 2);
        assert_eq!(stats.drillable_ends, 2);
        assert_eq!(stats.drillable_starts, 1);
        assert_eq!(stats.length_mismatches, 0);
    }
}
