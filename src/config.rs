//! Explicit configuration records
//!
//! Every tunable lives here and is passed by argument. `Default` gives the
//! reference behavior.

/// Affix index and aggregation bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Shortest substring indexed at either end of a word
    pub min_affix_len: usize,
    /// Longest substring indexed at either end of a word
    pub max_affix_len: usize,
    /// Records with fewer combined occurrences are dropped
    pub min_total_count: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_affix_len: 2,
            max_affix_len: 8,
            min_total_count: 2,
        }
    }
}

/// Bounds a pattern side must meet to become drillable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillConfig {
    pub min_words: usize,
    pub max_words: usize,
    /// Compared against the vocabulary-declared length
    pub min_pattern_length: usize,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            min_words: 2,
            max_words: 15,
            min_pattern_length: 3,
        }
    }
}

impl DrillConfig {
    #[must_use]
    pub const fn accepts(&self, count: usize, length: usize) -> bool {
        count >= self.min_words && count <= self.max_words && length >= self.min_pattern_length
    }
}

/// Pattern browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseConfig {
    pub page_size: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self { page_size: 100 }
    }
}

/// Learning session tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Correct visible repetitions before a word is hidden
    pub repetitions_to_hide: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            repetitions_to_hide: 3,
        }
    }
}

/// All configuration for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub index: IndexConfig,
    pub drill: DrillConfig,
    pub browse: BrowseConfig,
    pub session: SessionConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = AppConfig::default();
        assert_eq!(config.index.min_affix_len, 2);
        assert_eq!(config.index.max_affix_len, 8);
        assert_eq!(config.index.min_total_count, 2);
        assert_eq!(config.drill.min_words, 2);
        assert_eq!(config.drill.max_words, 15);
        assert_eq!(config.drill.min_pattern_length, 3);
        assert_eq!(config.browse.page_size, 100);
        assert_eq!(config.session.repetitions_to_hide, 3);
    }

    #[test]
    fn drill_bounds_are_inclusive() {
        let drill = DrillConfig::default();
        assert!(drill.accepts(2, 3));
        assert!(drill.accepts(15, 8));
        assert!(!drill.accepts(1, 3));
        assert!(!drill.accepts(16, 3));
        assert!(!drill.accepts(4, 2));
    }
}
