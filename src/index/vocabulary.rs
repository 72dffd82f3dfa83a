//! Pattern vocabulary: the ordered pattern → declared length table

use rustc_hash::FxHashSet;
use tracing::warn;

/// One vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    /// Lowercase pattern text
    pub pattern: String,
    /// Declared length, authoritative for display and filtering
    pub length: usize,
}

/// Ordered pattern vocabulary
///
/// Iteration order is the order entries were supplied in; aggregation uses it to
/// break ties between equally frequent patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

impl Vocabulary {
    /// Build from (pattern, length) pairs
    ///
    /// Patterns are folded to lowercase and trimmed. When two entries fold to the
    /// same text, the first one wins.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut entries = Vec::new();

        for (pattern, length) in pairs {
            let pattern = pattern.as_ref().trim().to_lowercase();
            if pattern.is_empty() {
                continue;
            }
            if !seen.insert(pattern.clone()) {
                warn!(%pattern, "duplicate vocabulary entry ignored");
                continue;
            }
            entries.push(VocabEntry { pattern, length });
        }

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared length of a pattern, if present
    #[must_use]
    pub fn length_of(&self, pattern: &str) -> Option<usize> {
        let pattern = pattern.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.pattern == pattern)
            .map(|entry| entry.length)
    }
}
