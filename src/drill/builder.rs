//! Drill set construction
//!
//! Splits each pattern record into at most one ends-side and one starts-side
//! drillable pattern.

use crate::config::DrillConfig;
use crate::core::{Side, SideFilter, Word};
use crate::index::PatternRecord;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::debug;

/// Identity of a drillable pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrillKey {
    pub pattern: String,
    pub side: Side,
}

impl DrillKey {
    #[must_use]
    pub fn new(pattern: impl Into<String>, side: Side) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
            side,
        }
    }
}

impl fmt::Display for DrillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.side.decorate(&self.pattern))
    }
}

/// One side of a pattern record, ready for quizzing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillablePattern {
    key: DrillKey,
    length: usize,
    words: Vec<Word>,
}

impl DrillablePattern {
    fn from_record(record: &PatternRecord, side: Side) -> Self {
        Self {
            key: DrillKey::new(record.pattern(), side),
            length: record.length(),
            words: record.words(side).to_vec(),
        }
    }

    #[must_use]
    pub const fn key(&self) -> &DrillKey {
        &self.key
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.key.pattern
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.key.side
    }

    /// Declared vocabulary length
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Words that can be found separately; repeated spellings count once
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.words
            .iter()
            .map(Word::key)
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// Word from this pattern matching the input, ignoring case
    #[must_use]
    pub fn find_word(&self, candidate: &str) -> Option<&Word> {
        self.words.iter().find(|word| word.matches(candidate))
    }

    /// Part of a word the user has to supply, e.g. `walk` for `walking` in `-ing`
    #[must_use]
    pub fn fragment_of<'w>(&self, word: &'w Word) -> &'w str {
        let key = word.key();
        match self.side() {
            Side::Ends => key.strip_suffix(self.pattern()).unwrap_or(key),
            Side::Starts => key.strip_prefix(self.pattern()).unwrap_or(key),
        }
    }
}

/// Build the drill set with default bounds and no filters
#[must_use]
pub fn build_drill_set(records: &[PatternRecord]) -> Vec<DrillablePattern> {
    build_drill_set_with(records, SideFilter::All, None, &DrillConfig::default())
}

/// Build the drill set
///
/// A side is emitted when its word count lies within the configured bounds and
/// the declared pattern length is long enough. With an affix query, ends entries
/// must end with the query and starts entries must start with it.
///
/// # Examples
/// ```
/// use affix_drill::config::DrillConfig;
/// use affix_drill::core::{Side, SideFilter};
/// use affix_drill::drill::build_drill_set_with;
/// use affix_drill::index::{AffixIndex, Vocabulary, aggregate};
/// use affix_drill::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["walking", "talking", "prefix", "preview"]);
/// let records = aggregate(
///     &AffixIndex::build(&words),
///     &Vocabulary::from_pairs([("ing", 3), ("pre", 3)]),
/// );
///
/// let drills = build_drill_set_with(&records, SideFilter::All, Some("ng"), &DrillConfig::default());
/// assert_eq!(drills.len(), 1);
/// assert_eq!(drills[0].side(), Side::Ends);
/// ```
#[must_use]
pub fn build_drill_set_with(
    records: &[PatternRecord],
    side_filter: SideFilter,
    affix_query: Option<&str>,
    config: &DrillConfig,
) -> Vec<DrillablePattern> {
    let query = affix_query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    let drills: Vec<DrillablePattern> = records
        .iter()
        .flat_map(|record| {
            [Side::Ends, Side::Starts]
                .into_iter()
                .filter(|&side| side_filter.allows(side))
                .filter(|&side| config.accepts(record.count(side), record.length()))
                .filter(|&side| {
                    query
                        .as_deref()
                        .is_none_or(|q| side.anchors(record.pattern(), q))
                })
                .map(|side| DrillablePattern::from_record(record, side))
                .collect::<Vec<_>>()
        })
        .collect();

    debug!(
        records = records.len(),
        drills = drills.len(),
        %side_filter,
        "drill set built"
    );

    drills
}

/// Find a drillable pattern by key
#[must_use]
pub fn resolve<'a>(drills: &'a [DrillablePattern], key: &DrillKey) -> Option<&'a DrillablePattern> {
    drills.iter().find(|drill| drill.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{AffixIndex, Vocabulary, aggregate};
    use crate::wordlists::loader::words_from_slice;

    fn records(words: &[&str], vocab: &[(&str, usize)]) -> Vec<PatternRecord> {
        let words = words_from_slice(words);
        let index = AffixIndex::build(&words);
        aggregate(&index, &Vocabulary::from_pairs(vocab.iter().copied()))
    }

    fn keys(drills: &[DrillablePattern]) -> Vec<String> {
        drills.iter().map(|d| d.key().to_string()).collect()
    }

    #[test]
    fn ing_example_is_drillable() {
        let records = records(&["running", "jumping", "swimming", "walking"], &[("ing", 3)]);
        let drills = build_drill_set(&records);

        assert_eq!(drills.len(), 1);
        assert_eq!(drills[0].pattern(), "ing");
        assert_eq!(drills[0].side(), Side::Ends);
        assert_eq!(drills[0].count(), 4);
        assert_eq!(drills[0].length(), 3);
    }

    #[test]
    fn short_patterns_are_skipped() {
        let records = records(&["undo", "untie", "unfair"], &[("un", 2)]);
        assert!(build_drill_set(&records).is_empty());
    }

    #[test]
    fn side_needs_two_words() {
        // "ter" ends one word and starts one word: total 2 but each side has 1
        let records = records(&["painter", "terminal"], &[("ter", 3)]);
        assert_eq!(records.len(), 1);
        assert!(build_drill_set(&records).is_empty());
    }

    #[test]
    fn oversized_sides_are_skipped() {
        let words: Vec<String> = (0..16).map(|i| format!("w{i:02}ing")).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let records = records(&refs, &[("ing", 3)]);

        assert_eq!(records[0].ends_count(), 16);
        assert!(build_drill_set(&records).is_empty());
    }

    #[test]
    fn ends_before_starts_for_same_record() {
        let records = records(
            &["painter", "writer", "terminal", "termite"],
            &[("ter", 3)],
        );
        let drills = build_drill_set(&records);
        assert_eq!(keys(&drills), ["-ter", "ter-"]);
    }

    #[test]
    fn side_filter_restricts_emission() {
        let records = records(
            &["painter", "writer", "terminal", "termite"],
            &[("ter", 3)],
        );
        let config = DrillConfig::default();

        let ends = build_drill_set_with(&records, SideFilter::Ends, None, &config);
        assert_eq!(keys(&ends), ["-ter"]);

        let starts = build_drill_set_with(&records, SideFilter::Starts, None, &config);
        assert_eq!(keys(&starts), ["ter-"]);
    }

    #[test]
    fn affix_query_tests_each_side_on_its_own_end() {
        let records = records(
            &["painter", "writer", "terminal", "termite"],
            &[("ter", 3)],
        );
        let config = DrillConfig::default();

        // "er" ends "ter" but does not start it
        let drills = build_drill_set_with(&records, SideFilter::All, Some(" ER "), &config);
        assert_eq!(keys(&drills), ["-ter"]);

        // "te" starts "ter" but does not end it
        let drills = build_drill_set_with(&records, SideFilter::All, Some("te"), &config);
        assert_eq!(keys(&drills), ["ter-"]);

        let drills = build_drill_set_with(&records, SideFilter::All, Some("ter"), &config);
        assert_eq!(keys(&drills), ["-ter", "ter-"]);

        let drills = build_drill_set_with(&records, SideFilter::All, Some(""), &config);
        assert_eq!(drills.len(), 2);
    }

    #[test]
    fn follows_record_order() {
        let records = records(
            &["walking", "talking", "reading", "kindness", "sadness"],
            &[("ing", 3), ("ness", 4)],
        );
        let drills = build_drill_set(&records);
        assert_eq!(keys(&drills), ["-ness", "-ing"]);
    }

    #[test]
    fn resolve_by_key() {
        let records = records(&["walking", "talking"], &[("ing", 3)]);
        let drills = build_drill_set(&records);

        let found = resolve(&drills, &DrillKey::new("ING", Side::Ends));
        assert!(found.is_some());
        assert!(resolve(&drills, &DrillKey::new("ing", Side::Starts)).is_none());
    }

    #[test]
    fn fragment_strips_pattern() {
        let records = records(&["Walking", "talking", "preview", "prefix"], &[("ing", 3), ("pre", 3)]);
        let drills = build_drill_set(&records);

        let ing = resolve(&drills, &DrillKey::new("ing", Side::Ends)).unwrap();
        assert_eq!(ing.fragment_of(&ing.words()[0]), "walk");

        let pre = resolve(&drills, &DrillKey::new("pre", Side::Starts)).unwrap();
        assert_eq!(pre.fragment_of(&pre.words()[0]), "view");
        assert_eq!(pre.find_word("PREFIX").map(Word::text), Some("prefix"));
    }
}
