//! End-to-end checks through the public API: load, index, aggregate, browse,
//! drill.

use affix_drill::browse::{PatternQuery, filter_records, paginate};
use affix_drill::catalog::Catalog;
use affix_drill::config::AppConfig;
use affix_drill::core::{Rarity, Side, SideFilter};
use affix_drill::drill::{DrillMode, GuessOutcome, RepeatOutcome, Session, build_drill_set};
use affix_drill::error::{LoadError, SessionError};
use affix_drill::index::{AffixIndex, Vocabulary, aggregate};
use affix_drill::wordlists::loader::words_from_slice;
use std::io::Write;

const WORDS: &[&str] = &[
    "Running", "jumping", "swimming", "walking", "kindness", "sadness", "preview", "prefix",
    "undo", "untie", "unfold", "redo", "return", "A",
];

fn vocabulary() -> Vocabulary {
    Vocabulary::from_pairs([
        ("ing", 3),
        ("ness", 4),
        ("pre", 3),
        ("un", 2),
        ("re", 2),
        ("zzz", 3),
    ])
}

fn catalog() -> Catalog {
    Catalog::build(&words_from_slice(WORDS), vocabulary(), AppConfig::default()).unwrap()
}

#[test]
fn every_word_is_indexed_under_each_affix_length() {
    let words = words_from_slice(WORDS);
    let index = AffixIndex::build(&words);

    for word in &words {
        for len in 2..=word.len().min(8) {
            let ending = word.suffix(len).unwrap();
            let starting = word.prefix(len).unwrap();
            assert!(
                index.ending_with(ending).iter().any(|w| w.key() == word.key()),
                "{word} missing under ends '{ending}'"
            );
            assert!(
                index.starting_with(starting).iter().any(|w| w.key() == word.key()),
                "{word} missing under starts '{starting}'"
            );
        }
    }

    // Single-letter words have nothing to index
    assert!(index.ending_with("a").is_empty());
}

#[test]
fn multi_word_entries_are_indexed_too() {
    let words = words_from_slice(&["ice cream", "dream"]);
    assert_eq!(words.len(), 2);

    let index = AffixIndex::build(&words);
    assert_eq!(index.ending_with("eam").len(), 2);
    assert_eq!(index.starting_with("ice ").len(), 1);
}

#[test]
fn records_hold_their_count_invariants() {
    let catalog = catalog();
    let records = catalog.records();

    assert!(!records.is_empty());
    for record in records {
        assert_eq!(
            record.total_count(),
            record.ends_count() + record.starts_count()
        );
        assert!(record.total_count() >= 2);
    }
    assert!(records.iter().all(|r| r.pattern() != "zzz"));
}

#[test]
fn records_sort_by_count_and_keep_vocabulary_order_on_ties() {
    let catalog = catalog();
    let records = catalog.records();

    assert!(
        records
            .windows(2)
            .all(|pair| pair[0].total_count() <= pair[1].total_count())
    );

    // ness, pre and re all occur twice; vocabulary order decides
    let twos: Vec<&str> = records
        .iter()
        .filter(|r| r.total_count() == 2)
        .map(|r| r.pattern())
        .collect();
    assert_eq!(twos, ["ness", "pre", "re"]);
}

#[test]
fn rarity_boundaries() {
    let cases = [
        (5, Rarity::UltraRare),
        (6, Rarity::Rare),
        (10, Rarity::Rare),
        (11, Rarity::Uncommon),
        (50, Rarity::Uncommon),
        (51, Rarity::Common),
        (200, Rarity::Common),
        (201, Rarity::VeryCommon),
    ];
    for (count, tier) in cases {
        assert_eq!(Rarity::classify(count), tier, "count {count}");
    }
}

#[test]
fn find_words_scoring() {
    let mut session = Session::new(catalog().drill_set(SideFilter::Ends, Some("ing")));
    session.select_all();
    session.start(DrillMode::FindWords).unwrap();

    // Resubmitting the same candidate counts once
    assert!(matches!(session.submit_guess("run"), Ok(GuessOutcome::Correct(_))));
    assert_eq!(session.submit_guess(" RUN "), Ok(GuessOutcome::Duplicate));
    assert_eq!(session.snapshot().total_attempts, 1);

    for fragment in ["walk", "nope", "swimm", "jump"] {
        session.submit_guess(fragment).unwrap();
    }
    let snapshot = session.snapshot();
    assert_eq!(snapshot.correct_answers, 4);
    assert_eq!(snapshot.total_attempts, 5);
    assert!(session.is_challenge_complete());
}

#[test]
fn repeat_after_me_hides_after_three() {
    let mut session = Session::new(catalog().drill_set(SideFilter::Ends, Some("ing")));
    session.select_all();
    session.start(DrillMode::RepeatAfterMe).unwrap();

    assert_eq!(
        session.submit_repetition("running"),
        Ok(RepeatOutcome::Repeated { count: 1 })
    );
    assert_eq!(
        session.submit_repetition("Running"),
        Ok(RepeatOutcome::Repeated { count: 2 })
    );
    assert_eq!(session.submit_repetition("running"), Ok(RepeatOutcome::Hidden));
    assert_eq!(session.snapshot().correct_answers, 0);

    assert_eq!(
        session.submit_repetition("running"),
        Ok(RepeatOutcome::Recalled { completed: false })
    );
    let snapshot = session.snapshot();
    assert_eq!(snapshot.correct_answers, 1);
    assert_eq!(snapshot.total_attempts, 4);
    assert_eq!(session.current_word().map(|w| w.text()), Some("jumping"));
}

#[test]
fn ing_example_is_one_ultra_rare_ends_entry() {
    let words = words_from_slice(&["running", "jumping", "swimming", "walking"]);
    let records = aggregate(&AffixIndex::build(&words), &Vocabulary::from_pairs([("ing", 3)]));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].total_count(), 4);
    assert_eq!(records[0].rarity(), Rarity::UltraRare);

    let drills = build_drill_set(&records);
    assert_eq!(drills.len(), 1);
    assert_eq!(drills[0].side(), Side::Ends);
    assert_eq!(drills[0].count(), 4);

    // Filter engine returns exactly that record
    let query = PatternQuery::default()
        .with_length(3)
        .with_rarity(Rarity::UltraRare);
    let filtered = filter_records(&records, &query);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].pattern(), "ing");

    let page = paginate(&filtered, 1, 100);
    assert_eq!(page.total_items, 1);
}

#[test]
fn starting_without_selection_stays_idle() {
    let mut session = Session::new(catalog().drill_set(SideFilter::All, None));

    assert_eq!(
        session.start(DrillMode::FindWords),
        Err(SessionError::EmptySelection)
    );
    assert!(!session.is_active());
    assert!(!session.snapshot().is_active());
}

#[test]
fn catalog_loads_from_files() {
    let mut words = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(words, "# test words\nwalking\ntalking\n\nrunning").unwrap();

    let mut patterns = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(patterns, r#"{{"ing": {{"length": 3}}, "alk": {{"length": 3}}}}"#).unwrap();

    let catalog = Catalog::load(
        Some(words.path()),
        Some(patterns.path()),
        AppConfig::default(),
    )
    .unwrap();

    assert_eq!(catalog.index().word_count(), 3);
    let patterns: Vec<&str> = catalog.records().iter().map(|r| r.pattern()).collect();
    assert_eq!(patterns, ["alk", "ing"]);
}

#[test]
fn missing_input_builds_nothing() {
    let result = Catalog::load(
        Some(std::path::Path::new("/nonexistent/words.txt")),
        None,
        AppConfig::default(),
    );
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn embedded_catalog_is_usable() {
    let catalog = Catalog::embedded(AppConfig::default()).unwrap();
    let stats = catalog.stats();

    assert!(stats.records > 0);
    assert_eq!(stats.by_rarity.iter().sum::<usize>(), stats.records);
    assert!(stats.drillable_ends + stats.drillable_starts > 0);
}
