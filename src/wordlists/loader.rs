//! Word list and vocabulary loading utilities
//!
//! Word lists are plain text, one word per line. Vocabularies are either a JSON
//! object mapping each pattern to a record with a `length` field, or plain text
//! lines of `pattern [length]`. Blank lines and `#` comments are skipped in text
//! files.

use crate::core::Word;
use crate::error::LoadError;
use crate::index::Vocabulary;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Vocabulary record as stored on disk; extra fields are ignored
#[derive(Debug, Deserialize)]
struct PatternInfo {
    length: usize,
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert raw entries to words, logging how many were rejected
fn collect_words<'a>(entries: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    let mut rejected = 0usize;
    let words: Vec<Word> = entries
        .into_iter()
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(err) => {
                rejected += 1;
                debug!(entry, %err, "word list entry rejected");
                None
            }
        })
        .collect();

    if rejected > 0 {
        warn!(rejected, kept = words.len(), "word list entries rejected");
    }
    words
}

fn content_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Load words from a file
///
/// Entries that are not valid words are skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::EmptyWordList` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use affix_drill::wordlists::loader::load_words_from_file;
///
/// let words = load_words_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let words = parse_words(&read(path)?);

    if words.is_empty() {
        return Err(LoadError::EmptyWordList);
    }

    debug!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(words)
}

/// Parse a word list from text
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    collect_words(content_lines(content))
}

/// Load a pattern vocabulary, choosing the format by file extension
///
/// `.json` files are parsed as JSON objects, anything else as text lines.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, is malformed, or is empty.
pub fn load_vocabulary_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let vocabulary = if is_json {
        parse_vocabulary_json(&content).map_err(|e| match e {
            VocabularyParseError::Syntax(source) => LoadError::Json {
                path: path.to_path_buf(),
                source,
            },
            VocabularyParseError::Load(err) => err,
        })?
    } else {
        parse_vocabulary_text(&content)?
    };

    if vocabulary.is_empty() {
        return Err(LoadError::EmptyVocabulary);
    }

    debug!(path = %path.display(), patterns = vocabulary.len(), "vocabulary loaded");
    Ok(vocabulary)
}

/// Failure while parsing a JSON vocabulary
#[derive(Debug, Error)]
pub enum VocabularyParseError {
    /// Not a JSON object at all
    #[error("malformed vocabulary JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    /// Valid JSON with an unusable entry
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Parse a JSON vocabulary: `{"ing": {"length": 3}, ...}`
///
/// Entry order follows the document.
///
/// # Errors
///
/// Returns `VocabularyParseError::Syntax` for malformed JSON and
/// `VocabularyParseError::Load` for entries without a usable `length`.
pub fn parse_vocabulary_json(content: &str) -> Result<Vocabulary, VocabularyParseError> {
    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(content).map_err(VocabularyParseError::Syntax)?;

    let mut pairs = Vec::with_capacity(map.len());
    for (pattern, value) in map {
        let info: PatternInfo = serde_json::from_value(value).map_err(|e| {
            VocabularyParseError::Load(LoadError::InvalidVocabularyEntry {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })
        })?;
        pairs.push((pattern, info.length));
    }

    Ok(Vocabulary::from_pairs(pairs))
}

/// Parse a text vocabulary, one `pattern [length]` per line
///
/// A missing length defaults to the pattern's character count.
///
/// # Errors
///
/// Returns `LoadError::InvalidVocabularyEntry` for a length that is not a number
/// or for trailing fields.
pub fn parse_vocabulary_text(content: &str) -> Result<Vocabulary, LoadError> {
    let mut pairs = Vec::new();

    for line in content_lines(content) {
        let mut parts = line.split_whitespace();
        let Some(pattern) = parts.next() else {
            continue;
        };
        let length = match parts.next() {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| LoadError::InvalidVocabularyEntry {
                    pattern: pattern.to_string(),
                    reason: format!("length '{raw}': {e}"),
                })?,
            None => pattern.chars().count(),
        };
        if let Some(extra) = parts.next() {
            return Err(LoadError::InvalidVocabularyEntry {
                pattern: pattern.to_string(),
                reason: format!("unexpected field '{extra}'"),
            });
        }
        pairs.push((pattern.to_string(), length));
    }

    Ok(Vocabulary::from_pairs(pairs))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use affix_drill::wordlists::loader::words_from_slice;
/// use affix_drill::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_words(slice.iter().copied())
}

/// Convert embedded (pattern, length) pairs to a vocabulary
#[must_use]
pub fn vocabulary_from_slice(slice: &[(&str, usize)]) -> Vocabulary {
    Vocabulary::from_pairs(slice.iter().copied())
}
