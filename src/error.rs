//! Error taxonomy
//!
//! Load failures are fatal for the whole catalog. Session errors are local and
//! never change session state.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load or validate the word list or pattern vocabulary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed vocabulary {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid vocabulary entry '{pattern}': {reason}")]
    InvalidVocabularyEntry { pattern: String, reason: String },

    #[error("word list is empty")]
    EmptyWordList,

    #[error("pattern vocabulary is empty")]
    EmptyVocabulary,
}

/// Rejected learning session operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no patterns selected")]
    EmptySelection,

    #[error("no session is active")]
    NotActive,

    #[error("selected pattern {pattern} ({side}) is not in the current drill set")]
    UnresolvedChallenge {
        pattern: String,
        side: crate::core::Side,
    },
}
