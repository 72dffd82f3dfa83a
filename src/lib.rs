//! Affix Drill
//!
//! Finds the prefixes and suffixes of a pattern vocabulary that actually occur
//! in a word list, ranks them by rarity, and quizzes the learner on them.
//!
//! # Quick Start
//!
//! ```rust
//! use affix_drill::config::AppConfig;
//! use affix_drill::core::SideFilter;
//! use affix_drill::drill::{DrillMode, GuessOutcome, Session};
//! use affix_drill::index::Vocabulary;
//! use affix_drill::catalog::Catalog;
//! use affix_drill::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["walking", "talking", "running"]);
//! let vocabulary = Vocabulary::from_pairs([("ing", 3)]);
//! let catalog = Catalog::build(&words, vocabulary, AppConfig::default()).unwrap();
//!
//! let mut session = Session::new(catalog.drill_set(SideFilter::All, None));
//! session.select_all();
//! session.start(DrillMode::FindWords).unwrap();
//!
//! // Type the missing part of a word ending in -ing
//! let outcome = session.submit_guess("walk").unwrap();
//! assert!(matches!(outcome, GuessOutcome::Correct(_)));
//! ```

// Core domain types
pub mod core;

// Explicit configuration records
pub mod config;

// Error types
pub mod error;

// Affix index and pattern aggregation
pub mod index;

// Filtering and pagination of pattern records
pub mod browse;

// Drill set and learning sessions
pub mod drill;

// Loaded inputs and derived data
pub mod catalog;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
