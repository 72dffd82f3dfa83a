//! Affix indexing and pattern aggregation
//!
//! The index answers "which words end or start with S" for every short substring;
//! aggregation turns it into one record per vocabulary pattern.

mod affix;
mod aggregate;
mod vocabulary;

pub use affix::AffixIndex;
pub use aggregate::{PatternRecord, aggregate, aggregate_with};
pub use vocabulary::{VocabEntry, Vocabulary};
