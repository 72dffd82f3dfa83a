//! Record filtering for pattern browsing

use crate::core::Rarity;
use crate::index::PatternRecord;

/// Conjunctive filter over aggregated records
///
/// Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternQuery {
    /// Keeps patterns whose own text starts or ends with this
    pub text: Option<String>,
    /// Exact declared pattern length
    pub length: Option<usize>,
    pub rarity: Option<Rarity>,
}

impl PatternQuery {
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub const fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// Folded query text, `None` when unset or blank
    fn folded_text(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded_text().is_none() && self.length.is_none() && self.rarity.is_none()
    }

    #[must_use]
    pub fn matches(&self, record: &PatternRecord) -> bool {
        self.matches_folded(record, self.folded_text().as_deref())
    }

    fn matches_folded(&self, record: &PatternRecord, text: Option<&str>) -> bool {
        if let Some(text) = text
            && !(record.pattern().ends_with(text) || record.pattern().starts_with(text))
        {
            return false;
        }
        if let Some(length) = self.length
            && record.length() != length
        {
            return false;
        }
        if let Some(rarity) = self.rarity
            && record.rarity() != rarity
        {
            return false;
        }
        true
    }
}

/// Apply a query, keeping record order
#[must_use]
pub fn filter_records<'a>(
    records: &'a [PatternRecord],
    query: &PatternQuery,
) -> Vec<&'a PatternRecord> {
    let text = query.folded_text();
    records
        .iter()
        .filter(|record| query.matches_folded(record, text.as_deref()))
        .collect()
}
