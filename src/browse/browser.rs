//! Stateful browsing cursor
//!
//! Holds the current query and page for a presentation layer. Any filter change
//! sends the cursor back to page 1.

use super::{Page, PatternQuery, filter_records, paginate};
use crate::config::BrowseConfig;
use crate::core::Rarity;
use crate::index::PatternRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBrowser {
    query: PatternQuery,
    page: usize,
    page_size: usize,
}

impl Default for PatternBrowser {
    fn default() -> Self {
        Self::new(&BrowseConfig::default())
    }
}

impl PatternBrowser {
    #[must_use]
    pub fn new(config: &BrowseConfig) -> Self {
        Self {
            query: PatternQuery::default(),
            page: 1,
            page_size: config.page_size.max(1),
        }
    }

    #[must_use]
    pub const fn query(&self) -> &PatternQuery {
        &self.query
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the whole query
    pub fn set_query(&mut self, query: PatternQuery) {
        if self.query != query {
            self.query = query;
            self.page = 1;
        }
    }

    pub fn set_text(&mut self, text: Option<String>) {
        let query = PatternQuery {
            text,
            ..self.query.clone()
        };
        self.set_query(query);
    }

    pub fn set_length(&mut self, length: Option<usize>) {
        let query = PatternQuery {
            length,
            ..self.query.clone()
        };
        self.set_query(query);
    }

    pub fn set_rarity(&mut self, rarity: Option<Rarity>) {
        let query = PatternQuery {
            rarity,
            ..self.query.clone()
        };
        self.set_query(query);
    }

    pub fn clear_filters(&mut self) {
        self.set_query(PatternQuery::default());
    }

    /// Jump to a page; clamped when the view is computed
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self, records: &[PatternRecord]) {
        let view = self.view(records);
        if view.has_next() {
            self.page = view.number + 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Filtered and paginated window for the current state
    #[must_use]
    pub fn view<'a>(&self, records: &'a [PatternRecord]) -> Page<&'a PatternRecord> {
        let filtered = filter_records(records, &self.query);
        paginate(&filtered, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{AffixIndex, Vocabulary, aggregate};
    use crate::wordlists::loader::words_from_slice;

    fn records() -> Vec<PatternRecord> {
        let words = words_from_slice(&[
            "walking", "talking", "undo", "untie", "redo", "return", "kindness", "sadness",
        ]);
        let index = AffixIndex::build(&words);
        let vocab = Vocabulary::from_pairs([("ing", 3), ("un", 2), ("re", 2), ("ness", 4)]);
        aggregate(&index, &vocab)
    }

    fn small_browser() -> PatternBrowser {
        PatternBrowser::new(&BrowseConfig { page_size: 2 })
    }

    #[test]
    fn pages_through_records() {
        let records = records();
        let mut browser = small_browser();

        let view = browser.view(&records);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 2);

        browser.next_page(&records);
        assert_eq!(browser.page(), 2);
        browser.next_page(&records);
        assert_eq!(browser.page(), 2);

        browser.previous_page();
        browser.previous_page();
        assert_eq!(browser.page(), 1);
    }

    #[test]
    fn filter_change_resets_page() {
        let records = records();
        let mut browser = small_browser();
        browser.go_to(2);

        browser.set_length(Some(2));
        assert_eq!(browser.page(), 1);

        browser.go_to(2);
        browser.set_rarity(Some(Rarity::UltraRare));
        assert_eq!(browser.page(), 1);

        browser.go_to(2);
        browser.set_text(Some("u".to_string()));
        assert_eq!(browser.page(), 1);

        let view = browser.view(&records);
        assert_eq!(view.total_items, 1);
        assert_eq!(view.items[0].pattern(), "un");
    }

    #[test]
    fn unchanged_filter_keeps_page() {
        let mut browser = small_browser();
        browser.set_length(Some(2));
        browser.go_to(2);
        browser.set_length(Some(2));
        assert_eq!(browser.page(), 2);
    }

    #[test]
    fn clear_filters_shows_everything() {
        let records = records();
        let mut browser = small_browser();
        browser.set_length(Some(4));
        assert_eq!(browser.view(&records).total_items, 1);

        browser.clear_filters();
        assert_eq!(browser.view(&records).total_items, records.len());
    }

    #[test]
    fn default_page_size_is_one_hundred() {
        assert_eq!(PatternBrowser::default().page_size(), 100);
    }
}
