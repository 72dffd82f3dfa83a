//! Pattern browsing command
//!
//! Filters the aggregated records and returns one page of them.

use crate::browse::{Page, PatternBrowser, PatternQuery};
use crate::catalog::Catalog;
use crate::index::PatternRecord;

/// Result of browsing patterns
pub struct BrowseResult {
    pub query: PatternQuery,
    pub page: Page<PatternRecord>,
    pub page_size: usize,
}

/// Browse the catalog's records with a query
///
/// `page` is 1-indexed and clamped to the available pages.
#[must_use]
pub fn browse_patterns(catalog: &Catalog, query: PatternQuery, page: usize) -> BrowseResult {
    let mut browser = PatternBrowser::new(&catalog.config().browse);
    browser.set_query(query);
    browser.go_to(page);

    let view = browser.view(catalog.records());
    let page = Page {
        items: view.items.into_iter().cloned().collect(),
        number: view.number,
        total_pages: view.total_pages,
        total_items: view.total_items,
    };

    BrowseResult {
        query: browser.query().clone(),
        page,
        page_size: browser.page_size(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, BrowseConfig};
    use crate::core::Rarity;
    use crate::index::Vocabulary;
    use crate::wordlists::loader::words_from_slice;

    fn catalog(page_size: usize) -> Catalog {
        let words = words_from_slice(&[
            "running", "jumping", "swimming", "walking", "undo", "untie", "redo", "return",
        ]);
        let vocab = Vocabulary::from_pairs([("ing", 3), ("un", 2), ("re", 2)]);
        let config = AppConfig {
            browse: BrowseConfig { page_size },
            ..AppConfig::default()
        };
        Catalog::build(&words, vocab, config).unwrap()
    }

    #[test]
    fn browse_everything() {
        let result = browse_patterns(&catalog(100), PatternQuery::default(), 1);
        assert_eq!(result.page.total_items, 3);
        assert_eq!(result.page.total_pages, 1);
        assert_eq!(result.page_size, 100);
    }

    #[test]
    fn browse_with_filters() {
        let query = PatternQuery::default()
            .with_length(3)
            .with_rarity(Rarity::UltraRare);
        let result = browse_patterns(&catalog(100), query, 1);

        assert_eq!(result.page.items.len(), 1);
        assert_eq!(result.page.items[0].pattern(), "ing");
        assert_eq!(result.page.items[0].total_count(), 4);
    }

    #[test]
    fn browse_later_page() {
        let result = browse_patterns(&catalog(2), PatternQuery::default(), 2);
        assert_eq!(result.page.number, 2);
        assert_eq!(result.page.items.len(), 1);
        assert_eq!(result.page.items[0].pattern(), "ing");
    }
}
