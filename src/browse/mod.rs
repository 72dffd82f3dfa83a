//! Pattern browsing: filtering and pagination over aggregated records

mod browser;
mod filter;
mod paginate;

pub use browser::PatternBrowser;
pub use filter::{PatternQuery, filter_records};
pub use paginate::{Page, page_count, paginate};
