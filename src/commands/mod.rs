//! Command implementations

pub mod browse;
pub mod simple;

pub use browse::{BrowseResult, browse_patterns};
pub use simple::{run_simple, run_simple_with};
