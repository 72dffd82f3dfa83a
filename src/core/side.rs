//! Which end of a word a pattern is anchored to

use std::fmt;
use std::str::FromStr;

/// Anchor side of a pattern occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Pattern is a word ending (suffix-like)
    Ends,
    /// Pattern is a word beginning (prefix-like)
    Starts,
}

impl Side {
    /// Build the full word from a user-supplied fragment
    ///
    /// # Examples
    /// ```
    /// use affix_drill::core::Side;
    ///
    /// assert_eq!(Side::Ends.complete("runn", "ing"), "running");
    /// assert_eq!(Side::Starts.complete("do", "un"), "undo");
    /// ```
    #[must_use]
    pub fn complete(self, fragment: &str, pattern: &str) -> String {
        match self {
            Self::Ends => format!("{fragment}{pattern}"),
            Self::Starts => format!("{pattern}{fragment}"),
        }
    }

    /// Whether `text` carries `affix` on this side
    #[must_use]
    pub fn anchors(self, text: &str, affix: &str) -> bool {
        match self {
            Self::Ends => text.ends_with(affix),
            Self::Starts => text.starts_with(affix),
        }
    }

    /// Display form of a pattern on this side, e.g. `-ing` or `un-`
    #[must_use]
    pub fn decorate(self, pattern: &str) -> String {
        match self {
            Self::Ends => format!("-{pattern}"),
            Self::Starts => format!("{pattern}-"),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ends => "ends",
            Self::Starts => "starts",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Side restriction for building drill sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideFilter {
    Ends,
    Starts,
    #[default]
    All,
}

impl SideFilter {
    #[must_use]
    pub const fn allows(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Self::All, _) | (Self::Ends, Side::Ends) | (Self::Starts, Side::Starts)
        )
    }

    /// Cycle through the filters, used by the interactive selector
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Ends,
            Self::Ends => Self::Starts,
            Self::Starts => Self::All,
        }
    }
}

impl fmt::Display for SideFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ends => f.write_str("ends"),
            Self::Starts => f.write_str("starts"),
            Self::All => f.write_str("all"),
        }
    }
}

impl FromStr for SideFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ends" | "end" | "suffix" | "suffixes" => Ok(Self::Ends),
            "starts" | "start" | "prefix" | "prefixes" => Ok(Self::Starts),
            "all" | "both" => Ok(Self::All),
            other => Err(format!("Invalid side filter: {other} (expected ends, starts or all)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_orders_fragment_by_side() {
        assert_eq!(Side::Ends.complete("walk", "ing"), "walking");
        assert_eq!(Side::Starts.complete("view", "pre"), "preview");
    }

    #[test]
    fn anchors_checks_only_its_own_end() {
        assert!(Side::Ends.anchors("ness", "ss"));
        assert!(!Side::Ends.anchors("ness", "ne"));
        assert!(Side::Starts.anchors("ness", "ne"));
        assert!(!Side::Starts.anchors("ness", "ss"));
    }

    #[test]
    fn side_filter_allows() {
        assert!(SideFilter::All.allows(Side::Ends));
        assert!(SideFilter::All.allows(Side::Starts));
        assert!(SideFilter::Ends.allows(Side::Ends));
        assert!(!SideFilter::Ends.allows(Side::Starts));
        assert!(!SideFilter::Starts.allows(Side::Ends));
    }

    #[test]
    fn side_filter_parse() {
        assert_eq!("ENDS".parse::<SideFilter>(), Ok(SideFilter::Ends));
        assert_eq!("prefix".parse::<SideFilter>(), Ok(SideFilter::Starts));
        assert_eq!("all".parse::<SideFilter>(), Ok(SideFilter::All));
        assert!("middle".parse::<SideFilter>().is_err());
    }

    #[test]
    fn side_filter_cycles() {
        let f = SideFilter::All;
        assert_eq!(f.next().next().next(), SideFilter::All);
    }

    #[test]
    fn decorate_marks_anchor() {
        assert_eq!(Side::Ends.decorate("ing"), "-ing");
        assert_eq!(Side::Starts.decorate("un"), "un-");
    }
}
