//! Rarity tiers for pattern occurrence counts
//!
//! Thresholds are inclusive upper bounds:
//! - ultra-rare: 0-5
//! - rare: 6-10
//! - uncommon: 11-50
//! - common: 51-200
//! - very-common: 201+

use std::fmt;
use std::str::FromStr;

/// Rarity tier of a pattern, from rarest to most frequent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    UltraRare,
    Rare,
    Uncommon,
    Common,
    VeryCommon,
}

impl Rarity {
    /// All tiers, rarest first
    pub const ALL: [Self; 5] = [
        Self::UltraRare,
        Self::Rare,
        Self::Uncommon,
        Self::Common,
        Self::VeryCommon,
    ];

    /// Classify an occurrence count
    ///
    /// # Examples
    /// ```
    /// use affix_drill::core::Rarity;
    ///
    /// assert_eq!(Rarity::classify(4), Rarity::UltraRare);
    /// assert_eq!(Rarity::classify(201), Rarity::VeryCommon);
    /// ```
    #[must_use]
    pub const fn classify(count: usize) -> Self {
        match count {
            0..=5 => Self::UltraRare,
            6..=10 => Self::Rare,
            11..=50 => Self::Uncommon,
            51..=200 => Self::Common,
            _ => Self::VeryCommon,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UltraRare => "ultra-rare",
            Self::Rare => "rare",
            Self::Uncommon => "uncommon",
            Self::Common => "common",
            Self::VeryCommon => "very-common",
        }
    }

    /// Position in `Rarity::ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|tier| tier.label() == normalized)
            .ok_or_else(|| format!("Invalid rarity: {s}"))
    }
}
