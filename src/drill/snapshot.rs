//! Read-only copies of learning session state for presentation

use super::{DrillKey, DrillMode, DrillablePattern};

/// Protocol-specific progress within the current challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolSnapshot {
    FindWords {
        /// Lowercase words found so far, sorted
        found: Vec<String>,
        /// Every distinct candidate tried, sorted
        attempted: Vec<String>,
        revealed: bool,
    },
    RepeatAfterMe {
        word_index: usize,
        repeat_count: u8,
        hide_word: bool,
        /// Every word of the challenge has been recalled or skipped
        completed: bool,
    },
}

/// Copy of everything needed to render the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub selected: Vec<DrillKey>,
    /// `None` while idle
    pub mode: Option<DrillMode>,
    pub challenge_index: usize,
    pub correct_answers: usize,
    pub total_attempts: usize,
    /// Resolved current challenge; `None` while idle or when it no longer resolves
    pub challenge: Option<DrillablePattern>,
    pub protocol: Option<ProtocolSnapshot>,
}

impl SessionSnapshot {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.mode.is_some()
    }

    /// Correct answers as a percentage of attempts
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        (self.total_attempts > 0)
            .then(|| self.correct_answers as f64 / self.total_attempts as f64 * 100.0)
    }

    /// 1-indexed position of the challenge within the selection
    #[must_use]
    pub fn challenge_position(&self) -> Option<usize> {
        (!self.selected.is_empty()).then(|| self.challenge_index % self.selected.len() + 1)
    }

    /// How many full passes over the selection have been started
    #[must_use]
    pub fn round(&self) -> usize {
        if self.selected.is_empty() {
            0
        } else {
            self.challenge_index / self.selected.len() + 1
        }
    }

    /// (done, total) words for the current challenge
    ///
    /// Find mode counts distinct spellings, repeat mode counts every entry.
    #[must_use]
    pub fn challenge_progress(&self) -> Option<(usize, usize)> {
        let challenge = self.challenge.as_ref()?;
        match self.protocol.as_ref()? {
            ProtocolSnapshot::FindWords { found, .. } => {
                Some((found.len(), challenge.distinct_count()))
            }
            ProtocolSnapshot::RepeatAfterMe { word_index, .. } => {
                let total = challenge.count();
                Some(((*word_index).min(total), total))
            }
        }
    }
}
