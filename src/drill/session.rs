//! Learning session engine
//!
//! A session starts idle, where the user builds an ordered selection of drill
//! keys. Starting it picks a protocol:
//!
//! - **Find words**: the user types fragments that, joined with the pattern,
//!   form words of the challenge. Each distinct candidate counts once.
//! - **Repeat after me**: each word is typed while visible until it has been
//!   repeated enough times, then once more from memory.
//!
//! Session-wide counters survive challenge changes; per-challenge progress is
//! reset by `advance`. Everything is cleared by `reset`.

use super::snapshot::{ProtocolSnapshot, SessionSnapshot};
use super::{DrillKey, DrillablePattern, resolve};
use crate::config::SessionConfig;
use crate::core::Word;
use crate::error::SessionError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::debug;

/// Drill protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrillMode {
    #[default]
    FindWords,
    RepeatAfterMe,
}

impl DrillMode {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::FindWords => Self::RepeatAfterMe,
            Self::RepeatAfterMe => Self::FindWords,
        }
    }
}

impl fmt::Display for DrillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindWords => f.write_str("find words"),
            Self::RepeatAfterMe => f.write_str("repeat after me"),
        }
    }
}

impl std::str::FromStr for DrillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "find" | "find-words" | "findwords" => Ok(Self::FindWords),
            "repeat" | "repeat-after-me" | "repeatafterme" => Ok(Self::RepeatAfterMe),
            other => Err(format!("Invalid drill mode: {other} (expected find or repeat)")),
        }
    }
}

/// Result of a find-words guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Blank input, wrong protocol, or answers already revealed
    Ignored,
    /// Candidate was tried before; nothing counted
    Duplicate,
    Correct(Word),
    Incorrect,
}

/// Result of a repeat-after-me submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatOutcome {
    /// Blank input, wrong protocol, or challenge already completed
    Ignored,
    /// Visible word typed correctly, `count` repetitions so far
    Repeated { count: u8 },
    /// Enough repetitions; the word is now hidden
    Hidden,
    /// Hidden word recalled; `completed` when it was the last word
    Recalled { completed: bool },
    Incorrect,
}

#[derive(Debug, Clone, Default)]
struct FindProgress {
    found: FxHashSet<String>,
    attempted: FxHashSet<String>,
    revealed: bool,
}

#[derive(Debug, Clone, Default)]
struct RepeatProgress {
    word_index: usize,
    repeat_count: u8,
    hide_word: bool,
}

impl RepeatProgress {
    fn next_word(&mut self) {
        self.word_index += 1;
        self.repeat_count = 0;
        self.hide_word = false;
    }
}

#[derive(Debug, Clone)]
enum Protocol {
    Find(FindProgress),
    Repeat(RepeatProgress),
}

impl Protocol {
    fn fresh(mode: DrillMode) -> Self {
        match mode {
            DrillMode::FindWords => Self::Find(FindProgress::default()),
            DrillMode::RepeatAfterMe => Self::Repeat(RepeatProgress::default()),
        }
    }

    const fn mode(&self) -> DrillMode {
        match self {
            Self::Find(_) => DrillMode::FindWords,
            Self::Repeat(_) => DrillMode::RepeatAfterMe,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveState {
    challenge_index: usize,
    correct_answers: usize,
    total_attempts: usize,
    protocol: Protocol,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Active(ActiveState),
}

/// Learning session over a drill set
///
/// # Examples
/// ```
/// use affix_drill::drill::{DrillMode, GuessOutcome, Session, build_drill_set};
/// use affix_drill::index::{AffixIndex, Vocabulary, aggregate};
/// use affix_drill::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["walking", "talking"]);
/// let records = aggregate(&AffixIndex::build(&words), &Vocabulary::from_pairs([("ing", 3)]));
/// let mut session = Session::new(build_drill_set(&records));
///
/// session.select_all();
/// session.start(DrillMode::FindWords).unwrap();
/// assert!(matches!(session.submit_guess("walk"), Ok(GuessOutcome::Correct(_))));
/// assert_eq!(session.snapshot().correct_answers, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    drills: Vec<DrillablePattern>,
    selected: Vec<DrillKey>,
    phase: Phase,
}

impl Session {
    #[must_use]
    pub fn new(drills: Vec<DrillablePattern>) -> Self {
        Self::with_config(drills, SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(drills: Vec<DrillablePattern>, config: SessionConfig) -> Self {
        Self {
            config: SessionConfig {
                repetitions_to_hide: config.repetitions_to_hide.max(1),
            },
            drills,
            selected: Vec::new(),
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn drills(&self) -> &[DrillablePattern] {
        &self.drills
    }

    #[must_use]
    pub fn selected(&self) -> &[DrillKey] {
        &self.selected
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    #[must_use]
    pub const fn mode(&self) -> Option<DrillMode> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Active(state) => Some(state.protocol.mode()),
        }
    }

    /// Swap in a rebuilt drill set
    ///
    /// While idle, selected keys missing from the new set are dropped. During a
    /// session they are kept, and operations on them report an unresolved
    /// challenge.
    pub fn replace_drill_set(&mut self, drills: Vec<DrillablePattern>) {
        self.drills = drills;
        if !self.is_active() {
            let drills = &self.drills;
            self.selected.retain(|key| resolve(drills, key).is_some());
        }
    }

    // Selection, only while idle

    #[must_use]
    pub fn is_selected(&self, key: &DrillKey) -> bool {
        self.selected.contains(key)
    }

    /// Add a key to the end of the selection; false if active, unknown or present
    pub fn select(&mut self, key: &DrillKey) -> bool {
        if self.is_active() || self.is_selected(key) || resolve(&self.drills, key).is_none() {
            return false;
        }
        self.selected.push(key.clone());
        true
    }

    pub fn deselect(&mut self, key: &DrillKey) -> bool {
        if self.is_active() {
            return false;
        }
        let before = self.selected.len();
        self.selected.retain(|k| k != key);
        self.selected.len() != before
    }

    /// Flip a key's membership, returning whether it is now selected
    pub fn toggle(&mut self, key: &DrillKey) -> bool {
        if self.is_selected(key) {
            !self.deselect(key)
        } else {
            self.select(key)
        }
    }

    /// Select every drill in drill set order
    pub fn select_all(&mut self) {
        if self.is_active() {
            return;
        }
        self.selected = self.drills.iter().map(|d| d.key().clone()).collect();
    }

    /// Replace the selection with up to `count` random drills
    pub fn select_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        if self.is_active() {
            return;
        }
        self.selected = self
            .drills
            .choose_multiple(rng, count)
            .map(|d| d.key().clone())
            .collect();
    }

    pub fn clear_selection(&mut self) {
        if !self.is_active() {
            self.selected.clear();
        }
    }

    // Lifecycle

    /// Start (or restart) a session over the current selection
    ///
    /// # Errors
    /// Returns `SessionError::EmptySelection` when nothing is selected; the
    /// session is left untouched.
    pub fn start(&mut self, mode: DrillMode) -> Result<(), SessionError> {
        if self.selected.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        self.phase = Phase::Active(ActiveState {
            challenge_index: 0,
            correct_answers: 0,
            total_attempts: 0,
            protocol: Protocol::fresh(mode),
        });

        debug!(patterns = self.selected.len(), %mode, "session started");
        Ok(())
    }

    /// Return to idle, clearing the selection and every counter
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.selected.clear();
        debug!("session reset");
    }

    /// Move to the next selected pattern, clearing per-challenge progress
    ///
    /// # Errors
    /// Returns `SessionError::NotActive` while idle.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        let Phase::Active(state) = &mut self.phase else {
            return Err(SessionError::NotActive);
        };

        state.challenge_index += 1;
        state.protocol = Protocol::fresh(state.protocol.mode());

        debug!(challenge_index = state.challenge_index, "challenge advanced");
        Ok(())
    }

    // Challenge resolution

    fn current_key(&self) -> Option<&DrillKey> {
        let Phase::Active(state) = &self.phase else {
            return None;
        };
        if self.selected.is_empty() {
            return None;
        }
        self.selected.get(state.challenge_index % self.selected.len())
    }

    /// The active challenge
    ///
    /// # Errors
    /// `NotActive` while idle, `UnresolvedChallenge` when the selected key is no
    /// longer in the drill set.
    pub fn current_challenge(&self) -> Result<&DrillablePattern, SessionError> {
        let key = self.current_key().ok_or(SessionError::NotActive)?;
        resolve(&self.drills, key).ok_or_else(|| SessionError::UnresolvedChallenge {
            pattern: key.pattern.clone(),
            side: key.side,
        })
    }

    // Find-words protocol

    /// Submit a fragment; the pattern is attached on its side to form the candidate
    ///
    /// # Errors
    /// `NotActive` while idle, `UnresolvedChallenge` when the challenge no longer
    /// resolves. Neither changes any state.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, SessionError> {
        let fragment = raw.trim().to_lowercase();
        if fragment.is_empty() {
            return if self.is_active() {
                Ok(GuessOutcome::Ignored)
            } else {
                Err(SessionError::NotActive)
            };
        }

        let challenge = self.current_challenge()?;
        let candidate = challenge.side().complete(&fragment, challenge.pattern());
        let matched = challenge.find_word(&candidate).cloned();

        let Phase::Active(state) = &mut self.phase else {
            return Err(SessionError::NotActive);
        };
        let Protocol::Find(progress) = &mut state.protocol else {
            return Ok(GuessOutcome::Ignored);
        };
        if progress.revealed {
            return Ok(GuessOutcome::Ignored);
        }
        if progress.attempted.contains(&candidate) {
            return Ok(GuessOutcome::Duplicate);
        }

        progress.attempted.insert(candidate.clone());
        state.total_attempts += 1;

        match matched {
            Some(word) if progress.found.insert(candidate) => {
                state.correct_answers += 1;
                Ok(GuessOutcome::Correct(word))
            }
            _ => Ok(GuessOutcome::Incorrect),
        }
    }

    /// Show the answers; giving up without a single find costs one attempt
    ///
    /// Returns whether the penalty was applied. Revealing twice, or in repeat
    /// mode, does nothing.
    ///
    /// # Errors
    /// Returns `SessionError::NotActive` while idle.
    pub fn reveal(&mut self) -> Result<bool, SessionError> {
        let Phase::Active(state) = &mut self.phase else {
            return Err(SessionError::NotActive);
        };
        let Protocol::Find(progress) = &mut state.protocol else {
            return Ok(false);
        };
        if progress.revealed {
            return Ok(false);
        }

        progress.revealed = true;
        if progress.found.is_empty() {
            state.total_attempts += 1;
            return Ok(true);
        }
        Ok(false)
    }

    // Repeat-after-me protocol

    /// Type the current word
    ///
    /// # Errors
    /// `NotActive` while idle, `UnresolvedChallenge` when the challenge no longer
    /// resolves. Neither changes any state.
    pub fn submit_repetition(&mut self, raw: &str) -> Result<RepeatOutcome, SessionError> {
        if raw.trim().is_empty() {
            return if self.is_active() {
                Ok(RepeatOutcome::Ignored)
            } else {
                Err(SessionError::NotActive)
            };
        }

        let threshold = self.config.repetitions_to_hide;
        let challenge = self.current_challenge()?;
        let total = challenge.count();
        let word_index = match &self.phase {
            Phase::Active(ActiveState {
                protocol: Protocol::Repeat(progress),
                ..
            }) => progress.word_index,
            _ => return Ok(RepeatOutcome::Ignored),
        };
        let Some(word) = challenge.words().get(word_index) else {
            return Ok(RepeatOutcome::Ignored);
        };
        let correct = word.matches(raw);

        let Phase::Active(state) = &mut self.phase else {
            return Err(SessionError::NotActive);
        };
        let Protocol::Repeat(progress) = &mut state.protocol else {
            return Ok(RepeatOutcome::Ignored);
        };

        state.total_attempts += 1;
        if !correct {
            return Ok(RepeatOutcome::Incorrect);
        }

        if progress.hide_word {
            progress.next_word();
            state.correct_answers += 1;
            return Ok(RepeatOutcome::Recalled {
                completed: progress.word_index >= total,
            });
        }

        progress.repeat_count += 1;
        if progress.repeat_count >= threshold {
            progress.hide_word = true;
            progress.repeat_count = 0;
            return Ok(RepeatOutcome::Hidden);
        }
        Ok(RepeatOutcome::Repeated {
            count: progress.repeat_count,
        })
    }

    /// Move past the current word without scoring
    ///
    /// Returns false when there is nothing left to skip or the session is not in
    /// repeat mode.
    ///
    /// # Errors
    /// `NotActive` while idle, `UnresolvedChallenge` when the challenge no longer
    /// resolves.
    pub fn skip(&mut self) -> Result<bool, SessionError> {
        let total = self.current_challenge()?.count();
        let Phase::Active(state) = &mut self.phase else {
            return Err(SessionError::NotActive);
        };
        let Protocol::Repeat(progress) = &mut state.protocol else {
            return Ok(false);
        };
        if progress.word_index >= total {
            return Ok(false);
        }
        progress.next_word();
        Ok(true)
    }

    /// Every word of the current challenge is done
    #[must_use]
    pub fn is_challenge_complete(&self) -> bool {
        let (Phase::Active(state), Ok(challenge)) = (&self.phase, self.current_challenge()) else {
            return false;
        };
        match &state.protocol {
            Protocol::Find(progress) => progress.found.len() >= challenge.distinct_count(),
            Protocol::Repeat(progress) => progress.word_index >= challenge.count(),
        }
    }

    /// Word currently being repeated, if any
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        let Phase::Active(ActiveState {
            protocol: Protocol::Repeat(progress),
            ..
        }) = &self.phase
        else {
            return None;
        };
        self.current_challenge()
            .ok()?
            .words()
            .get(progress.word_index)
    }

    /// Copy out the full session state
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let Phase::Active(state) = &self.phase else {
            return SessionSnapshot {
                selected: self.selected.clone(),
                mode: None,
                challenge_index: 0,
                correct_answers: 0,
                total_attempts: 0,
                challenge: None,
                protocol: None,
            };
        };

        let challenge = self.current_challenge().ok().cloned();
        let protocol = match &state.protocol {
            Protocol::Find(progress) => ProtocolSnapshot::FindWords {
                found: sorted(&progress.found),
                attempted: sorted(&progress.attempted),
                revealed: progress.revealed,
            },
            Protocol::Repeat(progress) => ProtocolSnapshot::RepeatAfterMe {
                word_index: progress.word_index,
                repeat_count: progress.repeat_count,
                hide_word: progress.hide_word,
                completed: challenge
                    .as_ref()
                    .is_some_and(|c| progress.word_index >= c.count()),
            },
        };

        SessionSnapshot {
            selected: self.selected.clone(),
            mode: Some(state.protocol.mode()),
            challenge_index: state.challenge_index,
            correct_answers: state.correct_answers,
            total_attempts: state.total_attempts,
            challenge,
            protocol: Some(protocol),
        }
    }
}

fn sorted(set: &FxHashSet<String>) -> Vec<String> {
    let mut items: Vec<String> = set.iter().cloned().collect();
    items.sort_unstable();
    items
}
