//! Drill sets and learning sessions

mod builder;
mod session;
mod snapshot;

pub use builder::{DrillKey, DrillablePattern, build_drill_set, build_drill_set_with, resolve};
pub use session::{DrillMode, GuessOutcome, RepeatOutcome, Session};
pub use snapshot::{ProtocolSnapshot, SessionSnapshot};
