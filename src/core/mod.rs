//! Core domain types for affix drilling
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable and cheap to clone.

mod rarity;
mod side;
mod word;

pub use rarity::Rarity;
pub use side::{Side, SideFilter};
pub use word::{Word, WordError};
