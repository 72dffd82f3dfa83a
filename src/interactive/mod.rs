//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Screen, run_tui};
