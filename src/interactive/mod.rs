//! Interactive TUI game

pub mod app;
pub mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
