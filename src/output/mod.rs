//! Terminal output formatting
//!
//! Display utilities for CLI reports and the text-mode board.

pub mod display;
pub mod formatters;

pub use display::{
    print_bank_report, print_banner, print_daily_report, print_game_over, print_game_state,
    print_outcome, print_score_report,
};
