//! Command implementations

pub mod daily;
pub mod score;
pub mod simple;
pub mod words;

pub use daily::{DailyReport, daily_report};
pub use score::{ScoreReport, score_word};
pub use simple::run_simple;
pub use words::{BankReport, CategoryGroup, TierReport, inspect_bank};
