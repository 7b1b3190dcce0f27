//! Daily streak bookkeeping

use chrono::NaiveDate;

/// Streak to carry into a new session on `today`
///
/// Playing yesterday extends the streak, playing earlier today keeps it, and
/// anything else (including never having played) resets it.
#[must_use]
pub fn next_streak(last_played: Option<NaiveDate>, today: NaiveDate, current: u32) -> u32 {
    match last_played {
        Some(last) if last == today => current,
        Some(last) if today.pred_opt() == Some(last) => current.saturating_add(1),
        _ => 0,
    }
}
