//! Daily word command
//!
//! Shows which base word a calendar day maps to.

use crate::engine::Engine;
use crate::engine::daily::date_key;
use crate::game::GameError;
use chrono::NaiveDate;

/// Result of a daily lookup
pub struct DailyReport {
    pub date: NaiveDate,
    pub base_word: String,
    pub bank_size: usize,
    /// Number of base words the day could have picked from
    pub candidates: usize,
}

/// Look up the daily word for `date`
///
/// # Errors
///
/// Returns `GameError::NoDailyWord` if no bank is rich enough.
pub fn daily_report(engine: &Engine<'_>, date: NaiveDate) -> Result<DailyReport, GameError> {
    let base_word = engine.daily_word(date).ok_or(GameError::NoDailyWord)?;
    tracing::debug!(key = %date_key(date), base_word, "daily lookup");

    Ok(DailyReport {
        date,
        base_word: base_word.to_string(),
        bank_size: engine.banks().bank(base_word).len(),
        candidates: engine.daily_candidates().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::loader::{embedded_associations, embedded_banks};
    use crate::config::GameConfig;

    #[test]
    fn daily_report_for_embedded_banks() {
        let banks = embedded_banks();
        let associations = embedded_associations();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let report = daily_report(&engine, date).unwrap();
        assert!(report.bank_size >= config.daily_min_bank_size);
        assert!(report.candidates >= 1);
        assert_eq!(report.base_word, daily_report(&engine, date).unwrap().base_word);
    }

    #[test]
    fn daily_report_needs_rich_bank() {
        let banks = embedded_banks();
        let associations = embedded_associations();
        let config = GameConfig {
            daily_min_bank_size: 10_000,
            ..GameConfig::default()
        };
        let engine = Engine::new(&banks, &associations, &config);

        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(matches!(daily_report(&engine, date), Err(GameError::NoDailyWord)));
    }
}
