//! Bank and association loading utilities
//!
//! Builds the read-only stores from the embedded tables or from a
//! tab-separated file with `base, word, difficulty, category` rows.

use super::{ASSOCIATION_ENTRIES, THEMATIC_ENTRIES, ThematicBanks};
use crate::core::{AssociationTable, Difficulty, ThematicWord, WordAssociation};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while reading a bank file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Build banks from `(base, word, difficulty, category)` rows
///
/// Rows with an invalid word or difficulty, and duplicate words within a bank,
/// are skipped with a warning.
///
/// # Examples
/// ```
/// use chain_reaction::bank::loader::banks_from_slice;
///
/// let banks = banks_from_slice(&[
///     ("water", "wet", "easy", "state"),
///     ("water", "steam", "medium", "state"),
///     ("water", "h2o", "hard", "chemistry"),
/// ]);
/// assert_eq!(banks.bank("water").len(), 2);
/// ```
#[must_use]
pub fn banks_from_slice(rows: &[(&str, &str, &str, &str)]) -> ThematicBanks {
    let mut banks = ThematicBanks::new();

    for &(base, word, difficulty, category) in rows {
        let entry = difficulty
            .parse::<Difficulty>()
            .and_then(|difficulty| ThematicWord::new(word, difficulty, category));

        match entry {
            Ok(entry) => {
                if !banks.push(base, entry) {
                    warn!(base, word, "skipping duplicate bank word");
                }
            }
            Err(e) => warn!(base, word, error = %e, "skipping invalid bank row"),
        }
    }

    debug!(base_words = banks.len(), "loaded thematic banks");
    banks
}

/// Build a symmetric association table from `(source, target, rarity, strength)` rows
#[must_use]
pub fn associations_from_slice(rows: &[(&str, &str, f64, f64)]) -> AssociationTable {
    let mut table = AssociationTable::new();
    for &(source, target, rarity, strength) in rows {
        table.insert(source, WordAssociation::new(target, rarity, strength));
    }
    table.into_symmetric()
}

/// The banks compiled into the binary
#[must_use]
pub fn embedded_banks() -> ThematicBanks {
    banks_from_slice(THEMATIC_ENTRIES)
}

/// The association table compiled into the binary, symmetrized
#[must_use]
pub fn embedded_associations() -> AssociationTable {
    associations_from_slice(ASSOCIATION_ENTRIES)
}

/// Load banks from a tab-separated file
///
/// Blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Parse`
/// if a row does not have exactly four fields.
pub fn load_banks_from_file<P: AsRef<Path>>(path: P) -> Result<ThematicBanks, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_banks(&content)
}

/// Parse tab-separated bank rows
///
/// # Errors
///
/// Returns `LoadError::Parse` for a row that does not have four fields.
pub fn parse_banks(content: &str) -> Result<ThematicBanks, LoadError> {
    let mut rows = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        let [base, word, difficulty, category] = fields[..] else {
            return Err(LoadError::Parse {
                line: i + 1,
                reason: format!("expected 4 tab-separated fields, got {}", fields.len()),
            });
        };
        rows.push((base, word, difficulty, category));
    }

    Ok(banks_from_slice(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn banks_from_slice_skips_invalid_rows() {
        let banks = banks_from_slice(&[
            ("water", "wet", "easy", "state"),
            ("water", "wet", "easy", "state"),
            ("water", "rain", "tricky", "weather"),
            ("water", "", "easy", "weather"),
            ("water", "ocean", "easy", "bodies"),
        ]);

        let words: Vec<_> = banks.bank("water").iter().map(ThematicWord::word).collect();
        assert_eq!(words, vec!["wet", "ocean"]);
    }

    #[test]
    fn associations_from_slice_is_symmetric() {
        let table = associations_from_slice(&[("river", "water", 0.1, 0.9)]);
        assert!(table.is_symmetric());
        assert!(!table.associations_of("water").is_empty());
    }

    #[test]
    fn parse_banks_ignores_comments_and_blanks() {
        let content = "# base\tword\tdifficulty\tcategory\n\nmusic\tsong\teasy\tcomposition\n";
        let banks = parse_banks(content).unwrap();
        assert!(banks.contains("music", "song"));
    }

    #[test]
    fn parse_banks_reports_bad_line() {
        let content = "music\tsong\teasy\tcomposition\nmusic\tsing\n";
        match parse_banks(content) {
            Err(LoadError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_banks_from_file_reads_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "exam\ttest\teasy\tassessment").unwrap();
        writeln!(file, "exam\tquiz\teasy\tassessment").unwrap();

        let banks = load_banks_from_file(file.path()).unwrap();
        assert_eq!(banks.bank("exam").len(), 2);
    }

    #[test]
    fn load_banks_missing_file_is_io_error() {
        assert!(matches!(
            load_banks_from_file("/definitely/not/here.tsv"),
            Err(LoadError::Io(_))
        ));
    }

    #[test]
    fn embedded_banks_load_completely() {
        let banks = embedded_banks();
        let total: usize = banks.base_words().map(|b| banks.bank(b).len()).sum();
        assert_eq!(total, THEMATIC_ENTRIES.len());
        assert!(banks.contains("water", "wet"));
    }

    #[test]
    fn embedded_associations_are_symmetric() {
        let table = embedded_associations();
        assert!(table.is_symmetric());
        assert!(table.are_associated("water", "river"));
    }
}
