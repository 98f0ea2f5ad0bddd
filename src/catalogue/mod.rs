//! Entry catalogues
//!
//! Provides the embedded default practice list compiled into the binary and
//! a loader for user-supplied catalogue files.

mod embedded;
mod loader;

pub use embedded::{WORD_POWER, WORD_POWER_COUNT};
pub use loader::{CatalogueError, drop_banned, load_from_file, parse_catalogue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORD_POWER.len(), WORD_POWER_COUNT);
    }

    #[test]
    fn embedded_catalogue_parses_cleanly() {
        let entries = parse_catalogue(WORD_POWER.iter().copied()).unwrap();
        assert_eq!(entries.len(), WORD_POWER_COUNT);
    }

    #[test]
    fn embedded_catalogue_exercises_the_grammar() {
        let entries = parse_catalogue(WORD_POWER.iter().copied()).unwrap();

        // Alternates, glosses, reveal markers, and accents all appear
        assert!(entries.iter().any(|e| e.spellings().len() > 1));
        assert!(entries.iter().any(|e| e.raw().ends_with(')') && !e.reveals_definition()));
        assert!(entries.iter().any(crate::core::Entry::reveals_definition));
        assert!(
            entries
                .iter()
                .any(|e| e.primary().chars().any(|c| !c.is_ascii()))
        );
    }

    #[test]
    fn embedded_entries_have_no_duplicates() {
        let entries = parse_catalogue(WORD_POWER.iter().copied()).unwrap();
        assert_eq!(entries.len(), WORD_POWER.len());
    }
}
