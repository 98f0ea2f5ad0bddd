//! Catalogue entry representation
//!
//! An Entry stores one catalogue item's raw string along with its parsed
//! accepted spellings and the definition-reveal marker.
//!
//! Raw entries obey a small grammar:
//!
//! ```text
//! SPELLING      := run of characters excluding newline, '/', '(', ')'
//! SPELLINGS     := SPELLING, or SPELLINGS/SPELLING
//! PARENTHESIZED := SPELLINGS (SPELLING)
//! VOCABULARY    := SPELLINGS or PARENTHESIZED, optionally followed by " *"
//! ```
//!
//! The parenthesized part is a disambiguating gloss (e.g. a part-of-speech
//! hint), not an accepted spelling. The trailing `" *"` marks an entry whose
//! definition should be shown automatically when it is drawn.

use std::fmt;

/// A parsed catalogue entry: raw text, accepted spellings, reveal marker
///
/// The spelling list is never empty, preserves left-to-right order, and its
/// first element is the primary spelling used for any external lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    raw: String,
    spellings: Vec<String>,
    reveal_definition: bool,
}

/// Error type for entries that violate the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The input was empty
    Empty,
    /// A parenthesis appears outside a single trailing gloss
    StrayParenthesis(String),
    /// Splitting on `/` produced an empty spelling segment
    EmptySpelling(String),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "entry is empty"),
            Self::StrayParenthesis(raw) => {
                write!(f, "entry {raw:?} has a parenthesis outside a trailing gloss")
            }
            Self::EmptySpelling(raw) => {
                write!(f, "entry {raw:?} contains an empty spelling segment")
            }
        }
    }
}

impl std::error::Error for EntryError {}

impl Entry {
    /// Parse a raw catalogue entry
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The input is empty
    /// - The entry ends with `)` without a `" ("` gloss opener
    /// - Any `/`-separated spelling segment is empty
    ///
    /// # Examples
    /// ```
    /// use word_power::core::Entry;
    ///
    /// let entry = Entry::parse("theater/theatre (noun)").unwrap();
    /// assert_eq!(entry.spellings(), ["theater", "theatre"]);
    /// assert!(!entry.reveals_definition());
    ///
    /// let starred = Entry::parse("gregarious *").unwrap();
    /// assert_eq!(starred.spellings(), ["gregarious"]);
    /// assert!(starred.reveals_definition());
    ///
    /// assert!(Entry::parse("").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, EntryError> {
        if raw.is_empty() {
            return Err(EntryError::Empty);
        }

        // The reveal marker is orthogonal to spelling matching; strip it
        // first and remember it.
        let mut rest = raw;
        let reveal_definition = rest.ends_with(" *");
        if reveal_definition {
            rest = &rest[..rest.len() - 2];
        }

        // A trailing ')' closes a gloss opened by the last " (". A ')'
        // without that opener is a malformed entry, not a spelling.
        if rest.ends_with(')') {
            match rest.rfind(" (") {
                Some(idx) => rest = &rest[..idx],
                None => return Err(EntryError::StrayParenthesis(raw.to_string())),
            }
        }

        // Spellings themselves never contain parentheses
        if rest.contains(['(', ')']) {
            return Err(EntryError::StrayParenthesis(raw.to_string()));
        }

        let spellings: Vec<String> = rest.split('/').map(str::to_string).collect();
        if spellings.iter().any(String::is_empty) {
            return Err(EntryError::EmptySpelling(raw.to_string()));
        }

        Ok(Self {
            raw: raw.to_string(),
            spellings,
            reveal_definition,
        })
    }

    /// Get the raw catalogue string this entry was parsed from
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the accepted spellings, in catalogue order
    #[inline]
    #[must_use]
    pub fn spellings(&self) -> &[String] {
        &self.spellings
    }

    /// Get the primary spelling (the first accepted spelling)
    #[inline]
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.spellings[0]
    }

    /// Whether this entry is marked to auto-reveal its definition on draw
    #[inline]
    #[must_use]
    pub const fn reveals_definition(&self) -> bool {
        self.reveal_definition
    }

    /// Check whether a (already normalized) guess exactly matches one of the
    /// accepted spellings
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        self.spellings.iter().any(|s| s == guess)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_spelling() {
        let entry = Entry::parse("risqué").unwrap();
        assert_eq!(entry.spellings(), ["risqué"]);
        assert_eq!(entry.primary(), "risqué");
        assert!(!entry.reveals_definition());
        assert_eq!(entry.raw(), "risqué");
    }

    #[test]
    fn alternate_spellings_preserve_order() {
        let entry = Entry::parse("theater/theatre").unwrap();
        assert_eq!(entry.spellings(), ["theater", "theatre"]);
        assert_eq!(entry.primary(), "theater");
    }

    #[test]
    fn gloss_is_not_a_spelling() {
        let entry = Entry::parse("theater/theatre (noun)").unwrap();
        assert_eq!(entry.spellings(), ["theater", "theatre"]);
    }

    #[test]
    fn reveal_marker() {
        let entry = Entry::parse("gregarious *").unwrap();
        assert_eq!(entry.spellings(), ["gregarious"]);
        assert!(entry.reveals_definition());
        assert_eq!(entry.raw(), "gregarious *");
    }

    #[test]
    fn gloss_and_reveal_marker_combined() {
        let entry = Entry::parse("desert (abandon) *").unwrap();
        assert_eq!(entry.spellings(), ["desert"]);
        assert!(entry.reveals_definition());
    }

    #[test]
    fn gloss_truncates_at_last_opener() {
        // Truncation uses the last " ("; the leftover '(' is then rejected
        // rather than admitted into a spelling
        assert!(matches!(
            Entry::parse("bass (music (secondary))"),
            Err(EntryError::StrayParenthesis(_))
        ));
    }

    #[test]
    fn spellings_may_contain_spaces() {
        let entry = Entry::parse("Möbius strip").unwrap();
        assert_eq!(entry.spellings(), ["Möbius strip"]);
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(Entry::parse(""), Err(EntryError::Empty));
    }

    #[test]
    fn unterminated_gloss_rejected() {
        assert!(matches!(
            Entry::parse("bass(music)"),
            Err(EntryError::StrayParenthesis(_))
        ));
    }

    #[test]
    fn parenthesis_inside_spelling_rejected() {
        assert!(matches!(
            Entry::parse("ba(ss"),
            Err(EntryError::StrayParenthesis(_))
        ));
    }

    #[test]
    fn empty_spelling_segment_rejected() {
        assert!(matches!(
            Entry::parse("theater/"),
            Err(EntryError::EmptySpelling(_))
        ));
        assert!(matches!(
            Entry::parse("/theatre"),
            Err(EntryError::EmptySpelling(_))
        ));
        assert!(matches!(
            Entry::parse("a//b"),
            Err(EntryError::EmptySpelling(_))
        ));
    }

    #[test]
    fn bare_marker_rejected() {
        // " *" strips to nothing, leaving one empty segment
        assert!(matches!(
            Entry::parse(" *"),
            Err(EntryError::EmptySpelling(_))
        ));
    }

    #[test]
    fn matches_any_accepted_spelling() {
        let entry = Entry::parse("cat/kat").unwrap();
        assert!(entry.matches("cat"));
        assert!(entry.matches("kat"));
        assert!(!entry.matches("dog"));
        assert!(!entry.matches("cat/kat"));
    }

    #[test]
    fn matches_is_case_sensitive() {
        // Case folding belongs to the input-normalization collaborator
        let entry = Entry::parse("Provençal").unwrap();
        assert!(entry.matches("Provençal"));
        assert!(!entry.matches("provençal"));
    }

    #[test]
    fn parse_is_deterministic() {
        let a = Entry::parse("résumé/resumé *").unwrap();
        let b = Entry::parse("résumé/resumé *").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn display_shows_raw() {
        let entry = Entry::parse("gray/grey").unwrap();
        assert_eq!(format!("{entry}"), "gray/grey");
    }
}
