//! Catalogue loading utilities
//!
//! Builds a validated entry catalogue from raw strings or a file. A single
//! malformed entry rejects the whole load: a broken spelling set can never
//! be matched by any guess, so admitting it would poison the game silently.

use crate::core::{Entry, EntryError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for catalogue loads
#[derive(Debug)]
pub enum CatalogueError {
    /// The catalogue file could not be read
    Io(io::Error),
    /// An entry violated the grammar; `line` is 1-based
    Malformed { line: usize, source: EntryError },
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read catalogue: {e}"),
            Self::Malformed { line, source } => {
                write!(f, "malformed entry on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for CatalogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for CatalogueError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse a sequence of raw entry lines into a catalogue
///
/// Blank lines are skipped; exact duplicate raw strings are dropped with the
/// first occurrence kept, preserving order.
///
/// # Errors
/// Returns `CatalogueError::Malformed` (with the offending 1-based line
/// number) if any non-blank line violates the entry grammar.
pub fn parse_catalogue<'a, I>(lines: I) -> Result<Vec<Entry>, CatalogueError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();
    let mut entries = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let entry = Entry::parse(trimmed).map_err(|source| CatalogueError::Malformed {
            line: idx + 1,
            source,
        })?;
        if seen.insert(entry.raw().to_string()) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Load a catalogue from a file, one raw entry per line
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or a malformed-entry
/// error if any line violates the grammar.
///
/// # Examples
/// ```no_run
/// use word_power::catalogue::load_from_file;
///
/// let entries = load_from_file("data/word_power_words.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>, CatalogueError> {
    let content = fs::read_to_string(path)?;
    parse_catalogue(content.lines())
}

/// Remove banned raw entries from a catalogue, preserving order
///
/// Banning and unbanning themselves are owned by an external collaborator;
/// this only applies an already-decided ban list.
#[must_use]
pub fn drop_banned(entries: Vec<Entry>, banned: &[String]) -> Vec<Entry> {
    if banned.is_empty() {
        return entries;
    }
    let banned: FxHashSet<&str> = banned.iter().map(String::as_str).collect();
    entries
        .into_iter()
        .filter(|entry| !banned.contains(entry.raw()))
        .collect()
}
