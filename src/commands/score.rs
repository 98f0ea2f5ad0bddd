//! Distance scoring command
//!
//! Scores a guess against one entry's spelling set, or ranks the whole
//! catalogue by closeness to the guess.

use crate::core::{Entry, EntryError, distance, min_distance_to_set};
use rayon::prelude::*;

/// Distance from a guess to one accepted spelling
#[derive(Debug, Clone)]
pub struct SpellingScore {
    pub spelling: String,
    pub distance: usize,
}

/// Result of scoring a guess against one entry
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: String,
    pub entry_raw: String,
    pub scores: Vec<SpellingScore>,
    /// Minimum over the spelling set, the score callers act on
    pub best: usize,
}

/// Score a guess against every accepted spelling of one raw entry
///
/// # Errors
/// Returns `EntryError` if the raw entry violates the grammar.
pub fn score_against_entry(guess: &str, raw_entry: &str) -> Result<ScoreResult, EntryError> {
    let entry = Entry::parse(raw_entry)?;

    let scores: Vec<SpellingScore> = entry
        .spellings()
        .iter()
        .map(|spelling| SpellingScore {
            spelling: spelling.clone(),
            distance: distance(guess, spelling),
        })
        .collect();

    // A parsed entry always has at least one spelling
    let best = scores
        .iter()
        .map(|s| s.distance)
        .min()
        .expect("an entry always has at least one spelling");

    Ok(ScoreResult {
        guess: guess.to_string(),
        entry_raw: raw_entry.to_string(),
        scores,
        best,
    })
}

/// Catalogue entries ranked by closeness to a guess
#[derive(Debug, Clone)]
pub struct NearestResult {
    pub guess: String,
    pub total: usize,
    /// `(raw entry, min distance)` pairs, closest first
    pub ranked: Vec<(String, usize)>,
}

/// Rank catalogue entries by minimum distance to the guess
///
/// The per-entry scoring fans out across the catalogue with rayon. Ties
/// break on raw entry text so output is stable.
#[must_use]
pub fn rank_nearest(guess: &str, catalogue: &[Entry], top: usize) -> NearestResult {
    let mut ranked: Vec<(String, usize)> = catalogue
        .par_iter()
        .map(|entry| {
            let best = min_distance_to_set(guess, entry.spellings().iter().map(String::as_str))
                .expect("an entry always has at least one spelling");
            (entry.raw().to_string(), best)
        })
        .collect();

    ranked.sort_unstable_by(|a, b| (a.1, a.0.as_str()).cmp(&(b.1, b.0.as_str())));
    ranked.truncate(top);

    NearestResult {
        guess: guess.to_string(),
        total: catalogue.len(),
        ranked,
    }
}
