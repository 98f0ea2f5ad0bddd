//! Secret-entry selection
//!
//! Uniform choice when no player is distinguishable, weighted sampling with
//! replacement when one is: entries a player keeps missing carry higher
//! weight and resurface more often, mastered entries recede.

use super::weights::WeightTable;
use crate::core::Entry;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Error type for selection over a catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The catalogue has no entries to select from
    EmptyCatalogue,
    /// The weight distribution could not be sampled
    InvalidWeights,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalogue => write!(f, "catalogue is empty, nothing to select"),
            Self::InvalidWeights => write!(f, "weight distribution could not be sampled"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Choose uniformly at random over the catalogue
///
/// # Errors
/// Returns `SelectError::EmptyCatalogue` if the catalogue is empty.
pub fn pick_uniform<'a, R: Rng + ?Sized>(
    catalogue: &'a [Entry],
    rng: &mut R,
) -> Result<&'a Entry, SelectError> {
    catalogue.choose(rng).ok_or(SelectError::EmptyCatalogue)
}

/// Choose with probability proportional to the player's weight per entry
///
/// Unseen entries weigh the neutral default. Weights recorded through
/// [`WeightTable::record`] are always strictly positive, so sampling cannot
/// degenerate for tables the trainer itself produced.
///
/// # Errors
/// Returns `SelectError::EmptyCatalogue` for an empty catalogue, or
/// `SelectError::InvalidWeights` if the distribution cannot be sampled
/// (possible only with a hand-loaded table of zero or negative weights).
pub fn pick_weighted<'a, R: Rng + ?Sized>(
    catalogue: &'a [Entry],
    weights: &WeightTable,
    player: &str,
    rng: &mut R,
) -> Result<&'a Entry, SelectError> {
    if catalogue.is_empty() {
        return Err(SelectError::EmptyCatalogue);
    }
    catalogue
        .choose_weighted(rng, |entry| weights.weight(player, entry.raw()))
        .map_err(|_| SelectError::InvalidWeights)
}
