//! Round controller
//!
//! Owns the catalogue, the weight table, the shared aggression value, and the
//! live secret. Exactly one secret is active at a time; every guess or skip
//! replaces it with a freshly selected one, so a round never rests in a
//! terminal state. All mutation goes through `&mut self`, which serializes
//! the read-update-commit-reselect sequence of a guess relative to any other
//! guess for the same player and entry.

use super::selection::{SelectError, pick_uniform, pick_weighted};
use super::weights::{Aggression, WeightChange, WeightTable};
use crate::core::{Entry, min_distance_to_set};
use rand::Rng;
use std::fmt;

/// Everything a presentation layer needs to report one finished round
#[derive(Debug, Clone)]
pub struct RoundReport {
    /// The entry that was just guessed at, revealed
    pub revealed: Entry,
    /// Whether the guess exactly matched an accepted spelling
    pub correct: bool,
    /// Edit distance from the guess to the closest accepted spelling
    pub distance: usize,
    /// Weight movement, present only when a player was identified
    pub weight_change: Option<WeightChange>,
    /// The next secret (still hidden from the player)
    pub next: Entry,
}

/// Result of skipping to a new word without a guess
#[derive(Debug, Clone)]
pub struct SkipReport {
    /// The entry that was abandoned, if a round was active
    pub revealed: Option<Entry>,
    /// The next secret
    pub next: Entry,
}

/// Error type for round operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// A guess arrived while no secret was active
    NoActiveSecret,
    /// Selecting the next secret failed
    Select(SelectError),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveSecret => write!(f, "no secret is active; select one first"),
            Self::Select(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RoundError {}

impl From<SelectError> for RoundError {
    fn from(e: SelectError) -> Self {
        Self::Select(e)
    }
}

/// The drill engine: catalogue + weights + live secret
pub struct Trainer {
    catalogue: Vec<Entry>,
    weights: WeightTable,
    aggression: Aggression,
    secret: Option<Entry>,
}

impl Trainer {
    /// Create a trainer with a fresh weight table
    #[must_use]
    pub fn new(catalogue: Vec<Entry>, aggression: Aggression) -> Self {
        Self::with_weights(catalogue, aggression, WeightTable::new())
    }

    /// Create a trainer around a previously saved weight table
    #[must_use]
    pub fn with_weights(
        catalogue: Vec<Entry>,
        aggression: Aggression,
        weights: WeightTable,
    ) -> Self {
        Self {
            catalogue,
            weights,
            aggression,
            secret: None,
        }
    }

    /// The read-only entry catalogue
    #[must_use]
    pub fn catalogue(&self) -> &[Entry] {
        &self.catalogue
    }

    /// The weight table (for stats display and persistence)
    #[must_use]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// The shared aggression value
    #[must_use]
    pub fn aggression(&self) -> Aggression {
        self.aggression
    }

    /// The currently active secret, if any
    #[must_use]
    pub fn secret(&self) -> Option<&Entry> {
        self.secret.as_ref()
    }

    /// Select the next secret, replacing any active one
    ///
    /// With a player identifier, draws with probability proportional to that
    /// player's per-entry weights; without one, draws uniformly.
    ///
    /// # Errors
    /// Returns `SelectError::EmptyCatalogue` when there is nothing to select.
    pub fn next_secret<R: Rng + ?Sized>(
        &mut self,
        player: Option<&str>,
        rng: &mut R,
    ) -> Result<&Entry, SelectError> {
        let picked = match player {
            Some(player) => pick_weighted(&self.catalogue, &self.weights, player, rng)?,
            None => pick_uniform(&self.catalogue, rng)?,
        };
        self.secret = Some(picked.clone());
        Ok(self.secret.as_ref().expect("secret was just set"))
    }

    /// Edit distance from a guess to the active secret, without ending the
    /// round
    #[must_use]
    pub fn probe(&self, guess: &str) -> Option<usize> {
        self.secret.as_ref().map(|entry| score_guess(guess, entry))
    }

    /// Resolve the active round with a guess
    ///
    /// Scores the (already normalized) guess against the secret's spelling
    /// set, records the outcome in the player's weights, and immediately
    /// selects the next secret for the same player.
    ///
    /// # Errors
    /// Returns `RoundError::NoActiveSecret` if no secret is active, or a
    /// selection error if the next secret cannot be drawn.
    pub fn resolve_guess<R: Rng + ?Sized>(
        &mut self,
        player: Option<&str>,
        guess: &str,
        rng: &mut R,
    ) -> Result<RoundReport, RoundError> {
        let revealed = self.secret.take().ok_or(RoundError::NoActiveSecret)?;

        let correct = revealed.matches(guess);
        let distance = score_guess(guess, &revealed);
        let weight_change = player.map(|player| {
            self.weights
                .record(player, revealed.raw(), correct, self.aggression)
        });

        let next = self.next_secret(player, rng)?.clone();

        Ok(RoundReport {
            revealed,
            correct,
            distance,
            weight_change,
            next,
        })
    }

    /// Abandon the active round (if any) and select a new secret
    ///
    /// No weight is recorded; a skip is not a miss.
    ///
    /// # Errors
    /// Returns a selection error if the next secret cannot be drawn.
    pub fn skip<R: Rng + ?Sized>(
        &mut self,
        player: Option<&str>,
        rng: &mut R,
    ) -> Result<SkipReport, SelectError> {
        let revealed = self.secret.take();
        let next = self.next_secret(player, rng)?.clone();
        Ok(SkipReport { revealed, next })
    }
}

/// Score a guess as the minimum distance over the entry's spelling set
fn score_guess(guess: &str, entry: &Entry) -> usize {
    min_distance_to_set(guess, entry.spellings().iter().map(String::as_str))
        .expect("an entry always has at least one spelling")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalogue(raws: &[&str]) -> Vec<Entry> {
        raws.iter().map(|r| Entry::parse(r).unwrap()).collect()
    }

    fn aggression(v: f64) -> Aggression {
        Aggression::new(v).unwrap()
    }

    #[test]
    fn next_secret_activates_a_catalogue_entry() {
        let mut trainer = Trainer::new(catalogue(&["cat/kat", "dog *"]), aggression(2.0));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(trainer.secret().is_none());
        let secret = trainer.next_secret(None, &mut rng).unwrap().clone();
        assert!(trainer.catalogue().contains(&secret));
        assert_eq!(trainer.secret(), Some(&secret));
    }

    #[test]
    fn next_secret_fails_on_empty_catalogue() {
        let mut trainer = Trainer::new(Vec::new(), aggression(2.0));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            trainer.next_secret(None, &mut rng).unwrap_err(),
            SelectError::EmptyCatalogue
        );
        assert_eq!(
            trainer.next_secret(Some("alice"), &mut rng).unwrap_err(),
            SelectError::EmptyCatalogue
        );
    }

    #[test]
    fn guess_without_active_secret_is_an_error() {
        let mut trainer = Trainer::new(catalogue(&["cat/kat"]), aggression(2.0));
        let mut rng = StdRng::seed_from_u64(1);
        let result = trainer.resolve_guess(Some("alice"), "cat", &mut rng);
        assert!(matches!(result, Err(RoundError::NoActiveSecret)));
    }

    #[test]
    fn miss_raises_weight_and_reselects() {
        // The end-to-end scenario: alice misses "dog *" at aggression 1.5
        let mut trainer = Trainer::new(catalogue(&["cat/kat", "dog *"]), aggression(1.5));
        let mut rng = StdRng::seed_from_u64(3);

        // Force the secret to "dog *"
        loop {
            let secret = trainer.next_secret(Some("alice"), &mut rng).unwrap();
            if secret.raw() == "dog *" {
                break;
            }
        }

        let report = trainer.resolve_guess(Some("alice"), "cat", &mut rng).unwrap();
        assert_eq!(report.revealed.raw(), "dog *");
        assert!(!report.correct);
        // "cat" scores against dog's own spellings, not cat/kat's
        assert_eq!(report.distance, 3);

        let change = report.weight_change.unwrap();
        assert!((change.old - 0.5).abs() < 1e-12);
        // 1.5 * 0.5 / (1 + 0.5 * 0.5) = 0.6
        assert!((change.new - 0.6).abs() < 1e-12);
        assert!((trainer.weights().weight("alice", "dog *") - 0.6).abs() < 1e-12);

        // A new secret is immediately active
        assert!(trainer.secret().is_some());
    }

    #[test]
    fn correct_guess_lowers_weight() {
        let mut trainer = Trainer::new(catalogue(&["cat/kat"]), aggression(2.0));
        let mut rng = StdRng::seed_from_u64(4);
        trainer.next_secret(Some("alice"), &mut rng).unwrap();

        // Either accepted spelling counts
        let report = trainer.resolve_guess(Some("alice"), "kat", &mut rng).unwrap();
        assert!(report.correct);
        assert_eq!(report.distance, 0);
        let change = report.weight_change.unwrap();
        assert!((change.new - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn anonymous_rounds_leave_weights_untouched() {
        let mut trainer = Trainer::new(catalogue(&["cat/kat", "dog *"]), aggression(2.0));
        let mut rng = StdRng::seed_from_u64(5);
        trainer.next_secret(None, &mut rng).unwrap();

        let report = trainer.resolve_guess(None, "zzz", &mut rng).unwrap();
        assert!(report.weight_change.is_none());
        assert!(trainer.weights().is_empty());
    }

    #[test]
    fn skip_reveals_without_recording() {
        let mut trainer = Trainer::new(catalogue(&["cat/kat", "dog *"]), aggression(2.0));
        let mut rng = StdRng::seed_from_u64(6);
        trainer.next_secret(Some("alice"), &mut rng).unwrap();

        let report = trainer.skip(Some("alice"), &mut rng).unwrap();
        assert!(report.revealed.is_some());
        assert!(trainer.weights().is_empty());
        assert!(trainer.secret().is_some());
    }

    #[test]
    fn skip_from_idle_still_selects() {
        let mut trainer = Trainer::new(catalogue(&["cat/kat"]), aggression(2.0));
        let mut rng = StdRng::seed_from_u64(7);
        let report = trainer.skip(None, &mut rng).unwrap();
        assert!(report.revealed.is_none());
        assert_eq!(report.next.raw(), "cat/kat");
    }

    #[test]
    fn probe_scores_without_ending_the_round() {
        let mut trainer = Trainer::new(catalogue(&["theater/theatre (noun)"]), aggression(2.0));
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(trainer.probe("theatre"), None);

        trainer.next_secret(None, &mut rng).unwrap();
        assert_eq!(trainer.probe("theatre"), Some(0));
        assert_eq!(trainer.probe("theatr"), Some(1));
        // Still the same active secret
        assert!(trainer.secret().is_some());
    }

    #[test]
    fn report_surfaces_reveal_flag_of_next_secret() {
        let mut trainer = Trainer::new(catalogue(&["dog *"]), aggression(2.0));
        let mut rng = StdRng::seed_from_u64(9);
        trainer.next_secret(None, &mut rng).unwrap();
        let report = trainer.resolve_guess(None, "dog", &mut rng).unwrap();
        assert!(report.next.reveals_definition());
    }
}
