//! Per-player selection weights
//!
//! Each player has a weight in (0, 1) per catalogue entry. Unseen entries
//! default to the neutral 0.5; only entries a player has actually answered
//! are stored, which keeps the persisted table bounded and makes the default
//! an explicit contract rather than a lookup side effect.

use rustc_hash::FxHashMap;
use std::fmt;

/// Neutral weight for entries a player has never answered
pub const NEUTRAL_WEIGHT: f64 = 0.5;

/// Shared scalar controlling how sharply weights move toward the extremes
///
/// Validated at construction: the update rules are contractive only for
/// values strictly greater than 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggression(f64);

/// Error type for invalid aggression values
#[derive(Debug, Clone, PartialEq)]
pub enum AggressionError {
    OutOfRange(f64),
}

impl fmt::Display for AggressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(v) => {
                write!(f, "aggression value must be finite and greater than 1, got {v}")
            }
        }
    }
}

impl std::error::Error for AggressionError {}

impl Aggression {
    /// Validate and wrap an aggression value
    ///
    /// # Errors
    /// Returns `AggressionError::OutOfRange` if the value is not finite or
    /// not strictly greater than 1.
    ///
    /// # Examples
    /// ```
    /// use word_power::trainer::Aggression;
    ///
    /// assert!(Aggression::new(1.5).is_ok());
    /// assert!(Aggression::new(1.0).is_err());
    /// assert!(Aggression::new(0.5).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, AggressionError> {
        if value.is_finite() && value > 1.0 {
            Ok(Self(value))
        } else {
            Err(AggressionError::OutOfRange(value))
        }
    }

    /// Get the raw value
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Weight movement from a single recorded guess, for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightChange {
    pub old: f64,
    pub new: f64,
}

// Both update rules step along the curve w = 1/(1 + a^x), one unit of x per
// guess: a correct answer increments the latent x (weight falls toward 0),
// a miss decrements it (weight rises toward 1). Neither extreme is reachable
// in finitely many steps.

/// Weight after a correct answer: moves toward 0, stays inside (0, 1)
#[must_use]
pub fn step_toward_mastered(w: f64, aggression: Aggression) -> f64 {
    let a = aggression.get();
    w / (a - w * (a - 1.0))
}

/// Weight after a miss: moves toward 1, stays inside (0, 1)
#[must_use]
pub fn step_toward_struggling(w: f64, aggression: Aggression) -> f64 {
    let a = aggression.get();
    a * w / (1.0 + w * (a - 1.0))
}

/// Sparse per-player, per-entry weight table
///
/// Keys are player identifiers and raw entry strings. Entries are added
/// lazily on first recorded guess and never pruned automatically.
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    players: FxHashMap<String, FxHashMap<String, f64>>,
}

impl WeightTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a player's weight for an entry, defaulting to neutral
    ///
    /// Never inserts; the default is a read-side contract.
    #[must_use]
    pub fn weight(&self, player: &str, entry_raw: &str) -> f64 {
        self.players
            .get(player)
            .and_then(|weights| weights.get(entry_raw))
            .copied()
            .unwrap_or(NEUTRAL_WEIGHT)
    }

    /// Record a guess outcome: read, update, and commit as one step
    ///
    /// Returns the old and new weight for display.
    pub fn record(
        &mut self,
        player: &str,
        entry_raw: &str,
        correct: bool,
        aggression: Aggression,
    ) -> WeightChange {
        let old = self.weight(player, entry_raw);
        let new = if correct {
            step_toward_mastered(old, aggression)
        } else {
            step_toward_struggling(old, aggression)
        };
        self.players
            .entry(player.to_string())
            .or_default()
            .insert(entry_raw.to_string(), new);
        WeightChange { old, new }
    }

    /// All stored weights for one player, if any have been recorded
    #[must_use]
    pub fn player_weights(&self, player: &str) -> Option<&FxHashMap<String, f64>> {
        self.players.get(player)
    }

    /// Iterate all stored (player, entry, weight) triples
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.players.iter().flat_map(|(player, weights)| {
            weights
                .iter()
                .map(move |(entry, &w)| (player.as_str(), entry.as_str(), w))
        })
    }

    /// Insert a stored weight directly (used when loading a saved table)
    pub fn insert(&mut self, player: &str, entry_raw: &str, weight: f64) {
        self.players
            .entry(player.to_string())
            .or_default()
            .insert(entry_raw.to_string(), weight);
    }

    /// True if no weights have been recorded for any player
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggression(v: f64) -> Aggression {
        Aggression::new(v).unwrap()
    }

    #[test]
    fn aggression_accepts_values_above_one() {
        assert_eq!(aggression(1.5).get(), 1.5);
        assert_eq!(aggression(2.0).get(), 2.0);
    }

    #[test]
    fn aggression_rejects_bad_values() {
        for v in [1.0, 0.99, 0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(Aggression::new(v).is_err(), "expected rejection of {v}");
        }
    }

    #[test]
    fn correct_update_closed_form() {
        // A = 2, w = 0.5: 0.5 / (2 - 0.5) = 1/3
        let new = step_toward_mastered(0.5, aggression(2.0));
        assert!((new - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn miss_update_closed_form() {
        // A = 2, w = 0.5: (2 * 0.5) / (1 + 0.5) = 2/3
        let new = step_toward_struggling(0.5, aggression(2.0));
        assert!((new - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn updates_stay_strictly_inside_unit_interval() {
        let weights = [0.001, 0.1, 0.25, 0.5, 0.75, 0.9, 0.999];
        let aggressions = [1.01, 1.5, 2.0, 5.0, 100.0];
        for &w in &weights {
            for &a in &aggressions {
                let a = aggression(a);
                let down = step_toward_mastered(w, a);
                let up = step_toward_struggling(w, a);
                assert!(down > 0.0 && down < 1.0, "down({w}, {}) = {down}", a.get());
                assert!(up > 0.0 && up < 1.0, "up({w}, {}) = {up}", a.get());
            }
        }
    }

    #[test]
    fn repeated_correct_converges_toward_zero() {
        let a = aggression(2.0);
        let mut w = 0.5;
        for _ in 0..40 {
            let next = step_toward_mastered(w, a);
            assert!(next < w, "should fall monotonically");
            assert!(next > 0.0, "never reaches zero");
            w = next;
        }
        assert!(w < 1e-10);
    }

    #[test]
    fn repeated_misses_converge_toward_one() {
        // 40 steps keeps the value clear of the f64 rounding plateau at 1.0
        let a = aggression(2.0);
        let mut w = 0.5;
        for _ in 0..40 {
            let next = step_toward_struggling(w, a);
            assert!(next > w, "should rise monotonically");
            assert!(next < 1.0, "never reaches one");
            w = next;
        }
        assert!(w > 1.0 - 1e-10);
    }

    #[test]
    fn steps_are_inverses() {
        let a = aggression(1.7);
        let w = 0.42;
        let round_trip = step_toward_mastered(step_toward_struggling(w, a), a);
        assert!((round_trip - w).abs() < 1e-12);
    }

    #[test]
    fn unseen_entries_default_to_neutral() {
        let table = WeightTable::new();
        assert_eq!(table.weight("alice", "aberration"), NEUTRAL_WEIGHT);
        // Lookup must not insert
        assert!(table.is_empty());
    }

    #[test]
    fn record_returns_old_and_new() {
        let mut table = WeightTable::new();
        let change = table.record("alice", "dog *", false, aggression(1.5));
        assert!((change.old - 0.5).abs() < 1e-12);
        // 1.5 * 0.5 / (1 + 0.5 * 0.5) = 0.6
        assert!((change.new - 0.6).abs() < 1e-12);
        assert!((table.weight("alice", "dog *") - 0.6).abs() < 1e-12);
    }

    #[test]
    fn players_are_independent() {
        let mut table = WeightTable::new();
        table.record("alice", "cat/kat", false, aggression(2.0));
        assert!((table.weight("alice", "cat/kat") - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(table.weight("bob", "cat/kat"), NEUTRAL_WEIGHT);
    }

    #[test]
    fn iter_covers_all_recorded_weights() {
        let mut table = WeightTable::new();
        table.record("alice", "cat/kat", true, aggression(2.0));
        table.record("bob", "dog *", false, aggression(2.0));
        let mut triples: Vec<_> = table.iter().collect();
        triples.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].0, "alice");
        assert_eq!(triples[1].0, "bob");
    }
}
