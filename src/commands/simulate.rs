//! Selection-fairness and convergence harness
//!
//! Runs independent trials of a simulated player against the catalogue and
//! reports how drilling concentrates: which entries get picked, how far the
//! weights spread, and what share the most-drilled entry takes. With all
//! weights neutral the pick distribution should sit near uniform; with a
//! fallible player it should tilt toward the entries being missed.

use crate::core::Entry;
use crate::trainer::{Aggression, SelectError, Trainer};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Simulated player identifier used by every trial
const DRILL_PLAYER: &str = "drill";

/// Simulation parameters
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    /// Rounds per trial
    pub rounds: usize,
    /// Independent trials, each with its own weight table and RNG
    pub trials: usize,
    /// Probability the simulated player answers a round correctly
    pub accuracy: f64,
    pub aggression: Aggression,
    pub seed: u64,
}

/// Aggregated result across all trials
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub trials: usize,
    pub requested_accuracy: f64,
    pub observed_accuracy: f64,
    pub mean_final_weight: f64,
    pub min_final_weight: f64,
    pub max_final_weight: f64,
    /// `(raw entry, total picks)` pairs, most drilled first
    pub most_drilled: Vec<(String, usize)>,
    /// Share of all rounds taken by the most-picked entry
    pub max_share: f64,
    /// Share each entry would take under exact uniformity
    pub uniform_share: f64,
    pub duration: Duration,
}

struct TrialOutcome {
    pick_counts: Vec<usize>,
    final_weights: Vec<f64>,
    correct: usize,
}

/// Run the simulation
///
/// # Errors
/// Returns `SelectError::EmptyCatalogue` if the catalogue is empty.
pub fn run_simulation(
    catalogue: &[Entry],
    config: &SimulateConfig,
) -> Result<SimulationResult, SelectError> {
    if catalogue.is_empty() {
        return Err(SelectError::EmptyCatalogue);
    }

    let index_of: FxHashMap<&str, usize> = catalogue
        .iter()
        .enumerate()
        .map(|(idx, entry)| (entry.raw(), idx))
        .collect();

    let pb = ProgressBar::new(config.trials as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} trials ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<TrialOutcome> = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let outcome = run_trial(catalogue, &index_of, config, trial as u64);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();

    let total_rounds = config.rounds * config.trials;
    let total_correct: usize = outcomes.iter().map(|o| o.correct).sum();

    let mut total_picks = vec![0usize; catalogue.len()];
    for outcome in &outcomes {
        for (idx, &count) in outcome.pick_counts.iter().enumerate() {
            total_picks[idx] += count;
        }
    }

    let all_weights: Vec<f64> = outcomes
        .iter()
        .flat_map(|o| o.final_weights.iter().copied())
        .collect();
    let mean_final_weight = all_weights.iter().sum::<f64>() / all_weights.len() as f64;
    let min_final_weight = all_weights.iter().copied().fold(f64::INFINITY, f64::min);
    let max_final_weight = all_weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut most_drilled: Vec<(String, usize)> = catalogue
        .iter()
        .zip(&total_picks)
        .map(|(entry, &count)| (entry.raw().to_string(), count))
        .collect();
    most_drilled.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let max_picks = most_drilled.first().map_or(0, |(_, count)| *count);
    most_drilled.truncate(5);

    Ok(SimulationResult {
        rounds: config.rounds,
        trials: config.trials,
        requested_accuracy: config.accuracy,
        observed_accuracy: total_correct as f64 / total_rounds as f64,
        mean_final_weight,
        min_final_weight,
        max_final_weight,
        most_drilled,
        max_share: max_picks as f64 / total_rounds as f64,
        uniform_share: 1.0 / catalogue.len() as f64,
        duration: start.elapsed(),
    })
}

fn run_trial(
    catalogue: &[Entry],
    index_of: &FxHashMap<&str, usize>,
    config: &SimulateConfig,
    trial: u64,
) -> TrialOutcome {
    // Distinct deterministic stream per trial
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(trial));

    let mut trainer = Trainer::new(catalogue.to_vec(), config.aggression);
    let mut pick_counts = vec![0usize; catalogue.len()];
    let mut correct = 0usize;

    trainer
        .next_secret(Some(DRILL_PLAYER), &mut rng)
        .expect("caller checked the catalogue is non-empty");

    for _ in 0..config.rounds {
        let secret_primary = trainer
            .secret()
            .map(|entry| entry.primary().to_string())
            .unwrap_or_default();

        let guess = if rng.random_bool(config.accuracy) {
            secret_primary
        } else {
            // Guaranteed miss: the empty string never matches a spelling
            String::new()
        };

        let report = trainer
            .resolve_guess(Some(DRILL_PLAYER), &guess, &mut rng)
            .expect("a secret is active and the catalogue is non-empty");

        pick_counts[index_of[report.revealed.raw()]] += 1;
        if report.correct {
            correct += 1;
        }
    }

    let final_weights = catalogue
        .iter()
        .map(|entry| trainer.weights().weight(DRILL_PLAYER, entry.raw()))
        .collect();

    TrialOutcome {
        pick_counts,
        final_weights,
        correct,
    }
}
