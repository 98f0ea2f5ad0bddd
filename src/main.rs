//! Word Power - CLI
//!
//! Adaptive spelling drill with TUI and plain-terminal modes, plus scoring
//! and simulation commands.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_power::{
    catalogue::{WORD_POWER, load_from_file, parse_catalogue},
    commands::{
        SimulateConfig, player_stats, rank_nearest, run_simple, run_simulation, score_against_entry,
    },
    core::{Entry, translate_accents},
    output::{
        print_nearest_result, print_player_stats, print_score_result, print_simulation_result,
    },
    store::{self, SaveData},
    trainer::{Aggression, Trainer, WeightTable},
};

/// Used when neither the CLI flag nor a save file supplies one
const DEFAULT_AGGRESSION: f64 = 1.5;

#[derive(Parser)]
#[command(
    name = "word_power",
    about = "Adaptive vocabulary drill: edit-distance scoring, per-player word weighting",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player identifier for adaptive selection (omit for uniform draws)
    #[arg(short, long, global = true)]
    player: Option<String>,

    /// Save file holding aggression, weights, and words (JSON)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Wordlist file, one entry per line (overrides the save file's words)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Aggression value > 1.0 (overrides the save file's value)
    #[arg(short, long, global = true)]
    aggression: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive drill without TUI)
    Simple,

    /// Score a guess against one entry, or rank the nearest entries
    Score {
        /// The guess to score (accent markers are translated)
        guess: String,

        /// Score against this raw entry instead of ranking the catalogue
        #[arg(short, long)]
        entry: Option<String>,

        /// How many nearest entries to show when ranking
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Simulate drilling to inspect selection fairness and convergence
    Simulate {
        /// Rounds per trial
        #[arg(short, long, default_value = "500")]
        rounds: usize,

        /// Independent trials
        #[arg(short, long, default_value = "8")]
        trials: usize,

        /// Probability the simulated player answers correctly
        #[arg(long, default_value = "0.7")]
        accuracy: f64,

        /// RNG seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show a player's weight table
    Stats,
}

/// Resolved startup state: catalogue, weights, aggression
struct GameData {
    catalogue: Vec<Entry>,
    weights: WeightTable,
    aggression: Aggression,
}

/// Assemble startup state from flags, save file, and built-in defaults
///
/// Precedence: explicit flags beat the save file, which beats the embedded
/// catalogue and the default aggression.
fn load_game_data(cli: &Cli) -> Result<GameData> {
    let saved = match &cli.data {
        Some(path) => Some(
            store::load(path).with_context(|| format!("loading save file {}", path.display()))?,
        ),
        None => None,
    };

    let catalogue = if let Some(path) = &cli.wordlist {
        load_from_file(path).with_context(|| format!("loading wordlist {}", path.display()))?
    } else if let Some(saved) = &saved {
        saved.catalogue().context("reading save file words")?
    } else {
        parse_catalogue(WORD_POWER.iter().copied()).context("parsing embedded catalogue")?
    };

    let aggression = if let Some(value) = cli.aggression {
        Aggression::new(value)?
    } else if let Some(saved) = &saved {
        saved.aggression().context("reading save file aggression")?
    } else {
        Aggression::new(DEFAULT_AGGRESSION).expect("default aggression is valid")
    };

    let weights = saved.as_ref().map(SaveData::weight_table).unwrap_or_default();

    Ok(GameData {
        catalogue,
        weights,
        aggression,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data = load_game_data(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let trainer = Trainer::with_weights(data.catalogue, data.aggression, data.weights);
            let app = word_power::interactive::App::new(trainer, cli.player, cli.data);
            word_power::interactive::run_tui(app)
        }
        Commands::Simple => {
            let mut trainer = Trainer::with_weights(data.catalogue, data.aggression, data.weights);
            run_simple(&mut trainer, cli.player.as_deref(), cli.data.as_deref())
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, entry, top } => {
            let guess = translate_accents(&guess);
            match entry {
                Some(raw) => {
                    let result = score_against_entry(&guess, &raw)?;
                    print_score_result(&result);
                }
                None => {
                    let result = rank_nearest(&guess, &data.catalogue, top);
                    print_nearest_result(&result);
                }
            }
            Ok(())
        }
        Commands::Simulate {
            rounds,
            trials,
            accuracy,
            seed,
        } => {
            if !(0.0..=1.0).contains(&accuracy) {
                bail!("accuracy must be between 0 and 1, got {accuracy}");
            }
            let config = SimulateConfig {
                rounds,
                trials,
                accuracy,
                aggression: data.aggression,
                seed: seed.unwrap_or_else(rand::random),
            };
            let result = run_simulation(&data.catalogue, &config)?;
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let Some(player) = &cli.player else {
                bail!("stats needs a player: pass --player NAME");
            };
            let stats = player_stats(&data.weights, player);
            print_player_stats(&stats);
            Ok(())
        }
    }
}
