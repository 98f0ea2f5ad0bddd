//! Simple interactive drill mode
//!
//! Text-based practice loop without TUI. One guess ends a round: the entry
//! is revealed, the player's weight for it moves, and a new secret is drawn.

use crate::core::translate_accents;
use crate::output::formatters::{format_weight_change, verdict_emoji};
use crate::store::{self, SaveData};
use crate::trainer::Trainer;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Run the simple interactive drill loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// catalogue is empty.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(
    trainer: &mut Trainer,
    player: Option<&str>,
    save_path: Option<&Path>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Word Power - Spelling Drill                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    match player {
        Some(player) => println!("Drilling as {} (adaptive selection).\n", player.bright_yellow()),
        None => println!("No player given: words are drawn uniformly.\n"),
    }

    println!("A hidden word has been drawn. Type its spelling to answer.");
    println!("To input accented characters, add a marker after the letter:");
    println!("  \\ àè   / áéóú   ^ âêîôû   ~ ñ   : äëö   , ç");
    println!("  (espan~ol becomes español; alternatively, just type the accented character)\n");
    println!("Commands: 'new' next word, 'show' reveal, 'dist <text>' probe");
    println!("distance, 'quit' to exit\n");

    let mut round = 1usize;
    let mut answered = 0usize;
    let mut correct = 0usize;

    let first = trainer
        .next_secret(player, &mut rand::rng())
        .map_err(|e| e.to_string())?;
    announce_round(round, first.reveals_definition());

    loop {
        let input = get_user_input("Your spelling (or command)")?;
        if input.is_empty() {
            continue;
        }

        match input.as_str() {
            "quit" | "q" | "exit" => {
                print_session_summary(answered, correct);
                autosave(trainer, save_path);
                return Ok(());
            }
            "new" | "n" => {
                let report = trainer.skip(player, &mut rand::rng()).map_err(|e| e.to_string())?;
                if let Some(revealed) = report.revealed {
                    println!("\nThe word was: {}\n", revealed.raw().bright_white().bold());
                }
                round += 1;
                announce_round(round, report.next.reveals_definition());
            }
            "show" | "s" => {
                if let Some(secret) = trainer.secret() {
                    println!("\n{}\n", format!("|| {} ||", secret.raw()).bright_black());
                }
            }
            _ => {
                if let Some(probe) = input.strip_prefix("dist ").or_else(|| input.strip_prefix("d ")) {
                    let normalized = translate_accents(probe);
                    if let Some(distance) = trainer.probe(&normalized) {
                        println!("\nEdit distance to the closest spelling: {}\n", distance.to_string().bright_cyan());
                    }
                    continue;
                }

                // Anything else is a guess; one guess ends the round
                let normalized = translate_accents(&input);
                let report = trainer
                    .resolve_guess(player, &normalized, &mut rand::rng())
                    .map_err(|e| e.to_string())?;

                answered += 1;
                println!("\n{}", "─".repeat(60));
                if report.correct {
                    correct += 1;
                    println!(
                        "{} {}",
                        verdict_emoji(true),
                        "Correct!".bright_green().bold()
                    );
                } else {
                    println!(
                        "{} {} (distance {} from the closest spelling)",
                        verdict_emoji(false),
                        "Miss".bright_red().bold(),
                        report.distance
                    );
                }
                println!("The word was: {}", report.revealed.raw().bright_white().bold());
                if let Some(change) = report.weight_change {
                    println!("weight change: {}", format_weight_change(change));
                }
                println!("{}\n", "─".repeat(60));

                autosave(trainer, save_path);

                round += 1;
                announce_round(round, report.next.reveals_definition());
            }
        }
    }
}

fn announce_round(round: usize, reveals_definition: bool) {
    println!("🔄 Round {round}: a new hidden word has been drawn.");
    if reveals_definition {
        // No dictionary is bundled, so the marker becomes a notice
        println!("{}", "   (this one is marked for definition review)".bright_black());
    }
    println!();
}

fn print_session_summary(answered: usize, correct: usize) {
    if answered > 0 {
        let pct = correct as f64 / answered as f64 * 100.0;
        println!("\nSession: {correct}/{answered} correct ({pct:.0}%)");
    }
    println!("\n👋 Thanks for practicing!\n");
}

fn autosave(trainer: &Trainer, save_path: Option<&Path>) {
    if let Some(path) = save_path {
        let data = SaveData::from_state(trainer.aggression(), trainer.weights(), trainer.catalogue());
        if let Err(e) = store::save(path, &data) {
            eprintln!("{}", format!("warning: could not save progress: {e}").yellow());
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
