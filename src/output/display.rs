//! Display functions for command results

use super::formatters::weight_bar;
use crate::commands::{NearestResult, PlayerStats, ScoreResult, SimulationResult};
use colored::Colorize;

/// Print the result of scoring a guess against one entry
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring {} against {}",
        result.guess.bright_yellow().bold(),
        result.entry_raw.bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for score in &result.scores {
        let marker = if score.distance == result.best { "▸" } else { " " };
        println!("  {} {:<30} {}", marker, score.spelling, score.distance);
    }

    println!();
    if result.best == 0 {
        println!("{}", "✅ Exact match with an accepted spelling".green().bold());
    } else {
        println!(
            "Closest accepted spelling is {} edit{} away",
            result.best.to_string().bright_yellow().bold(),
            if result.best == 1 { "" } else { "s" }
        );
    }
}

/// Print catalogue entries ranked by closeness to a guess
pub fn print_nearest_result(result: &NearestResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEAREST ENTRIES:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n📊 Against {} catalogue entries:", result.total);

    for (raw, distance) in &result.ranked {
        let styled = if *distance == 0 {
            raw.bright_green().bold()
        } else {
            raw.normal()
        };
        println!("   {distance:>3}  {styled}");
    }
}

/// Print the aggregated simulation report
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Setup:".bright_cyan().bold());
    println!("   Trials:            {}", result.trials);
    println!("   Rounds per trial:  {}", result.rounds);
    println!("   Player accuracy:   {:.0}%", result.requested_accuracy * 100.0);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Outcome:".bright_cyan().bold());
    println!(
        "   Observed accuracy: {}",
        format!("{:.1}%", result.observed_accuracy * 100.0).bright_yellow()
    );
    println!(
        "   Final weights:     mean {:.3}, min {:.3}, max {:.3}",
        result.mean_final_weight, result.min_final_weight, result.max_final_weight
    );
    println!(
        "   Heaviest draw:     {:.1}% of rounds (uniform would be {:.1}%)",
        result.max_share * 100.0,
        result.uniform_share * 100.0
    );

    println!("\n   Most drilled entries:");
    for (raw, picks) in &result.most_drilled {
        println!("     {picks:>6}  {raw}");
    }
}

/// Print a player's weight table
pub fn print_player_stats(stats: &PlayerStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WEIGHTS FOR".bright_cyan().bold(),
        stats.player.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if stats.rows.is_empty() {
        println!("\nNo recorded guesses yet; every entry sits at the neutral 0.50.");
        return;
    }

    println!();
    for (raw, weight) in &stats.rows {
        let bar = weight_bar(*weight, 20);
        let styled_weight = if *weight > 0.5 {
            format!("{weight:.2}").red()
        } else {
            format!("{weight:.2}").green()
        };
        println!("   [{bar}] {styled_weight}  {raw}");
    }
    println!(
        "\n   {} entries recorded; higher weight = drilled more often",
        stats.rows.len()
    );
}
