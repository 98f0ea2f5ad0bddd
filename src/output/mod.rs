//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_nearest_result, print_player_stats, print_score_result, print_simulation_result,
};
