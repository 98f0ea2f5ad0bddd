//! Player weight report

use crate::trainer::WeightTable;

/// One player's stored weights, heaviest first
#[derive(Debug, Clone)]
pub struct PlayerStats {
    pub player: String,
    /// `(raw entry, weight)` pairs sorted by descending weight
    pub rows: Vec<(String, f64)>,
}

/// Collect a player's stored weights for display
///
/// Only entries the player has actually answered appear; everything else
/// sits at the neutral default and would add nothing to the report.
#[must_use]
pub fn player_stats(weights: &WeightTable, player: &str) -> PlayerStats {
    let mut rows: Vec<(String, f64)> = weights
        .player_weights(player)
        .map(|stored| {
            stored
                .iter()
                .map(|(entry, &weight)| (entry.clone(), weight))
                .collect()
        })
        .unwrap_or_default();

    rows.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    PlayerStats {
        player: player.to_string(),
        rows,
    }
}
