use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use crate::players::Player;

/// A player with an aggregated total (goals, titles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub player: Player,
    pub total: u32,
}

/// Player lookup used by every ranking.
///
/// Policy: skip orphaned references. Ids that no longer resolve to a player
/// (deleted from the roster, or a failed roster fetch) are left out of the
/// output instead of being reported as errors.
pub struct PlayerIndex<'a> {
    by_id: HashMap<&'a str, &'a Player>,
}

impl<'a> PlayerIndex<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        Self {
            by_id: players
                .iter()
                .map(|player| (player.id.as_str(), player))
                .collect(),
        }
    }

    pub fn resolve(&self, player_id: &str) -> Option<&'a Player> {
        let player = self.by_id.get(player_id).copied();
        if player.is_none() {
            debug!(player_id = %player_id, "Skipping orphaned player reference");
        }
        player
    }
}

/// Highest total first; ties by name (case-insensitive), then by id, so the
/// order never depends on input order.
pub fn compare_ranked(a: &RankedPlayer, b: &RankedPlayer) -> Ordering {
    b.total
        .cmp(&a.total)
        .then_with(|| a.player.name.to_lowercase().cmp(&b.player.name.to_lowercase()))
        .then_with(|| a.player.id.cmp(&b.player.id))
}

/// Resolves per-player totals and sorts them with [`compare_ranked`]
pub fn rank(totals: HashMap<String, u32>, index: &PlayerIndex<'_>) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = totals
        .into_iter()
        .filter_map(|(player_id, total)| {
            index.resolve(&player_id).map(|player| RankedPlayer {
                player: player.clone(),
                total,
            })
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked
}
